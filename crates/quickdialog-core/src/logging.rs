//! Logging and debugging facilities for quickdialog.
//!
//! quickdialog uses the `tracing` crate for instrumentation. Nothing is
//! printed unless the application installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("quickdialog=debug")
//!     .init();
//! ```
//!
//! The [`targets`] constants name the subsystems so logs can be filtered,
//! and [`format_tree`] renders any [`TreeNode`] hierarchy for debugging
//! layout results.

use std::fmt::Write as FmtWrite;

/// Span names used throughout quickdialog for tracing.
pub mod span_names {
    /// Recursive box construction.
    pub const AUTO_BOX: &str = "quickdialog::auto_box";
    /// One grid placement batch.
    pub const ATTACH_ALL: &str = "quickdialog::attach_all";
}

/// Target names for log filtering.
pub mod targets {
    /// Box layout construction.
    pub const LAYOUT: &str = "quickdialog::layout";
    /// Grid placement.
    pub const GRID: &str = "quickdialog::grid";
    /// Logarithmic scale transforms.
    pub const SCALE: &str = "quickdialog::scale";
    /// Value models.
    pub const WIDGET: &str = "quickdialog::widgets";
    /// Model/widget bindings.
    pub const BIND: &str = "quickdialog::bind";
    /// Configuration loading.
    pub const CONFIG: &str = "quickdialog::config";
    /// Signal/slot system.
    pub const SIGNAL: &str = "quickdialog_core::signal";
    /// Property system.
    pub const PROPERTY: &str = "quickdialog_core::property";
}

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Plain indentation, no branch glyphs.
    Indent,
}

impl TreeStyle {
    fn branch(self, is_last: bool) -> &'static str {
        match (self, is_last) {
            (TreeStyle::Ascii, false) => "|-- ",
            (TreeStyle::Ascii, true) => "`-- ",
            (TreeStyle::Unicode, false) => "├── ",
            (TreeStyle::Unicode, true) => "└── ",
            (TreeStyle::Indent, _) => "",
        }
    }

    fn continuation(self, is_last: bool) -> &'static str {
        match (self, is_last) {
            (TreeStyle::Ascii, false) => "|   ",
            (TreeStyle::Unicode, false) => "│   ",
            (TreeStyle::Ascii | TreeStyle::Unicode, true) => "    ",
            (TreeStyle::Indent, _) => "  ",
        }
    }
}

/// Configuration for [`format_tree`].
#[derive(Debug, Clone, Default)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Maximum depth to render (None for unlimited).
    pub max_depth: Option<usize>,
}

impl TreeFormatOptions {
    /// ASCII-only output, handy for snapshot-style assertions.
    pub fn ascii() -> Self {
        Self {
            style: TreeStyle::Ascii,
            ..Default::default()
        }
    }
}

/// A node that can be rendered by [`format_tree`].
pub trait TreeNode {
    /// One-line description of this node.
    fn label(&self) -> String;

    /// Child nodes in display order.
    fn tree_children(&self) -> Vec<&Self>;
}

/// Render a tree, one node per line.
pub fn format_tree<N: TreeNode>(root: &N, options: &TreeFormatOptions) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{}", root.label());
    format_children(root, 1, "", options, &mut output);
    output
}

fn format_children<N: TreeNode>(
    node: &N,
    depth: usize,
    prefix: &str,
    options: &TreeFormatOptions,
    output: &mut String,
) {
    let children = node.tree_children();
    if children.is_empty() {
        return;
    }
    if options.max_depth.is_some_and(|max| depth > max) {
        let _ = writeln!(output, "{prefix}...");
        return;
    }

    let count = children.len();
    for (index, child) in children.into_iter().enumerate() {
        let is_last = index + 1 == count;
        let _ = writeln!(
            output,
            "{prefix}{}{}",
            options.style.branch(is_last),
            child.label()
        );
        let next_prefix = format!("{prefix}{}", options.style.continuation(is_last));
        format_children(child, depth + 1, &next_prefix, options, output);
    }
}
