//! Recursive box layout from nested lists.
//!
//! [`AutoBox`] turns a nested description such as
//!
//! ```text
//! [[a, b, c], d, [e, [f, g]]]
//! ```
//!
//! into a tree of linear containers whose orientation alternates with depth:
//! with a vertical root, `[a, b, c]` becomes a horizontal row, `[f, g]`
//! inside `[e, [f, g]]` becomes a vertical column, and so on.
//!
//! # Pruning and single children
//!
//! Empty groups produce nothing and are left out of their parent. A group
//! that ends up with exactly one child yields that child itself instead of
//! a container wrapping it. Both rules apply at every depth, so
//! `[[], x]` builds to just `x` and `[]` builds to nothing.

use quickdialog_core::logging::{span_names, targets};

use super::{Container, LayoutNode, Orientation, Packing};
use crate::config::AutoBoxConfig;

/// Default spacing between children of vertical containers.
pub const DEFAULT_VSPACING: u32 = 5;

/// Default spacing between children of horizontal containers.
pub const DEFAULT_HSPACING: u32 = 15;

/// Builder for recursive box layouts.
///
/// # Example
///
/// ```
/// use quickdialog::headless::Widget;
/// use quickdialog::layout::{AutoBox, LayoutNode, Orientation};
///
/// let layout = AutoBox::new()
///     .orientation(Orientation::Horizontal)
///     .build::<quickdialog::headless::BoxNode>(vec![
///         LayoutNode::leaf(Widget::label("name")),
///         LayoutNode::leaf(Widget::label("value")),
///     ]);
/// assert!(layout.is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoBox {
    vspacing: u32,
    hspacing: u32,
    orientation: Orientation,
}

impl Default for AutoBox {
    fn default() -> Self {
        Self {
            vspacing: DEFAULT_VSPACING,
            hspacing: DEFAULT_HSPACING,
            orientation: Orientation::Vertical,
        }
    }
}

impl AutoBox {
    /// Builder with the default spacings and a vertical root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder initialised from a loaded configuration.
    pub fn from_config(config: &AutoBoxConfig) -> Self {
        Self {
            vspacing: config.vspacing,
            hspacing: config.hspacing,
            orientation: config.orientation,
        }
    }

    /// Spacing used by vertical containers.
    pub fn vspacing(mut self, spacing: u32) -> Self {
        self.vspacing = spacing;
        self
    }

    /// Spacing used by horizontal containers.
    pub fn hspacing(mut self, spacing: u32) -> Self {
        self.hspacing = spacing;
        self
    }

    /// Orientation of the outermost container.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Spacing for a container of the given orientation.
    pub fn spacing_for(&self, orientation: Orientation) -> u32 {
        match orientation {
            Orientation::Vertical => self.vspacing,
            Orientation::Horizontal => self.hspacing,
        }
    }

    /// Build the layout. Returns `None` when nothing survives pruning.
    pub fn build<C: Container>(
        &self,
        items: impl IntoIterator<Item = LayoutNode<C::Child>>,
    ) -> Option<C::Child> {
        let _span = tracing::debug_span!(
            target: targets::LAYOUT,
            span_names::AUTO_BOX,
            orientation = %self.orientation
        )
        .entered();

        let result = self.build_level::<C>(items, self.orientation, 0);
        tracing::debug!(target: targets::LAYOUT, empty = result.is_none(), "auto box built");
        result
    }

    fn build_level<C: Container>(
        &self,
        items: impl IntoIterator<Item = LayoutNode<C::Child>>,
        orientation: Orientation,
        depth: usize,
    ) -> Option<C::Child> {
        let mut children: Vec<C::Child> = Vec::new();
        for item in items {
            let child = match item {
                LayoutNode::Leaf(widget) => Some(widget),
                LayoutNode::Spacer(spacer) => Some(C::spacer(spacer)),
                LayoutNode::Group(group) => {
                    self.build_level::<C>(group, orientation.cross(), depth + 1)
                }
            };
            children.extend(child);
        }

        if children.len() <= 1 {
            return children.pop();
        }

        let mut container = C::new(orientation, self.spacing_for(orientation));
        for child in children {
            container.append(child, Packing::default());
        }
        tracing::trace!(
            target: targets::LAYOUT,
            depth,
            %orientation,
            children = container.child_count(),
            "packed container"
        );
        Some(container.into())
    }
}

/// Build a recursive box layout with explicit spacings and root orientation.
///
/// Shorthand for [`AutoBox::build`].
pub fn auto_box<C: Container>(
    items: impl IntoIterator<Item = LayoutNode<C::Child>>,
    vspacing: u32,
    hspacing: u32,
    orientation: Orientation,
) -> Option<C::Child> {
    AutoBox::new()
        .vspacing(vspacing)
        .hspacing(hspacing)
        .orientation(orientation)
        .build::<C>(items)
}
