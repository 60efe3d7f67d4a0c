//! An in-memory toolkit for tests, demos and layout debugging.
//!
//! [`BoxNode`] implements [`Container`] and [`HeadlessGrid`] implements
//! [`GridBackend`], so the layout builders can run without a display. The
//! resulting [`Widget`] trees can be inspected directly or rendered with
//! [`Widget::dump_tree`].

use std::collections::HashMap;

use parking_lot::Mutex;
use quickdialog_core::logging::targets;
use quickdialog_core::{TreeFormatOptions, TreeNode, format_tree};

use crate::bind::WidgetHandle;
use crate::grid::{GridBackend, Placement, footprint};
use crate::layout::{Container, Orientation, Packing, Spacer};

/// A headless widget.
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    /// A text label.
    Label(String),
    /// A blank element with a size request.
    Spacer(Spacer),
    /// A linear container.
    Box(BoxNode),
}

impl Widget {
    /// A label widget.
    pub fn label(text: impl Into<String>) -> Self {
        Widget::Label(text.into())
    }

    /// The label text, for label widgets.
    pub fn as_label(&self) -> Option<&str> {
        match self {
            Widget::Label(text) => Some(text),
            _ => None,
        }
    }

    /// The container, for box widgets.
    pub fn as_box(&self) -> Option<&BoxNode> {
        match self {
            Widget::Box(node) => Some(node),
            _ => None,
        }
    }

    /// Render this widget and its descendants as ASCII art.
    pub fn dump_tree(&self) -> String {
        format_tree(self, &TreeFormatOptions::ascii())
    }
}

impl TreeNode for Widget {
    fn label(&self) -> String {
        match self {
            Widget::Label(text) => format!("label {text:?}"),
            Widget::Spacer(spacer) => format!("spacer {spacer}"),
            Widget::Box(node) => format!("{} spacing={}", node.orientation, node.spacing),
        }
    }

    fn tree_children(&self) -> Vec<&Self> {
        match self {
            Widget::Box(node) => node.children.iter().collect(),
            _ => Vec::new(),
        }
    }
}

impl From<BoxNode> for Widget {
    fn from(node: BoxNode) -> Self {
        Widget::Box(node)
    }
}

/// A headless linear container.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxNode {
    orientation: Orientation,
    spacing: u32,
    children: Vec<Widget>,
    packings: Vec<Packing>,
}

impl BoxNode {
    /// Packing direction.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Gap between children.
    pub fn spacing(&self) -> u32 {
        self.spacing
    }

    /// Children in packing order.
    pub fn children(&self) -> &[Widget] {
        &self.children
    }

    /// Packing of each child, parallel to [`children`](Self::children).
    pub fn packings(&self) -> &[Packing] {
        &self.packings
    }

    /// Texts of the label children, skipping everything else.
    pub fn child_labels(&self) -> Vec<&str> {
        self.children.iter().filter_map(Widget::as_label).collect()
    }

    /// Number of children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

impl Container for BoxNode {
    type Child = Widget;

    fn new(orientation: Orientation, spacing: u32) -> Self {
        Self {
            orientation,
            spacing,
            children: Vec::new(),
            packings: Vec::new(),
        }
    }

    fn append(&mut self, child: Widget, packing: Packing) {
        self.children.push(child);
        self.packings.push(packing);
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn spacer(spacer: Spacer) -> Widget {
        Widget::Spacer(spacer)
    }
}

/// A widget attached to a [`HeadlessGrid`].
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    /// The attached widget.
    pub widget: Widget,
    /// Its cells.
    pub placement: Placement,
}

/// A headless grid that records attachments.
#[derive(Debug, Default)]
pub struct HeadlessGrid {
    cells: HashMap<(i32, i32), usize>,
    attachments: Vec<Attachment>,
}

impl HeadlessGrid {
    /// An empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything attached so far, in attach order.
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Where the label with `text` was placed.
    pub fn placement_of(&self, text: &str) -> Option<Placement> {
        self.attachments
            .iter()
            .find(|a| a.widget.as_label() == Some(text))
            .map(|a| a.placement)
    }

    /// Number of attached widgets.
    pub fn len(&self) -> usize {
        self.attachments.len()
    }

    /// Whether nothing is attached.
    pub fn is_empty(&self) -> bool {
        self.attachments.is_empty()
    }
}

impl GridBackend for HeadlessGrid {
    type Leaf = Widget;

    fn child_at(&self, column: i32, row: i32) -> Option<&Widget> {
        self.cells
            .get(&(column, row))
            .map(|&index| &self.attachments[index].widget)
    }

    fn attach(&mut self, leaf: Widget, column: i32, row: i32, width: u32, height: u32) {
        let index = self.attachments.len();
        for cell in footprint(column, row, width, height) {
            self.cells.insert(cell, index);
        }
        self.attachments.push(Attachment {
            widget: leaf,
            placement: Placement {
                column,
                row,
                width,
                height,
            },
        });
    }
}

/// A fake control that records what a binding pushes into it.
///
/// [`simulate_edit`](Self::simulate_edit) stands in for the user typing into
/// the control; the next [`pull`](WidgetHandle::pull) reports that value.
#[derive(Debug)]
pub struct RecordingHandle<V> {
    shown: Mutex<Option<V>>,
    pushed: Mutex<Vec<V>>,
}

impl<V> Default for RecordingHandle<V> {
    fn default() -> Self {
        Self {
            shown: Mutex::new(None),
            pushed: Mutex::new(Vec::new()),
        }
    }
}

impl<V: Clone> RecordingHandle<V> {
    /// A handle showing nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the shown value as a user edit would, without pushing.
    pub fn simulate_edit(&self, value: V) {
        *self.shown.lock() = Some(value);
    }

    /// The value currently shown.
    pub fn shown(&self) -> Option<V> {
        self.shown.lock().clone()
    }

    /// Every value pushed so far.
    pub fn pushed(&self) -> Vec<V> {
        self.pushed.lock().clone()
    }
}

impl<V: Clone + std::fmt::Debug + Send> WidgetHandle<V> for RecordingHandle<V> {
    fn push(&self, value: &V) {
        tracing::trace!(target: targets::BIND, ?value, "headless push");
        *self.shown.lock() = Some(value.clone());
        self.pushed.lock().push(value.clone());
    }

    fn pull(&self) -> Option<V> {
        self.shown.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_records_children_and_packing() {
        let mut node = BoxNode::new(Orientation::Horizontal, 15);
        node.append(Widget::label("a"), Packing::default());
        node.append(BoxNode::spacer(Spacer::new(5, 5)), Packing::default());
        assert_eq!(Container::child_count(&node), 2);
        assert_eq!(node.child_labels(), vec!["a"]);
        assert_eq!(node.packings().len(), 2);
    }

    #[test]
    fn test_dump_tree() {
        let mut inner = BoxNode::new(Orientation::Vertical, 5);
        inner.append(Widget::label("b"), Packing::default());
        inner.append(Widget::label("c"), Packing::default());
        let mut root = BoxNode::new(Orientation::Horizontal, 15);
        root.append(Widget::label("a"), Packing::default());
        root.append(inner.into(), Packing::default());

        let expected = "horizontal spacing=15\n\
                        |-- label \"a\"\n\
                        `-- vertical spacing=5\n    \
                        |-- label \"b\"\n    \
                        `-- label \"c\"\n";
        assert_eq!(Widget::from(root).dump_tree(), expected);
    }

    #[test]
    fn test_grid_cells_cover_footprint() {
        let mut grid = HeadlessGrid::new();
        grid.attach(Widget::label("wide"), 1, 1, 2, 2);
        assert_eq!(grid.child_at(2, 2), Some(&Widget::label("wide")));
        assert_eq!(grid.child_at(3, 1), None);
        assert_eq!(
            grid.placement_of("wide"),
            Some(Placement { column: 1, row: 1, width: 2, height: 2 })
        );
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn test_grid_footprint_stops_at_range_edge() {
        let mut grid = HeadlessGrid::new();
        grid.attach(Widget::label("edge"), i32::MAX - 1, 0, 4, 1);
        assert_eq!(grid.child_at(i32::MAX, 0), Some(&Widget::label("edge")));
        assert_eq!(grid.child_at(i32::MAX - 2, 0), None);
        assert_eq!(grid.child_at(0, 0), None);
    }

    #[test]
    fn test_recording_handle() {
        let handle = RecordingHandle::new();
        handle.push(&3);
        handle.simulate_edit(7);
        assert_eq!(handle.pull(), Some(7));
        assert_eq!(handle.pushed(), vec![3]);
    }
}
