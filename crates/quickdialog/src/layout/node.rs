//! Nested layout descriptions.

use super::Spacer;

/// One element of a nested layout description.
///
/// A group's children are packed with the orientation perpendicular to the
/// group's parent, so nesting alternates rows and columns.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutNode<L> {
    /// An opaque widget handle.
    Leaf(L),
    /// A blank element with a fixed size.
    Spacer(Spacer),
    /// A nested sequence.
    Group(Vec<LayoutNode<L>>),
}

impl<L> LayoutNode<L> {
    /// Wrap a widget handle.
    pub fn leaf(widget: L) -> Self {
        LayoutNode::Leaf(widget)
    }

    /// A fixed-size blank element.
    pub fn spacer(width: u32, height: u32) -> Self {
        LayoutNode::Spacer(Spacer::new(width, height))
    }

    /// A nested group.
    pub fn group(children: impl IntoIterator<Item = LayoutNode<L>>) -> Self {
        LayoutNode::Group(children.into_iter().collect())
    }
}

impl<L> From<Spacer> for LayoutNode<L> {
    fn from(spacer: Spacer) -> Self {
        LayoutNode::Spacer(spacer)
    }
}

impl<L> From<Vec<LayoutNode<L>>> for LayoutNode<L> {
    fn from(children: Vec<LayoutNode<L>>) -> Self {
        LayoutNode::Group(children)
    }
}
