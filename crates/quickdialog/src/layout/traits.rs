//! The container capability the layout builders drive.

use super::{Orientation, Packing, Spacer};

/// A linear container supplied by a widget toolkit.
///
/// The builders in this module never inspect children: they only create
/// containers, append children to them and ask how many children a container
/// holds. A toolkit binding implements this trait for its box widget, with
/// `Child` being whatever the toolkit accepts as a packable element.
pub trait Container: Sized {
    /// Anything that can be appended to a container, including containers.
    type Child: From<Self>;

    /// Create an empty container.
    fn new(orientation: Orientation, spacing: u32) -> Self;

    /// Append a child at the end.
    fn append(&mut self, child: Self::Child, packing: Packing);

    /// Number of children appended so far.
    fn child_count(&self) -> usize;

    /// Create a blank child with a fixed size request.
    fn spacer(spacer: Spacer) -> Self::Child;
}
