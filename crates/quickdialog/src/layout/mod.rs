//! Box layout construction.
//!
//! This module builds trees of linear containers from nested descriptions:
//!
//! - [`Container`]: the capability a toolkit's box widget provides
//! - [`LayoutNode`]: a leaf, a fixed-size [`Spacer`], or a nested group
//! - [`AutoBox`]: the recursive builder, alternating orientation per depth
//!
//! # Example
//!
//! ```
//! use quickdialog::headless::{BoxNode, Widget};
//! use quickdialog::layout::{AutoBox, LayoutNode};
//!
//! let leaf = |text: &str| LayoutNode::leaf(Widget::label(text));
//! let root = AutoBox::new()
//!     .build::<BoxNode>(vec![
//!         LayoutNode::group(vec![leaf("1"), leaf("2"), LayoutNode::spacer(50, 50), leaf("3")]),
//!         LayoutNode::group(vec![leaf("4"), leaf("5")]),
//!     ])
//!     .unwrap();
//! assert_eq!(root.as_box().unwrap().child_count(), 2);
//! ```

mod auto_box;
mod node;
mod orientation;
mod spacer;
mod traits;

pub use auto_box::{AutoBox, DEFAULT_HSPACING, DEFAULT_VSPACING, auto_box};
pub use node::LayoutNode;
pub use orientation::{Orientation, Packing};
pub use spacer::Spacer;
pub use traits::Container;
