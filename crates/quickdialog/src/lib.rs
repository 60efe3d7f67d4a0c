//! quickdialog - layout and value-model helpers for small dialog utilities.
//!
//! The crate is toolkit-independent. A toolkit binding supplies two
//! capabilities, a linear [`Container`](layout::Container) and a
//! [`GridBackend`](grid::GridBackend), and gets:
//!
//! - [`layout`]: recursive box layouts from nested lists, alternating
//!   orientation with depth
//! - [`grid`]: batch grid placement that pushes colliding requests along a
//!   direction until they fit
//! - [`scale`]: the sign-preserving logarithm used by logarithmic sliders
//! - [`widgets`]: value models for adjusters, check boxes, combo boxes,
//!   radio groups and text entries
//! - [`bind`]: two-way synchronisation between a model and a control
//!
//! The [`headless`] module implements both capabilities in memory.
//!
//! # Example
//!
//! ```
//! use quickdialog::headless::{BoxNode, Widget};
//! use quickdialog::layout::{AutoBox, LayoutNode};
//!
//! let leaf = |text: &str| LayoutNode::leaf(Widget::label(text));
//! let dialog = AutoBox::new()
//!     .build::<BoxNode>(vec![
//!         LayoutNode::group(vec![leaf("Name"), leaf("Value")]),
//!         leaf("Apply"),
//!     ])
//!     .unwrap();
//! print!("{}", dialog.dump_tree());
//! ```

pub mod bind;
pub mod config;
pub mod error;
pub mod grid;
pub mod headless;
pub mod layout;
pub mod scale;
pub mod widgets;

pub use config::LayoutConfig;
pub use error::{Error, Result};

pub use quickdialog_core::logging;

use static_assertions::assert_impl_all;

assert_impl_all!(grid::Grid<headless::HeadlessGrid>: Send, Sync);
assert_impl_all!(widgets::Adjuster: Send, Sync);
assert_impl_all!(widgets::ComboBox<String>: Send, Sync);
assert_impl_all!(Error: Send, Sync);
