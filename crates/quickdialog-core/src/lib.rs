//! Core systems for quickdialog.
//!
//! This crate provides the reactive building blocks the value models in
//! `quickdialog` are made of:
//!
//! - **Property System**: value cells with change detection and reset
//! - **Signal/Slot System**: type-safe change notification
//! - **Logging**: tracing targets and tree formatting for debug output
//!
//! # Example
//!
//! ```
//! use quickdialog_core::{Property, Signal};
//!
//! let value = Property::new(0);
//! let value_changed = Signal::<i32>::new();
//! value_changed.connect(|v| println!("value = {v}"));
//!
//! if value.set(5) {
//!     value_changed.emit(5);
//! }
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use logging::{TreeFormatOptions, TreeNode, TreeStyle, format_tree};
pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
