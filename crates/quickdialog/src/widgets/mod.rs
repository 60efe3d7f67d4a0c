//! Toolkit-independent widget state.
//!
//! Each model here owns the authoritative value of one kind of dialog
//! control. A toolkit binding renders the control and keeps it in sync with
//! the model through [`bind`](crate::bind::bind); the model never reads
//! through to live widget state on its own.
//!
//! Models are built from plain data: a combo box from a list of labels or a
//! map of label to value, a radio group from the same, an adjuster from
//! numbers.
//!
//! # Example
//!
//! ```
//! use quickdialog::widgets::{ComboBox, ValueModel};
//!
//! let combo = ComboBox::from_pairs(
//!     [("Choice A", "a"), ("Choice B", "b"), ("Choice C", "c")],
//!     Some("a"),
//! )
//! .unwrap();
//! combo.set_value(Some("c")).unwrap();
//! assert_eq!(combo.value(), Some("c"));
//! ```

mod adjuster;
mod check_box;
mod choices;
mod combo_box;
mod entry;
mod radio_buttons;

pub use adjuster::Adjuster;
pub use check_box::CheckBox;
pub use choices::Choices;
pub use combo_box::ComboBox;
pub use entry::{DEFAULT_ENTRY_SIZE, Entry};
pub use radio_buttons::RadioButtons;

use std::fmt;

use quickdialog_core::Signal;

use crate::error::Result;

/// Common accessors of every value model.
pub trait ValueModel: Send + Sync {
    /// The value the control edits.
    type Value: Clone + PartialEq + fmt::Debug + Send + 'static;

    /// The current value.
    fn value(&self) -> Self::Value;

    /// Store a new value, returning `true` if it changed.
    ///
    /// Emits [`value_changed`](Self::value_changed) on change.
    fn set_value(&self, value: Self::Value) -> Result<bool>;

    /// Restore the value the model was created with.
    fn reset(&self) -> bool;

    /// Emitted with the new value whenever the value changes.
    fn value_changed(&self) -> &Signal<Self::Value>;
}
