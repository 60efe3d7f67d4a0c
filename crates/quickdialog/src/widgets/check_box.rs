//! Boolean toggle state.

use quickdialog_core::logging::targets;
use quickdialog_core::{Property, Signal};

use super::ValueModel;
use crate::error::Result;

/// A labelled on/off value.
pub struct CheckBox {
    label: String,
    tooltip: Option<String>,
    checked: Property<bool>,
    value_changed: Signal<bool>,
}

impl CheckBox {
    /// Create a check box with its initial state.
    pub fn new(label: impl Into<String>, checked: bool) -> Self {
        Self {
            label: label.into(),
            tooltip: None,
            checked: Property::new(checked),
            value_changed: Signal::new(),
        }
    }

    /// Attach a tooltip.
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// The label text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The tooltip, if any.
    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    /// Whether the box is checked.
    pub fn is_checked(&self) -> bool {
        self.checked.get()
    }

    /// Set the state, emitting `value_changed` on change.
    pub fn set_checked(&self, checked: bool) -> bool {
        let changed = self.checked.set(checked);
        if changed {
            tracing::trace!(target: targets::WIDGET, label = %self.label, checked, "check box changed");
            self.value_changed.emit(checked);
        }
        changed
    }

    /// Flip the state.
    pub fn toggle(&self) {
        self.set_checked(!self.is_checked());
    }
}

impl ValueModel for CheckBox {
    type Value = bool;

    fn value(&self) -> bool {
        self.is_checked()
    }

    fn set_value(&self, value: bool) -> Result<bool> {
        Ok(self.set_checked(value))
    }

    fn reset(&self) -> bool {
        let changed = self.checked.reset();
        if changed {
            self.value_changed.emit(self.is_checked());
        }
        changed
    }

    fn value_changed(&self) -> &Signal<bool> {
        &self.value_changed
    }
}
