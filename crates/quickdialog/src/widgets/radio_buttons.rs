//! Exclusive radio group state.

use std::fmt;

use quickdialog_core::logging::targets;
use quickdialog_core::{Property, Signal};

use super::{Choices, ValueModel};
use crate::error::{Error, Result};
use crate::layout::Orientation;

/// Minimum number of buttons in a group.
const MIN_BUTTONS: usize = 2;

/// A labelled group of mutually exclusive buttons.
///
/// Exactly one button is selected at all times.
pub struct RadioButtons<V> {
    label: String,
    choices: Choices<V>,
    orientation: Orientation,
    tooltip: Option<String>,
    active: Property<usize>,
    value_changed: Signal<V>,
}

impl RadioButtons<usize> {
    /// A group whose values are the button indices.
    pub fn from_labels<S: Into<String>>(
        label: impl Into<String>,
        buttons: impl IntoIterator<Item = S>,
        active: usize,
    ) -> Result<Self> {
        Self::new(label, Choices::from_labels(buttons), active)
    }
}

impl<V> RadioButtons<V>
where
    V: Clone + PartialEq + fmt::Debug + Send + Sync + 'static,
{
    /// A group over `choices`, with `value` selected.
    pub fn new(label: impl Into<String>, choices: Choices<V>, value: V) -> Result<Self> {
        if choices.len() < MIN_BUTTONS {
            return Err(Error::TooFewChoices {
                min: MIN_BUTTONS,
                actual: choices.len(),
            });
        }
        let active = choices
            .position(&value)
            .ok_or_else(|| Error::unknown_choice(&value))?;
        Ok(Self {
            label: label.into(),
            choices,
            orientation: Orientation::Vertical,
            tooltip: None,
            active: Property::new(active),
            value_changed: Signal::new(),
        })
    }

    /// A group from `(label, value)` pairs or an ordered map.
    pub fn from_pairs<K: fmt::Display>(
        label: impl Into<String>,
        pairs: impl IntoIterator<Item = (K, V)>,
        value: V,
    ) -> Result<Self> {
        Self::new(label, Choices::from_pairs(pairs), value)
    }

    /// Lay the buttons out along `orientation`.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Attach a tooltip shared by every button.
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// The group label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The tooltip, if any.
    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    /// Orientation of the button row or column.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The buttons.
    pub fn choices(&self) -> &Choices<V> {
        &self.choices
    }

    /// Index of the selected button.
    pub fn active_index(&self) -> usize {
        self.active.get()
    }

    /// Select by index.
    pub fn set_active_index(&self, index: usize) -> Result<bool> {
        let Some(value) = self.choices.value(index).cloned() else {
            return Err(Error::ChoiceOutOfRange {
                index,
                len: self.choices.len(),
            });
        };
        let changed = self.active.set(index);
        if changed {
            tracing::trace!(target: targets::WIDGET, label = %self.label, index, "radio selection changed");
            self.value_changed.emit(value);
        }
        Ok(changed)
    }
}

impl<V> ValueModel for RadioButtons<V>
where
    V: Clone + PartialEq + fmt::Debug + Send + Sync + 'static,
{
    type Value = V;

    fn value(&self) -> V {
        // validated on every write
        self.choices.values()[self.active_index()].clone()
    }

    fn set_value(&self, value: V) -> Result<bool> {
        let index = self
            .choices
            .position(&value)
            .ok_or_else(|| Error::unknown_choice(&value))?;
        self.set_active_index(index)
    }

    fn reset(&self) -> bool {
        let changed = self.active.reset();
        if changed {
            self.value_changed.emit(self.value());
        }
        changed
    }

    fn value_changed(&self) -> &Signal<V> {
        &self.value_changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_two_buttons() {
        assert!(matches!(
            RadioButtons::from_labels("Radio", ["only"], 0),
            Err(Error::TooFewChoices { min: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_index_values() {
        let radio =
            RadioButtons::from_labels("Radio Buttons", ["Choice A", "Choice B", "Choice C"], 0)
                .unwrap();
        assert_eq!(radio.value(), 0);
        assert!(radio.set_value(2).unwrap());
        assert_eq!(radio.value(), 2);
        assert!(matches!(radio.set_value(7), Err(Error::UnknownChoice(_))));
        assert_eq!(radio.value(), 2);
    }

    #[test]
    fn test_pair_values_and_reset() {
        let radio = RadioButtons::from_pairs("Mode", [("Fast", "fast"), ("Slow", "slow")], "slow")
            .unwrap()
            .with_orientation(Orientation::Horizontal);
        assert_eq!(radio.active_index(), 1);
        radio.set_value("fast").unwrap();
        assert!(radio.reset());
        assert_eq!(radio.value(), "slow");
        assert_eq!(radio.orientation(), Orientation::Horizontal);
    }

    #[test]
    fn test_initial_value_must_exist() {
        assert!(matches!(
            RadioButtons::from_pairs("Mode", [("A", 1), ("B", 2)], 3),
            Err(Error::UnknownChoice(_))
        ));
    }
}
