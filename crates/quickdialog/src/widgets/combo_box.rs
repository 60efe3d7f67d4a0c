//! Drop-down selection state.

use std::fmt;

use quickdialog_core::logging::targets;
use quickdialog_core::{Property, Signal};

use super::{Choices, ValueModel};
use crate::error::{Error, Result};

/// A drop-down list of labelled choices with at most one active.
///
/// The value is the active choice's associated value, or `None` when
/// nothing is selected. Built with [`from_labels`](ComboBox::from_labels)
/// the value is the active index.
pub struct ComboBox<V> {
    choices: Choices<V>,
    tooltip: Option<String>,
    active: Property<Option<usize>>,
    value_changed: Signal<Option<V>>,
}

impl ComboBox<usize> {
    /// A combo box whose values are the choice indices.
    pub fn from_labels<S: Into<String>>(
        labels: impl IntoIterator<Item = S>,
        active: Option<usize>,
    ) -> Result<Self> {
        Self::new(Choices::from_labels(labels), active)
    }
}

impl<V> ComboBox<V>
where
    V: Clone + PartialEq + fmt::Debug + Send + Sync + 'static,
{
    /// A combo box over `choices`, selecting `value` initially.
    pub fn new(choices: Choices<V>, value: Option<V>) -> Result<Self> {
        let active = match &value {
            Some(value) => Some(
                choices
                    .position(value)
                    .ok_or_else(|| Error::unknown_choice(value))?,
            ),
            None => None,
        };
        Ok(Self {
            choices,
            tooltip: None,
            active: Property::new(active),
            value_changed: Signal::new(),
        })
    }

    /// A combo box from `(label, value)` pairs or an ordered map.
    pub fn from_pairs<K: fmt::Display>(
        pairs: impl IntoIterator<Item = (K, V)>,
        value: Option<V>,
    ) -> Result<Self> {
        Self::new(Choices::from_pairs(pairs), value)
    }

    /// Attach a tooltip.
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// The tooltip, if any.
    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    /// The choices.
    pub fn choices(&self) -> &Choices<V> {
        &self.choices
    }

    /// Index of the active choice.
    pub fn active_index(&self) -> Option<usize> {
        self.active.get()
    }

    /// Select by index, or clear the selection with `None`.
    pub fn set_active_index(&self, index: Option<usize>) -> Result<bool> {
        if let Some(index) = index
            && index >= self.choices.len()
        {
            return Err(Error::ChoiceOutOfRange {
                index,
                len: self.choices.len(),
            });
        }
        let changed = self.active.set(index);
        if changed {
            let value = self.value();
            tracing::trace!(target: targets::WIDGET, ?index, "combo box changed");
            self.value_changed.emit(value);
        }
        Ok(changed)
    }

    /// Label of the active choice.
    pub fn active_label(&self) -> Option<&str> {
        self.active_index().and_then(|index| self.choices.label(index))
    }
}

impl<V> ValueModel for ComboBox<V>
where
    V: Clone + PartialEq + fmt::Debug + Send + Sync + 'static,
{
    type Value = Option<V>;

    fn value(&self) -> Option<V> {
        self.active_index()
            .and_then(|index| self.choices.value(index).cloned())
    }

    fn set_value(&self, value: Option<V>) -> Result<bool> {
        let index = match value {
            Some(value) => Some(
                self.choices
                    .position(&value)
                    .ok_or_else(|| Error::unknown_choice(&value))?,
            ),
            None => None,
        };
        self.set_active_index(index)
    }

    fn reset(&self) -> bool {
        let changed = self.active.reset();
        if changed {
            self.value_changed.emit(self.value());
        }
        changed
    }

    fn value_changed(&self) -> &Signal<Option<V>> {
        &self.value_changed
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;

    #[test]
    fn test_labels_give_indices() {
        let combo = ComboBox::from_labels(["A", "B", "C"], Some(1)).unwrap();
        assert_eq!(combo.value(), Some(1));
        assert_eq!(combo.active_label(), Some("B"));
        assert!(combo.set_value(Some(2)).unwrap());
        assert_eq!(combo.active_label(), Some("C"));
    }

    #[test]
    fn test_pairs_give_associated_values() {
        let combo = ComboBox::from_pairs(
            [("Choice A", "a"), ("Choice B", "b"), ("Choice C", "c")],
            Some("a"),
        )
        .unwrap()
        .with_tooltip("Combo Box");

        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        combo
            .value_changed()
            .connect(move |v| seen_clone.lock().push(*v));

        combo.set_value(Some("b")).unwrap();
        combo.set_value(None).unwrap();
        assert_eq!(*seen.lock(), vec![Some("b"), None]);
        assert_eq!(combo.value(), None);
        assert_eq!(combo.tooltip(), Some("Combo Box"));
    }

    #[test]
    fn test_map_constructor() {
        let map: BTreeMap<String, u8> = [("x".to_string(), 9), ("w".to_string(), 4)].into();
        let combo = ComboBox::from_pairs(map, Some(9)).unwrap();
        assert_eq!(combo.active_index(), Some(1));
    }

    #[test]
    fn test_unknown_values_are_rejected() {
        assert!(matches!(
            ComboBox::from_pairs([("A", 'a')], Some('q')),
            Err(Error::UnknownChoice(_))
        ));
        let combo = ComboBox::from_pairs([("A", 'a')], None).unwrap();
        assert!(matches!(combo.set_value(Some('q')), Err(Error::UnknownChoice(_))));
        assert!(matches!(
            combo.set_active_index(Some(4)),
            Err(Error::ChoiceOutOfRange { index: 4, len: 1 })
        ));
    }

    #[test]
    fn test_reset() {
        let combo = ComboBox::from_labels(["A", "B"], Some(0)).unwrap();
        combo.set_value(Some(1)).unwrap();
        assert!(combo.reset());
        assert_eq!(combo.value(), Some(0));
    }
}
