//! Two-way synchronisation between a value model and a toolkit control.
//!
//! A binding pushes the model's value into the control on creation and on
//! every model change. User edits travel the other way only when the
//! toolkit calls [`ValueBinding::pull`], typically from the control's own
//! change notification. A pull writes the model without pushing the value
//! straight back into the control it came from. When the model stores
//! something other than what was pulled, e.g. after clamping or rounding,
//! the stored value is pushed so the control shows what the model holds.
//!
//! ```
//! use std::sync::Arc;
//!
//! use quickdialog::bind::bind;
//! use quickdialog::headless::RecordingHandle;
//! use quickdialog::widgets::{CheckBox, ValueModel};
//!
//! let check = CheckBox::new("Enabled", false);
//! let control = Arc::new(RecordingHandle::<bool>::new());
//! let binding = bind(&check, control.clone());
//!
//! control.simulate_edit(true);
//! binding.pull().unwrap();
//! assert!(check.value());
//! assert_eq!(control.pushed(), vec![false]);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use quickdialog_core::ConnectionGuard;
use quickdialog_core::logging::targets;

use crate::error::Result;
use crate::widgets::ValueModel;

/// The toolkit side of a binding.
pub trait WidgetHandle<V>: Send + Sync {
    /// Show `value` in the control.
    fn push(&self, value: &V);

    /// The value the control currently shows, if it has one.
    fn pull(&self) -> Option<V>;
}

/// A value on its way from the control into the model.
struct Pending<V> {
    value: V,
    pushed: bool,
}

type PendingSlot<V> = Arc<Mutex<Option<Pending<V>>>>;

/// A live model/control binding. Dropping it disconnects the two.
pub struct ValueBinding<'a, M: ValueModel> {
    model: &'a M,
    handle: Arc<dyn WidgetHandle<M::Value>>,
    pending: PendingSlot<M::Value>,
    _connection: ConnectionGuard<'a, M::Value>,
}

/// Bind `model` to a control, pushing the current value immediately.
pub fn bind<M: ValueModel>(model: &M, handle: Arc<dyn WidgetHandle<M::Value>>) -> ValueBinding<'_, M> {
    handle.push(&model.value());

    let pending: PendingSlot<M::Value> = Arc::new(Mutex::new(None));
    let connection = {
        let handle = Arc::clone(&handle);
        let pending = Arc::clone(&pending);
        model.value_changed().connect_scoped(move |value| {
            if let Some(pull) = pending.lock().as_mut() {
                if pull.value == *value {
                    tracing::trace!(target: targets::BIND, "change came from the control, not pushing");
                    return;
                }
                pull.pushed = true;
            }
            handle.push(value);
        })
    };
    tracing::debug!(target: targets::BIND, "bound value model");

    ValueBinding {
        model,
        handle,
        pending,
        _connection: connection,
    }
}

impl<M: ValueModel> ValueBinding<'_, M> {
    /// Copy the control's value into the model.
    ///
    /// Only a change equal to the pulled value is kept from the control.
    /// If the model ends up holding something else, that value is pushed
    /// back once.
    ///
    /// Returns `Ok(false)` when the control shows nothing or the value is
    /// unchanged.
    pub fn pull(&self) -> Result<bool> {
        let Some(value) = self.handle.pull() else {
            return Ok(false);
        };
        tracing::trace!(target: targets::BIND, ?value, "pulling from control");

        *self.pending.lock() = Some(Pending {
            value: value.clone(),
            pushed: false,
        });
        let result = self.model.set_value(value);
        let pull = self.pending.lock().take();

        if let (Ok(_), Some(pull)) = (&result, pull) {
            let stored = self.model.value();
            if !pull.pushed && stored != pull.value {
                tracing::trace!(target: targets::BIND, ?stored, "model adjusted the pulled value");
                self.handle.push(&stored);
            }
        }
        result
    }

    /// Push the model's value into the control again.
    pub fn refresh(&self) {
        self.handle.push(&self.model.value());
    }

    /// The bound model.
    pub fn model(&self) -> &M {
        self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::headless::RecordingHandle;
    use crate::widgets::{Adjuster, CheckBox, ComboBox};

    #[test]
    fn test_model_changes_are_pushed() {
        let adjuster = Adjuster::new("A", 1.0, 0.0, 10.0, 1.0, 1.0);
        let control = Arc::new(RecordingHandle::<f64>::new());
        let _binding = bind(&adjuster, control.clone());

        adjuster.set_value(4.0).unwrap();
        adjuster.set_value(4.0).unwrap();
        assert_eq!(control.pushed(), vec![1.0, 4.0]);
    }

    #[test]
    fn test_pull_does_not_echo() {
        let adjuster = Adjuster::new("A", 1.0, 0.0, 10.0, 1.0, 1.0);
        let control = Arc::new(RecordingHandle::<f64>::new());
        let binding = bind(&adjuster, control.clone());

        control.simulate_edit(6.0);
        assert!(binding.pull().unwrap());
        assert_eq!(adjuster.value(), 6.0);
        assert_eq!(control.pushed(), vec![1.0]);

        // Unchanged values are not an update.
        assert!(!binding.pull().unwrap());
    }

    #[test]
    fn test_rounded_pull_is_shown_once() {
        let adjuster = Adjuster::new("A", 1.0, 0.0, 10.0, 1.0, 1.0);
        let control = Arc::new(RecordingHandle::<f64>::new());
        let binding = bind(&adjuster, control.clone());

        control.simulate_edit(6.3);
        assert!(binding.pull().unwrap());
        assert_eq!(adjuster.value(), 6.0);
        assert_eq!(control.pushed(), vec![1.0, 6.0]);
        assert_eq!(control.shown(), Some(6.0));
    }

    #[test]
    fn test_clamped_pull_is_pushed_back() {
        let adjuster = Adjuster::new("A", 10.0, 0.0, 10.0, 1.0, 1.0);
        let control = Arc::new(RecordingHandle::<f64>::new());
        let binding = bind(&adjuster, control.clone());

        control.simulate_edit(15.0);
        assert!(!binding.pull().unwrap());
        assert_eq!(adjuster.value(), 10.0);
        assert_eq!(control.pushed(), vec![10.0, 10.0]);
    }

    #[test]
    fn test_other_changes_during_a_pull_are_pushed() {
        let check = CheckBox::new("C", false);
        let control = Arc::new(RecordingHandle::<bool>::new());
        let binding = bind(&check, control.clone());

        // A change the control did not ask for, arriving while a pull is in
        // flight, still reaches the control.
        *binding.pending.lock() = Some(Pending {
            value: false,
            pushed: false,
        });
        check.set_value(true).unwrap();
        assert_eq!(control.pushed(), vec![false, true]);
        assert!(binding.pending.lock().as_ref().is_some_and(|pull| pull.pushed));
    }

    #[test]
    fn test_rejected_pull_surfaces_error() {
        let combo = ComboBox::from_pairs([("A", 'a'), ("B", 'b')], Some('a')).unwrap();
        let control = Arc::new(RecordingHandle::<Option<char>>::new());
        let binding = bind(&combo, control.clone());

        control.simulate_edit(Some('z'));
        assert!(matches!(binding.pull(), Err(Error::UnknownChoice(_))));
        assert_eq!(combo.value(), Some('a'));

        // A later model change is pushed again.
        combo.set_value(Some('b')).unwrap();
        assert_eq!(control.shown(), Some(Some('b')));
    }

    #[test]
    fn test_drop_disconnects() {
        let adjuster = Adjuster::new("A", 1.0, 0.0, 10.0, 1.0, 1.0);
        let control = Arc::new(RecordingHandle::<f64>::new());
        {
            let _binding = bind(&adjuster, control.clone());
            assert_eq!(adjuster.value_changed().connection_count(), 1);
        }
        assert_eq!(adjuster.value_changed().connection_count(), 0);
        adjuster.set_value(2.0).unwrap();
        assert_eq!(control.pushed(), vec![1.0]);
    }

    #[test]
    fn test_refresh() {
        let adjuster = Adjuster::new("A", 1.0, 0.0, 10.0, 1.0, 1.0);
        let control = Arc::new(RecordingHandle::<f64>::new());
        let binding = bind(&adjuster, control.clone());
        control.simulate_edit(9.0);
        binding.refresh();
        assert_eq!(control.shown(), Some(1.0));
        assert_eq!(binding.model().label(), "A");
    }
}
