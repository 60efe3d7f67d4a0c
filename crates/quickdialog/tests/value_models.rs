//! Integration tests for value models and their bindings.

use std::collections::BTreeMap;
use std::sync::Arc;

use quickdialog::bind::{WidgetHandle, bind};
use quickdialog::headless::RecordingHandle;
use quickdialog::scale::ValueRange;
use quickdialog::widgets::{Adjuster, CheckBox, ComboBox, Entry, RadioButtons, ValueModel};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn test_log_slider_with_replaced_range() {
    let adjuster = Adjuster::new("0-10000", 10.0, 0.0, 500.0, 1.0, 10.0)
        .with_decimals(2)
        .logarithmic(1.5)
        .unwrap();
    adjuster.set_range(ValueRange::new(10.0, 0.0, 10000.0, 1.0, 10.0));

    let spin = Arc::new(RecordingHandle::<f64>::new());
    let binding = bind(&adjuster, spin.clone());

    adjuster.set_value(1234.56).unwrap();
    assert!(close(adjuster.value(), 1234.56));
    assert_eq!(spin.pushed(), vec![10.0, 1234.56]);

    // Dragging the slider to the top of the log range.
    let top = adjuster.log_range().unwrap().upper;
    adjuster.set_log_value(top);
    assert!(close(adjuster.value(), 10000.0));
    assert!(close(spin.shown().unwrap(), 10000.0));

    // Typing into the spin button.
    spin.simulate_edit(100.0);
    binding.pull().unwrap();
    assert!(close(adjuster.log_range().unwrap().value, 100f64.log(1.5)));
}

#[test]
fn test_dialog_values() {
    let adjuster = Adjuster::new("Adjuster", 30.0, 0.0, 1000.0, 5.0, 10.0)
        .with_decimals(1)
        .logarithmic(2.0)
        .unwrap();
    let adjuster2 = Adjuster::new("Adjuster2", 30.0, 0.0, 100.0, 5.0, 10.0).without_scale();
    let check = CheckBox::new("Check Box", true);
    let combo = ComboBox::from_pairs(
        BTreeMap::from([("Choice A", "a"), ("Choice B", "b"), ("Choice C", "c")]),
        Some("a"),
    )
    .unwrap()
    .with_tooltip("Combo Box");
    let radio = RadioButtons::from_labels("Radio Buttons", ["Choice A", "Choice B", "Choice C"], 0).unwrap();
    let entry = Entry::new("Entry", "Text\nLine 2");

    assert_eq!(adjuster.value(), 30.0);
    assert_eq!(adjuster2.value(), 30.0);
    assert!(check.value());
    assert_eq!(combo.value(), Some("a"));
    assert_eq!(combo.active_label(), Some("Choice A"));
    assert_eq!(radio.value(), 0);
    assert_eq!(entry.value(), "Text\nLine 2");

    radio.set_value(2).unwrap();
    combo.set_value(None).unwrap();
    entry.set_value("edited".to_string()).unwrap();
    assert_eq!(radio.choices().label(radio.active_index()), Some("Choice C"));
    assert_eq!(combo.value(), None);

    assert!(radio.reset());
    assert!(combo.reset());
    assert!(entry.reset());
    assert_eq!((radio.value(), combo.value()), (0, Some("a")));
    assert_eq!(entry.value(), "Text\nLine 2");
}

struct Counter(parking_lot::Mutex<usize>);

impl WidgetHandle<bool> for Counter {
    fn push(&self, _value: &bool) {
        *self.0.lock() += 1;
    }

    fn pull(&self) -> Option<bool> {
        None
    }
}

#[test]
fn test_custom_handle() {
    let check = CheckBox::new("Check", false);
    let counter = Arc::new(Counter(parking_lot::Mutex::new(0)));
    let binding = bind(&check, counter.clone());

    check.toggle();
    check.toggle();
    assert_eq!(*counter.0.lock(), 3);
    assert!(!binding.pull().unwrap());
}
