//! Log Slider Example
//!
//! An adjuster over `0..10000` whose slider moves logarithmically in base
//! 1.5. Prints both sides of the adjuster after a few edits.
//!
//! Run with: cargo run -p quickdialog --example log_slider

use std::sync::Arc;

use quickdialog::bind::bind;
use quickdialog::headless::RecordingHandle;
use quickdialog::scale::ValueRange;
use quickdialog::widgets::{Adjuster, ValueModel};
use tracing_subscriber::EnvFilter;

fn report(adjuster: &Adjuster) {
    let log = adjuster.log_range().map(|range| range.value).unwrap_or_default();
    println!("value {:>10.2}   slider {:>7.3}", adjuster.value(), log);
}

fn main() -> quickdialog::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quickdialog=debug")))
        .init();

    let adjuster = Adjuster::new("0-10000", 10.0, 0.0, 500.0, 1.0, 10.0)
        .with_decimals(2)
        .logarithmic(1.5)?;
    adjuster.set_range(ValueRange::new(10.0, 0.0, 10000.0, 1.0, 10.0));

    let spin_button = Arc::new(RecordingHandle::<f64>::new());
    let binding = bind(&adjuster, spin_button.clone());
    report(&adjuster);

    adjuster.set_value(1234.56)?;
    report(&adjuster);

    for position in [5.0, 10.0, 20.0] {
        adjuster.set_log_value(position);
        report(&adjuster);
    }

    spin_button.simulate_edit(42.0);
    binding.pull()?;
    report(&adjuster);

    println!("spin button saw {:?}", spin_button.pushed());
    Ok(())
}
