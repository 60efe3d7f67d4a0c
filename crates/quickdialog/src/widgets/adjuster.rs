//! Bounded numeric control state, optionally logarithmic.
//!
//! An [`Adjuster`] models a slider and/or spin button sharing one
//! [`ValueRange`]. In logarithmic mode it also keeps a second range, derived
//! field by field through [`ValueRange::to_log`], for the slider to drive.
//! Writes on either side are pushed to the other through the matching
//! transform. A push never travels back, so the two sides cannot feed each
//! other.
//!
//! # Example
//!
//! ```
//! use quickdialog::widgets::{Adjuster, ValueModel};
//!
//! let adjuster = Adjuster::new("Adjuster", 30.0, 0.0, 1000.0, 5.0, 10.0)
//!     .with_decimals(1)
//!     .logarithmic(10.0)
//!     .unwrap();
//!
//! // The slider moved to 10^2.
//! adjuster.set_log_value(2.0);
//! assert_eq!(adjuster.value(), 100.0);
//! ```

use quickdialog_core::logging::targets;
use quickdialog_core::{Property, Signal};

use super::ValueModel;
use crate::error::Result;
use crate::layout::Orientation;
use crate::scale::{LogScale, ValueRange};

/// Default length of the slider along its orientation, in pixels.
const DEFAULT_SCALE_LENGTH: u32 = 200;

/// Linear range plus its logarithmic counterpart, kept under one lock.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Ranges {
    linear: ValueRange,
    log: Option<ValueRange>,
}

impl Ranges {
    fn new(linear: ValueRange, scale: Option<LogScale>) -> Self {
        let linear = linear.with_value(linear.value);
        Self {
            linear,
            log: scale.map(|scale| linear.to_log(scale)),
        }
    }
}

/// A labelled bounded number.
///
/// Both ranges live in one [`Property`], so every write updates the linear
/// and logarithmic sides together even when the adjuster is shared between
/// threads.
pub struct Adjuster {
    label: String,
    tooltip: Option<String>,
    decimals: u32,
    orientation: Orientation,
    show_scale: bool,
    show_spin_button: bool,
    scale_length: u32,
    scale: Option<LogScale>,
    ranges: Property<Ranges>,
    value_changed: Signal<f64>,
}

impl Adjuster {
    /// Create an adjuster. The value is clamped into `[lower, upper]`.
    pub fn new(
        label: impl Into<String>,
        value: f64,
        lower: f64,
        upper: f64,
        step_increment: f64,
        page_increment: f64,
    ) -> Self {
        let range = ValueRange::new(value, lower, upper, step_increment, page_increment);
        Self::with_range(label, range)
    }

    /// Create an adjuster over a full range description.
    pub fn with_range(label: impl Into<String>, range: ValueRange) -> Self {
        Self {
            label: label.into(),
            tooltip: None,
            decimals: 0,
            orientation: Orientation::Horizontal,
            show_scale: true,
            show_spin_button: true,
            scale_length: DEFAULT_SCALE_LENGTH,
            scale: None,
            ranges: Property::new(Ranges::new(range, None)),
            value_changed: Signal::new(),
        }
    }

    /// Number of decimals the reported value is rounded to.
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Attach a tooltip.
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Orientation of the slider.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Hide the slider, keeping only the spin button.
    pub fn without_scale(mut self) -> Self {
        self.show_scale = false;
        self
    }

    /// Hide the spin button, keeping only the slider.
    pub fn without_spin_button(mut self) -> Self {
        self.show_spin_button = false;
        self
    }

    /// Slider length along its orientation, in pixels.
    pub fn with_scale_length(mut self, length: u32) -> Self {
        self.scale_length = length;
        self
    }

    /// Drive the slider through a logarithmic range in `base`.
    pub fn logarithmic(mut self, base: f64) -> Result<Self> {
        let scale = LogScale::new(base)?;
        let linear = self.ranges.with(|ranges| ranges.linear);
        self.scale = Some(scale);
        self.ranges = Property::new(Ranges::new(linear, Some(scale)));
        Ok(self)
    }

    /// The label text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The tooltip, if any.
    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    /// Decimals shown and reported.
    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Slider orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether a slider is shown.
    pub fn shows_scale(&self) -> bool {
        self.show_scale
    }

    /// Whether a spin button is shown.
    pub fn shows_spin_button(&self) -> bool {
        self.show_spin_button
    }

    /// Slider length in pixels.
    pub fn scale_length(&self) -> u32 {
        self.scale_length
    }

    /// The linear range.
    pub fn range(&self) -> ValueRange {
        self.ranges.with(|ranges| ranges.linear)
    }

    /// The logarithmic range, in logarithmic mode.
    pub fn log_range(&self) -> Option<ValueRange> {
        self.ranges.with(|ranges| ranges.log)
    }

    /// The log base, in logarithmic mode.
    pub fn log_scale(&self) -> Option<LogScale> {
        self.scale
    }

    /// The unrounded linear value.
    pub fn raw_value(&self) -> f64 {
        self.ranges.with(|ranges| ranges.linear.value)
    }

    /// Set the linear value, clamped into the range.
    ///
    /// Updates the logarithmic side in logarithmic mode.
    pub fn set_linear_value(&self, value: f64) -> bool {
        let scale = self.scale;
        let mut moved = None;
        self.ranges.update(|ranges| {
            let before = ranges.linear.value;
            ranges.linear = ranges.linear.with_value(value);
            if let (Some(scale), Some(log)) = (scale, ranges.log.as_mut()) {
                *log = log.with_value(scale.to_log(ranges.linear.value));
            }
            moved = (ranges.linear.value != before).then_some(ranges.linear.value);
        });
        self.notify(moved)
    }

    /// Set the value from the logarithmic side, e.g. a slider move.
    ///
    /// Does nothing and returns `false` outside logarithmic mode.
    pub fn set_log_value(&self, log_value: f64) -> bool {
        let Some(scale) = self.scale else {
            tracing::debug!(target: targets::WIDGET, label = %self.label, "not logarithmic, ignoring log value");
            return false;
        };
        let mut moved = None;
        self.ranges.update(|ranges| {
            let Some(log) = ranges.log.as_mut() else {
                return;
            };
            *log = log.with_value(log_value);
            let linear = scale.from_log(log.value);

            let before = ranges.linear.value;
            ranges.linear = ranges.linear.with_value(linear);
            moved = (ranges.linear.value != before).then_some(ranges.linear.value);
        });
        self.notify(moved)
    }

    /// Replace the range, rebuilding the logarithmic side.
    pub fn set_range(&self, range: ValueRange) -> bool {
        self.replace_ranges(Ranges::new(range, self.scale))
    }

    fn replace_ranges(&self, new: Ranges) -> bool {
        let mut moved = None;
        let changed = self.ranges.update(|ranges| {
            let before = ranges.linear.value;
            *ranges = new;
            moved = (ranges.linear.value != before).then_some(ranges.linear.value);
        });
        self.notify(moved);
        changed
    }

    /// Emit the rounded form of a moved raw value. Returns whether it moved.
    fn notify(&self, moved: Option<f64>) -> bool {
        let Some(raw) = moved else {
            return false;
        };
        let value = round_to(raw, self.decimals);
        tracing::trace!(target: targets::WIDGET, label = %self.label, value, "adjuster changed");
        self.value_changed.emit(value);
        true
    }
}

/// Round `value` to `decimals` places; zero decimals gives an integral value.
fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(15) as i32);
    (value * factor).round() / factor
}

impl ValueModel for Adjuster {
    type Value = f64;

    fn value(&self) -> f64 {
        round_to(self.raw_value(), self.decimals)
    }

    fn set_value(&self, value: f64) -> Result<bool> {
        Ok(self.set_linear_value(value))
    }

    fn reset(&self) -> bool {
        self.replace_ranges(*self.ranges.initial())
    }

    fn value_changed(&self) -> &Signal<f64> {
        &self.value_changed
    }
}
