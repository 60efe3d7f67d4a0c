//! Logarithmic value transforms for sliders.
//!
//! A slider over a wide range such as `0..10000` is hard to use near the
//! low end. Driving the slider through [`to_log`] makes each unit of travel
//! cover more of the range the further it is from zero. The transform keeps
//! the sign, so ranges that span zero work too: `-1000` maps to
//! `-log(1000)`.
//!
//! `0` maps to `0` directly. Note that `±1` also maps to `0`, so the two
//! functions are only inverses for `0` and magnitudes above one.

use quickdialog_core::logging::targets;

use crate::error::{Error, Result};

/// Base used when a logarithmic adjuster does not name one.
pub const DEFAULT_LOG_SCALE: f64 = 2.0;

/// Sign-preserving logarithm of `value` in `base`.
///
/// `base` must be greater than one; use [`LogScale`] for a checked base.
pub fn to_log(value: f64, base: f64) -> f64 {
    debug_assert!(value.is_finite(), "non-finite value {value}");
    if value > 0.0 {
        value.log(base)
    } else if value < 0.0 {
        -(-value).log(base)
    } else {
        0.0
    }
}

/// Inverse of [`to_log`]: sign-preserving power of `base`.
pub fn from_log(value: f64, base: f64) -> f64 {
    debug_assert!(value.is_finite(), "non-finite value {value}");
    if value > 0.0 {
        base.powf(value)
    } else if value < 0.0 {
        -base.powf(-value)
    } else {
        0.0
    }
}

/// A logarithm base known to be finite and greater than one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogScale(f64);

impl LogScale {
    /// Validate `base`.
    pub fn new(base: f64) -> Result<Self> {
        if base.is_finite() && base > 1.0 {
            Ok(Self(base))
        } else {
            tracing::warn!(target: targets::SCALE, base, "rejected log scale");
            Err(Error::InvalidLogBase(base))
        }
    }

    /// The base.
    pub fn base(self) -> f64 {
        self.0
    }

    /// [`to_log`] in this base.
    pub fn to_log(self, value: f64) -> f64 {
        to_log(value, self.0)
    }

    /// [`from_log`] in this base.
    pub fn from_log(self, value: f64) -> f64 {
        from_log(value, self.0)
    }
}

impl Default for LogScale {
    fn default() -> Self {
        Self(DEFAULT_LOG_SCALE)
    }
}

/// The state of a bounded numeric control.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValueRange {
    /// Current value.
    pub value: f64,
    /// Lower bound.
    pub lower: f64,
    /// Upper bound.
    pub upper: f64,
    /// Increment for arrow keys and spin buttons.
    pub step_increment: f64,
    /// Increment for page up/down.
    pub page_increment: f64,
    /// Size of the visible page; the value never exceeds `upper - page_size`.
    pub page_size: f64,
}

impl ValueRange {
    /// A range with no page size.
    pub fn new(value: f64, lower: f64, upper: f64, step_increment: f64, page_increment: f64) -> Self {
        Self {
            value,
            lower,
            upper,
            step_increment,
            page_increment,
            page_size: 0.0,
        }
    }

    /// Apply `f` to every field.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            value: f(self.value),
            lower: f(self.lower),
            upper: f(self.upper),
            step_increment: f(self.step_increment),
            page_increment: f(self.page_increment),
            page_size: f(self.page_size),
        }
    }

    /// The logarithmic counterpart, transforming each field on its own.
    ///
    /// Increments are transformed like any other number, not scaled by the
    /// local slope of the logarithm.
    pub fn to_log(&self, scale: LogScale) -> Self {
        self.map(|field| scale.to_log(field))
    }

    /// The linear counterpart of a logarithmic range.
    pub fn from_log(&self, scale: LogScale) -> Self {
        self.map(|field| scale.from_log(field))
    }

    /// Largest value the range accepts.
    pub fn max_value(&self) -> f64 {
        (self.upper - self.page_size).max(self.lower)
    }

    /// `value` limited to `[lower, upper - page_size]`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.lower).min(self.max_value())
    }

    /// This range with `value` clamped into it.
    pub fn with_value(&self, value: f64) -> Self {
        Self {
            value: self.clamp(value),
            ..*self
        }
    }
}
