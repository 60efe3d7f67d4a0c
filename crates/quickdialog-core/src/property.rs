//! Value cells with change detection and reset-to-initial.
//!
//! Every value model in quickdialog keeps its authoritative state in a
//! [`Property`]. A property remembers the value it was created with, so a
//! model can be restored to that value with [`Property::reset`].
//!
//! # Example
//!
//! ```
//! use quickdialog_core::{Property, Signal};
//!
//! struct Toggle {
//!     checked: Property<bool>,
//!     checked_changed: Signal<bool>,
//! }
//!
//! impl Toggle {
//!     fn set_checked(&self, checked: bool) {
//!         if self.checked.set(checked) {
//!             self.checked_changed.emit(checked);
//!         }
//!     }
//! }
//!
//! let toggle = Toggle {
//!     checked: Property::new(false),
//!     checked_changed: Signal::new(),
//! };
//! toggle.set_checked(true);
//! assert!(toggle.checked.get());
//! ```

use std::fmt;

use parking_lot::RwLock;
use static_assertions::assert_impl_all;

use crate::logging::targets;

/// A value cell that reports whether writes actually changed it.
///
/// `Property<T>` uses interior mutability through a `RwLock`, so models can
/// expose `&self` setters and be shared across threads.
pub struct Property<T> {
    value: RwLock<T>,
    initial: T,
}

assert_impl_all!(Property<f64>: Send, Sync);

impl<T: Clone> Property<T> {
    /// Create a property. `value` also becomes the reset target.
    pub fn new(value: T) -> Self {
        Self {
            initial: value.clone(),
            value: RwLock::new(value),
        }
    }

    /// Get a copy of the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the current value without cloning it.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// The value this property was created with.
    pub fn initial(&self) -> &T {
        &self.initial
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Store `value`, returning `true` if it differs from the current value.
    ///
    /// Callers emit their change signal when this returns `true`.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            tracing::trace!(target: targets::PROPERTY, "property changed");
            true
        } else {
            false
        }
    }

    /// Modify the value in place under a single write lock.
    ///
    /// Returns `true` if `f` left the value different from before.
    pub fn update<F>(&self, f: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        let mut current = self.value.write();
        let before = current.clone();
        f(&mut current);
        let changed = *current != before;
        if changed {
            tracing::trace!(target: targets::PROPERTY, "property updated");
        }
        changed
    }

    /// Restore the initial value, returning `true` if that changed anything.
    pub fn reset(&self) -> bool {
        self.set(self.initial.clone())
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .field("initial", &self.initial)
            .finish()
    }
}
