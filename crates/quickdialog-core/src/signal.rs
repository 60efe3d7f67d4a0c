//! Signal/slot notifications for value models.
//!
//! A [`Signal`] holds a set of connected slots (closures). Emitting the
//! signal invokes every slot, in connection order, on the emitting thread.
//! There is no event loop in quickdialog, so every connection is direct.
//!
//! # Example
//!
//! ```
//! use quickdialog_core::Signal;
//!
//! let text_changed = Signal::<String>::new();
//! let id = text_changed.connect(|text| println!("text is now {text}"));
//! text_changed.emit("hello".to_string());
//! text_changed.disconnect(id);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};
use static_assertions::assert_impl_all;

use crate::logging::targets;

new_key_type! {
    /// Identifies one slot connected to a [`Signal`].
    ///
    /// Pass it to [`Signal::disconnect`] to remove the slot again.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A type-safe signal with any number of connected slots.
///
/// Use `()` as `Args` for signals without a payload.
pub struct Signal<Args> {
    connections: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
}

assert_impl_all!(Signal<f64>: Send, Sync);

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Connect a slot, returning its connection id.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Connect a slot that stays connected until the returned guard drops.
    pub fn connect_scoped<F>(&self, slot: F) -> ConnectionGuard<'_, Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        ConnectionGuard {
            signal: self,
            id: self.connect(slot),
        }
    }

    /// Remove a slot. Returns `false` if the id was not connected.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Invoke every connected slot with `args`.
    ///
    /// Slots are snapshotted before invocation, so a slot may connect or
    /// disconnect slots on this same signal; such changes apply to the next
    /// emission.
    #[tracing::instrument(skip_all, target = "quickdialog_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        let slots: Vec<Slot<Args>> = self.connections.lock().values().cloned().collect();
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for slot in slots {
            slot(&args);
        }
    }
}

/// Disconnects its slot when dropped.
///
/// Returned by [`Signal::connect_scoped`].
pub struct ConnectionGuard<'a, Args: 'static> {
    signal: &'a Signal<Args>,
    id: ConnectionId,
}

impl<Args: 'static> Drop for ConnectionGuard<'_, Args> {
    fn drop(&mut self) {
        self.signal.disconnect(self.id);
    }
}
