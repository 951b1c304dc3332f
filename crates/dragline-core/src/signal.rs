//! Signal/slot notifications for Dragline.
//!
//! Drag sessions announce lifecycle milestones (most importantly "drop
//! completed") through [`Signal`], a small Qt-inspired signal/slot type.
//! Hosts connect closures and are invoked synchronously when the signal is
//! emitted.
//!
//! The engine is main-thread only (see the crate docs), so unlike a full
//! cross-thread signal system there are no queued connections and no thread
//! affinity rules: every emission is a direct, in-order call of the
//! connected slots on the current thread.
//!
//! # Example
//!
//! ```
//! use dragline_core::Signal;
//!
//! let reordered = Signal::<u32>::new();
//!
//! let conn_id = reordered.connect(|count| {
//!     println!("{count} items reordered");
//! });
//!
//! reordered.emit(&3);
//! reordered.disconnect(conn_id);
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via
    /// [`Signal::disconnect`]. The ID remains valid until the connection is
    /// explicitly disconnected or the signal is dropped.
    pub struct ConnectionId;
}

type Slot<Args> = Rc<RefCell<dyn FnMut(&Args)>>;

/// A single-threaded signal that invokes connected slots when emitted.
///
/// Slots are called in an unspecified order. Connecting or disconnecting
/// from within a slot is allowed; connections made during an emission are
/// not invoked until the next emission.
pub struct Signal<Args = ()> {
    slots: RefCell<SlotMap<ConnectionId, Slot<Args>>>,
    blocked: Cell<bool>,
}

impl<Args> Signal<Args> {
    /// Creates a new signal with no connections.
    pub fn new() -> Self {
        Self {
            slots: RefCell::new(SlotMap::with_key()),
            blocked: Cell::new(false),
        }
    }

    /// Connects a slot to this signal.
    ///
    /// Returns a [`ConnectionId`] that can later be passed to
    /// [`Signal::disconnect`].
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: FnMut(&Args) + 'static,
    {
        self.slots.borrow_mut().insert(Rc::new(RefCell::new(slot)))
    }

    /// Disconnects a slot by its connection ID.
    ///
    /// Returns `true` if the connection existed and was removed.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.slots.borrow_mut().remove(id).is_some()
    }

    /// Removes all connections.
    pub fn disconnect_all(&self) {
        self.slots.borrow_mut().clear();
    }

    /// Returns the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.slots.borrow().len()
    }

    /// Blocks or unblocks the signal.
    ///
    /// While blocked, [`Signal::emit`] is a no-op. Returns the previous
    /// blocked state.
    pub fn set_blocked(&self, blocked: bool) -> bool {
        self.blocked.replace(blocked)
    }

    /// Returns true if the signal is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.get()
    }

    /// Emits the signal, invoking every connected slot with `args`.
    ///
    /// The slot list is snapshotted before the first invocation, so slots
    /// may freely connect or disconnect during emission without observing
    /// a half-updated list.
    pub fn emit(&self, args: &Args) {
        if self.blocked.get() {
            return;
        }
        let snapshot: Vec<Slot<Args>> = self.slots.borrow().values().cloned().collect();
        for slot in snapshot {
            (&mut *slot.borrow_mut())(args);
        }
    }
}

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connection_count())
            .field("blocked", &self.is_blocked())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_connect_and_emit() {
        let signal = Signal::<i32>::new();
        let received = Rc::new(Cell::new(0));

        let received_clone = Rc::clone(&received);
        signal.connect(move |value| received_clone.set(*value));

        signal.emit(&42);
        assert_eq!(received.get(), 42);
    }

    #[test]
    fn test_disconnect() {
        let signal = Signal::<()>::new();
        let count = Rc::new(Cell::new(0));

        let count_clone = Rc::clone(&count);
        let id = signal.connect(move |()| count_clone.set(count_clone.get() + 1));

        signal.emit(&());
        assert!(signal.disconnect(id));
        signal.emit(&());

        assert_eq!(count.get(), 1);
        // Second disconnect of the same ID is a no-op
        assert!(!signal.disconnect(id));
    }

    #[test]
    fn test_blocked_signal_does_not_emit() {
        let signal = Signal::<()>::new();
        let count = Rc::new(Cell::new(0));

        let count_clone = Rc::clone(&count);
        signal.connect(move |()| count_clone.set(count_clone.get() + 1));

        assert!(!signal.set_blocked(true));
        signal.emit(&());
        assert_eq!(count.get(), 0);

        assert!(signal.set_blocked(false));
        signal.emit(&());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_multiple_slots_all_invoked() {
        let signal = Signal::<()>::new();
        let count = Rc::new(Cell::new(0));

        for _ in 0..3 {
            let count_clone = Rc::clone(&count);
            signal.connect(move |()| count_clone.set(count_clone.get() + 1));
        }

        assert_eq!(signal.connection_count(), 3);
        signal.emit(&());
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn test_connect_during_emit_deferred_to_next_emission() {
        let signal = Rc::new(Signal::<()>::new());
        let count = Rc::new(Cell::new(0));

        let signal_clone = Rc::clone(&signal);
        let count_clone = Rc::clone(&count);
        signal.connect(move |()| {
            count_clone.set(count_clone.get() + 1);
            let inner_count = Rc::clone(&count_clone);
            signal_clone.connect(move |()| inner_count.set(inner_count.get() + 10));
        });

        signal.emit(&());
        assert_eq!(count.get(), 1);

        signal.emit(&());
        // Original slot plus the one connected during the first emission
        assert_eq!(count.get(), 12);
    }
}
