//! Drag-session state.
//!
//! A [`DragSession`] owns the transient list of items currently lifted by
//! an in-progress drag gesture (the dragged set) and the session phase.
//! Sessions are strictly sequential: a session runs from the first
//! [`DragSession::begin_drag`] to the matching [`DragSession::end_drag`]
//! or [`DragSession::cancel`], and the dragged set is cleared exactly once
//! at the transition back to idle.
//!
//! The session is typically owned by the rendering layer alongside the
//! collection it mirrors, and handed to a reorder manager by reference on
//! every drag callback.

use crate::item::DragItem;
use crate::logging::targets;
use crate::signal::Signal;

/// The phase of a drag session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    /// No drag is active. The dragged set is empty.
    Idle,
    /// One or more items have been lifted.
    Dragging,
}

/// Transient state for one drag gesture: the lifted items and the
/// completion signal.
///
/// Multi-item drags are supported by calling [`DragSession::begin_drag`]
/// once per lifted item while the gesture is in progress.
#[derive(Debug)]
pub struct DragSession<I: DragItem> {
    phase: DragPhase,
    dragged: Vec<I>,
    drop_completed: Signal<()>,
}

impl<I: DragItem> DragSession<I> {
    /// Creates an idle session with an empty dragged set.
    pub fn new() -> Self {
        Self {
            phase: DragPhase::Idle,
            dragged: Vec::new(),
            drop_completed: Signal::new(),
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Returns true if a drag is currently active.
    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// The items currently lifted, in lift order.
    pub fn dragged(&self) -> &[I] {
        &self.dragged
    }

    /// Returns true if the item with `id` is currently being dragged.
    pub fn is_dragged(&self, id: &I::Id) -> bool {
        self.dragged.iter().any(|item| item.id() == *id)
    }

    /// Signal emitted once per finished drag session, after the dragged
    /// set has been cleared. Hosts connect here to persist the reordered
    /// state.
    pub fn drop_completed(&self) -> &Signal<()> {
        &self.drop_completed
    }

    /// Lifts `item` into the dragged set and enters the dragging phase.
    ///
    /// Items reporting [`DragItem::is_draggable`] as false are refused
    /// and the session state is left untouched.
    pub fn begin_drag(&mut self, item: I) {
        if !item.is_draggable() {
            tracing::trace!(target: targets::SESSION, "refusing lift of non-draggable item");
            return;
        }
        self.dragged.push(item);
        self.phase = DragPhase::Dragging;
    }

    /// Ends the session: clears the dragged set, returns to idle, then
    /// emits [`DragSession::drop_completed`] exactly once.
    ///
    /// Safe to call while idle; the completion signal still fires so the
    /// platform adapter can forward its unconditional session-end callback
    /// without tracking phase itself.
    pub fn end_drag(&mut self) {
        tracing::debug!(
            target: targets::SESSION,
            dragged = self.dragged.len(),
            "drag ended"
        );
        self.dragged.clear();
        self.phase = DragPhase::Idle;
        self.drop_completed.emit(&());
    }

    /// Cancels the session: clears the dragged set and returns to idle
    /// without emitting the completion signal.
    ///
    /// Use this when the platform abandons the gesture before any drop,
    /// so the host is not prompted to persist anything.
    pub fn cancel(&mut self) {
        tracing::debug!(
            target: targets::SESSION,
            dragged = self.dragged.len(),
            "drag cancelled"
        );
        self.dragged.clear();
        self.phase = DragPhase::Idle;
    }
}

impl<I: DragItem> Default for DragSession<I> {
    fn default() -> Self {
        Self::new()
    }
}
