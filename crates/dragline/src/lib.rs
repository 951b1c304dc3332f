//! Dragline - drag-and-drop reordering for flat and sectioned lists.
//!
//! The host application renders arbitrary item and section views and owns
//! the canonical ordered collections; Dragline owns the drag lifecycle,
//! drop-target evaluation, and the reordering itself, including the
//! feedback and completion hooks.
//!
//! - Implement [`DragItem`] (and [`DragSection`] for grouped data) on your
//!   model types.
//! - Keep a [`DragSession`] next to the collection and feed it the
//!   platform's lift/end callbacks.
//! - On every drag-over callback, hand the session and the collection to a
//!   [`ListDropManager`] or [`SectionDropManager`] and re-render if it
//!   reports a mutation.
//!
//! Everything is synchronous and main-thread only; drop events are applied
//! fully, in delivery order, before the next one is looked at.
//!
//! # Example
//!
//! ```
//! use dragline::{DragItem, DragSession, ListDropManager};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Task {
//!     id: u64,
//!     title: &'static str,
//! }
//!
//! impl DragItem for Task {
//!     type Id = u64;
//!     fn id(&self) -> u64 {
//!         self.id
//!     }
//! }
//!
//! let mut tasks = vec![
//!     Task { id: 1, title: "triage inbox" },
//!     Task { id: 2, title: "fix flaky test" },
//!     Task { id: 3, title: "write changelog" },
//! ];
//!
//! let mut session = DragSession::new();
//! let mut manager = ListDropManager::new();
//!
//! // Platform lifts task 1...
//! session.begin_drag(tasks[0].clone());
//! // ...the pointer enters task 3's drop zone...
//! let moved = manager.drop_entered(&session, &mut tasks, &3);
//! assert!(moved);
//! assert_eq!(tasks[2].id, 1);
//! // ...and the gesture ends.
//! assert!(manager.perform_drop(&session));
//! session.end_drag();
//! ```

pub use dragline_core::*;

pub mod reorder;

pub use reorder::{DropOperation, DropTarget, ListDropManager, SectionDropManager};
