//! Core systems for Dragline.
//!
//! This crate provides the foundational pieces of the Dragline
//! drag-and-drop reordering library:
//!
//! - **Identity Traits**: [`DragItem`] and [`DragSection`], the only
//!   surface the engines need from host data
//! - **Drag Session**: [`DragSession`], the lifted-items state machine
//! - **Signals**: [`Signal`], single-threaded slot notifications
//! - **Payloads**: [`DragPayload`], MIME-keyed drag representations
//! - **Feedback**: [`DragFeedback`], the haptic/animation trigger seam
//!
//! Everything here is single-threaded by design: drag callbacks arrive on
//! the UI thread and every mutation happens synchronously inside them.
//! Nothing in this crate is `Send` or spawns work.
//!
//! # Session Example
//!
//! ```
//! use dragline_core::{DragItem, DragSession};
//!
//! #[derive(Clone)]
//! struct Task {
//!     id: u64,
//! }
//!
//! impl DragItem for Task {
//!     type Id = u64;
//!     fn id(&self) -> u64 {
//!         self.id
//!     }
//! }
//!
//! let mut session = DragSession::new();
//! session.drop_completed().connect(|()| {
//!     println!("persist the new order here");
//! });
//!
//! session.begin_drag(Task { id: 1 });
//! assert!(session.is_dragging());
//!
//! // ...drag-over events reorder the host collection here...
//!
//! session.end_drag(); // clears the dragged set, fires drop_completed
//! ```

mod feedback;
mod item;
pub mod logging;
mod payload;
mod session;
pub mod signal;

pub use feedback::{DragFeedback, FeedbackFn, NoFeedback};
pub use item::{DragItem, DragSection};
pub use payload::{DragPayload, mime};
pub use session::{DragPhase, DragSession};
pub use signal::{ConnectionId, Signal};
