//! Drop handling for flat lists.

use dragline_core::logging::targets;
use dragline_core::{DragFeedback, DragItem, DragSession, NoFeedback};

use super::{DropOperation, move_item};

/// The reorder engine for a single ordered collection of items.
///
/// The manager itself holds only the feedback sink; the collection and the
/// [`DragSession`] stay with the rendering layer and are passed in per
/// event.
///
/// # Example
///
/// ```
/// use dragline::{DragItem, DragSession, ListDropManager};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Track(&'static str);
///
/// impl DragItem for Track {
///     type Id = &'static str;
///     fn id(&self) -> &'static str {
///         self.0
///     }
/// }
///
/// let mut playlist = vec![Track("a"), Track("b"), Track("c"), Track("d")];
/// let mut session = DragSession::new();
/// let mut manager = ListDropManager::new();
///
/// session.begin_drag(Track("b"));
/// manager.drop_entered(&session, &mut playlist, &"d");
/// assert_eq!(playlist, vec![Track("a"), Track("c"), Track("d"), Track("b")]);
///
/// assert!(manager.perform_drop(&session));
/// session.end_drag();
/// ```
#[derive(Debug, Default)]
pub struct ListDropManager<F: DragFeedback = NoFeedback> {
    feedback: F,
}

impl ListDropManager<NoFeedback> {
    /// Creates a manager with no feedback sink.
    pub fn new() -> Self {
        Self {
            feedback: NoFeedback,
        }
    }
}

impl<F: DragFeedback> ListDropManager<F> {
    /// Creates a manager that fires `feedback` once per mutating
    /// drag-over event.
    pub fn with_feedback(feedback: F) -> Self {
        Self { feedback }
    }

    /// Handles the pointer entering the drop zone of the item identified
    /// by `target`.
    ///
    /// Every dragged item still present in `items` is spliced adjacent to
    /// the target: after it when moving forward, before it when moving
    /// backward. Indices are resolved fresh for each dragged item, so with
    /// a multi-item drag each move sees the positions left by the previous
    /// one. Dragged items no longer present in `items` are skipped.
    ///
    /// The event is rejected outright when nothing is being dragged or
    /// when `target` is itself one of the dragged items.
    ///
    /// Returns true if the collection was mutated. Feedback fires at most
    /// once per call.
    pub fn drop_entered<I>(
        &mut self,
        session: &DragSession<I>,
        items: &mut Vec<I>,
        target: &I::Id,
    ) -> bool
    where
        I: DragItem,
    {
        if session.dragged().is_empty() {
            return false;
        }

        // Prevent inserting on top of any dragged item
        if session.is_dragged(target) {
            return false;
        }

        let mut moved = false;

        for dragged in session.dragged() {
            let dragged_id = dragged.id();
            let Some(from) = items.iter().position(|item| item.id() == dragged_id) else {
                continue;
            };
            let Some(to) = items.iter().position(|item| item.id() == *target) else {
                continue;
            };
            move_item(items, from, if to > from { to + 1 } else { to });
            moved = true;
        }

        if moved {
            tracing::trace!(
                target: targets::LIST,
                dragged = session.dragged().len(),
                "placed dragged items at drop target"
            );
            self.feedback.impact();
        }

        moved
    }

    /// Whether a drop is accepted at drop time: true iff at least one item
    /// is being dragged.
    pub fn perform_drop<I: DragItem>(&self, session: &DragSession<I>) -> bool {
        !session.dragged().is_empty()
    }

    /// The standing drop proposal while a drag hovers over the list.
    pub fn drop_updated(&self) -> DropOperation {
        DropOperation::Cancel
    }
}
