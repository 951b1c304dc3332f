//! Identity traits for draggable items and the sections that contain them.
//!
//! The reorder engines never interpret item content. Everything they need
//! is expressed by two traits:
//!
//! - [`DragItem`]: a stable, equality-comparable identity, an opt-out
//!   draggable flag, and a hook producing the transferable payload for the
//!   platform drag session.
//! - [`DragSection`]: a stable identity plus ordered, mutable access to the
//!   items it owns.
//!
//! Identity must be reflexive and consistent for the duration of a drag
//! session. Duplicate ids within one collection are not detected and leave
//! reordering results unspecified; keeping ids unique is the host's
//! responsibility.

use crate::payload::DragPayload;

/// An individual drag-and-droppable item.
///
/// # Example
///
/// ```
/// use dragline_core::{DragItem, DragPayload};
///
/// struct Task {
///     id: u64,
///     title: String,
/// }
///
/// impl DragItem for Task {
///     type Id = u64;
///
///     fn id(&self) -> u64 {
///         self.id
///     }
///
///     fn payload(&self) -> DragPayload {
///         DragPayload::from_text(&self.title)
///     }
/// }
/// ```
pub trait DragItem {
    /// The stable identity type for this item.
    type Id: Clone + PartialEq;

    /// Returns this item's identity.
    ///
    /// Must stay constant and unique within the owning collection for the
    /// lifetime of a drag session.
    fn id(&self) -> Self::Id;

    /// Whether this item may be lifted by a drag gesture.
    ///
    /// Override to make an item not draggable. Non-draggable items are
    /// still valid drop targets.
    fn is_draggable(&self) -> bool {
        true
    }

    /// Produces the transferable representation handed to the platform
    /// drag session when this item is lifted.
    ///
    /// The default is an empty payload, which is sufficient for pure
    /// intra-list reordering.
    fn payload(&self) -> DragPayload {
        DragPayload::new()
    }
}

/// A section that contains drag-and-droppable items.
///
/// Sections themselves are not reorderable; only their items move, within
/// one section or across sections.
///
/// # Example
///
/// ```
/// use dragline_core::{DragItem, DragSection};
///
/// struct Task {
///     id: u64,
/// }
///
/// impl DragItem for Task {
///     type Id = u64;
///     fn id(&self) -> u64 {
///         self.id
///     }
/// }
///
/// struct Column {
///     name: &'static str,
///     tasks: Vec<Task>,
/// }
///
/// impl DragSection for Column {
///     type Item = Task;
///     type Id = &'static str;
///
///     fn id(&self) -> &'static str {
///         self.name
///     }
///
///     fn items(&self) -> &[Task] {
///         &self.tasks
///     }
///
///     fn items_mut(&mut self) -> &mut Vec<Task> {
///         &mut self.tasks
///     }
/// }
/// ```
pub trait DragSection {
    /// The type of item contained in the section.
    type Item: DragItem;
    /// The stable identity type for this section.
    type Id: Clone + PartialEq;

    /// Returns this section's identity.
    fn id(&self) -> Self::Id;

    /// The items contained in this section, in display order.
    fn items(&self) -> &[Self::Item];

    /// Mutable access to the item collection, for the engine to splice
    /// during an active drag.
    fn items_mut(&mut self) -> &mut Vec<Self::Item>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain(u32);

    impl DragItem for Plain {
        type Id = u32;

        fn id(&self) -> u32 {
            self.0
        }
    }

    #[test]
    fn test_default_item_is_draggable() {
        assert!(Plain(1).is_draggable());
    }

    #[test]
    fn test_default_payload_is_empty() {
        assert!(Plain(1).payload().is_empty());
    }
}
