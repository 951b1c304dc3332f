//! The reorder engines.
//!
//! Two closely related engines translate drag-over events into splices of
//! the host's ordered collections:
//!
//! - [`ListDropManager`]: a single flat `Vec` of items
//! - [`SectionDropManager`]: ordered sections of items, with moves within
//!   a section, across sections, and onto a bare section
//!
//! Both follow the same event contract. The rendering layer owns the
//! collection and a [`DragSession`], and calls `drop_entered` whenever the
//! pointer enters a candidate drop zone. The engine resolves the dragged
//! items' current positions, splices them next to the target, and reports
//! whether anything moved so the caller can re-render.
//!
//! [`DragSession`]: dragline_core::DragSession

mod list;
mod section;

pub use list::ListDropManager;
pub use section::{DropTarget, SectionDropManager};

/// The drop proposal an engine reports while a drag hovers over a target.
///
/// The engines reorder eagerly on drag-over, so by the time the platform
/// asks for a proposal the collection already reflects the final order.
/// Reporting [`DropOperation::Cancel`] keeps the platform from playing its
/// own copy/move drop animation on top of the already-settled items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropOperation {
    /// No visible drop operation; the reorder already happened.
    #[default]
    Cancel,
    /// The drop is not allowed here.
    Forbidden,
    /// The platform should present a copy affordance.
    Copy,
    /// The platform should present a move affordance.
    Move,
}

/// Moves `items[from]` to the insertion offset `to`, where `to` is
/// expressed in pre-removal coordinates.
///
/// With `to > from` the element lands at `to - 1` after the removal shift,
/// which is what lets callers encode the "after the target when moving
/// forward, before it when moving backward" rule as `to + 1` vs `to`.
pub(crate) fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    let item = items.remove(from);
    let to = if to > from { to - 1 } else { to };
    items.insert(to, item);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_item_forward() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        move_item(&mut items, 1, 4);
        assert_eq!(items, vec!['a', 'c', 'd', 'b']);
    }

    #[test]
    fn test_move_item_backward() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        move_item(&mut items, 3, 1);
        assert_eq!(items, vec!['a', 'd', 'b', 'c']);
    }

    #[test]
    fn test_move_item_in_place() {
        let mut items = vec!['a', 'b', 'c'];
        move_item(&mut items, 1, 1);
        assert_eq!(items, vec!['a', 'b', 'c']);
    }
}
