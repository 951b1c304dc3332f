//! Drop handling for sectioned lists.

use dragline_core::logging::targets;
use dragline_core::{DragFeedback, DragItem, DragSection, DragSession, NoFeedback};

use super::{DropOperation, move_item};

/// What the pointer is hovering over during a sectioned drag.
#[derive(Debug, Clone, PartialEq)]
pub enum DropTarget<SectionId, ItemId> {
    /// A specific item; dragged items are placed beside it.
    Item(ItemId),
    /// A bare section (its header, or an empty section's body); dragged
    /// items are placed at its head.
    Section(SectionId),
}

/// The reorder engine for an ordered collection of sections of items.
///
/// Handles three move shapes from one entry point: reordering within a
/// section, moving across sections, and dropping onto a bare section.
/// Like [`ListDropManager`], the manager holds only the feedback sink; the
/// sections and the [`DragSession`] are owned by the rendering layer.
///
/// [`ListDropManager`]: super::ListDropManager
#[derive(Debug, Default)]
pub struct SectionDropManager<F: DragFeedback = NoFeedback> {
    feedback: F,
}

impl SectionDropManager<NoFeedback> {
    /// Creates a manager with no feedback sink.
    pub fn new() -> Self {
        Self {
            feedback: NoFeedback,
        }
    }
}

impl<F: DragFeedback> SectionDropManager<F> {
    /// Creates a manager that fires `feedback` once per mutating
    /// drag-over event.
    pub fn with_feedback(feedback: F) -> Self {
        Self { feedback }
    }

    /// Handles the pointer entering a drop zone.
    ///
    /// The destination section is the one containing the target item, or
    /// the one matching the target section id; an unresolvable target
    /// ignores the event. Per dragged item, a same-section move uses the
    /// flat engine's asymmetric offset (skipped when the item already sits
    /// at the target index), while a cross-section move removes from the
    /// source and inserts at the target's index in the destination, or at
    /// its head for a bare-section target.
    ///
    /// Indices are resolved fresh for each dragged item, so with a
    /// multi-item drag each move sees the positions left by the previous
    /// one; in particular, several items dropped onto a bare section each
    /// insert at index 0 and end up in reverse lift order. Dragged items
    /// no longer present anywhere are skipped. The whole event is rejected
    /// when the target item is itself one of the dragged items.
    ///
    /// Returns true if any collection was mutated. Feedback fires at most
    /// once per call.
    pub fn drop_entered<S>(
        &mut self,
        session: &DragSession<S::Item>,
        sections: &mut [S],
        target: &DropTarget<S::Id, <S::Item as DragItem>::Id>,
    ) -> bool
    where
        S: DragSection,
    {
        if session.dragged().is_empty() {
            return false;
        }

        // Prevent inserting on top of any dragged item
        if let DropTarget::Item(target_id) = target
            && session.is_dragged(target_id)
        {
            return false;
        }

        let to_section = match target {
            DropTarget::Item(target_id) => locate(sections, target_id).map(|(section, _)| section),
            DropTarget::Section(section_id) => {
                sections.iter().position(|section| section.id() == *section_id)
            }
        };
        let Some(to_section) = to_section else {
            tracing::trace!(target: targets::SECTION, "drop target resolves to no section");
            return false;
        };

        let mut moved = false;

        for dragged in session.dragged() {
            let dragged_id = dragged.id();
            let Some((from_section, from_index)) = locate(sections, &dragged_id) else {
                continue;
            };
            let to_index = match target {
                DropTarget::Item(target_id) => {
                    locate(sections, target_id).map_or(0, |(_, index)| index)
                }
                DropTarget::Section(_) => 0,
            };

            if from_section == to_section {
                if from_index != to_index {
                    move_item(
                        sections[to_section].items_mut(),
                        from_index,
                        if to_index > from_index { to_index + 1 } else { to_index },
                    );
                    moved = true;
                }
            } else {
                let item = sections[from_section].items_mut().remove(from_index);
                sections[to_section].items_mut().insert(to_index, item);
                moved = true;
            }
        }

        if moved {
            tracing::trace!(
                target: targets::SECTION,
                dragged = session.dragged().len(),
                "placed dragged items at drop target"
            );
            self.feedback.impact();
        }

        moved
    }

    /// Whether a drop onto `target` is meaningful at all.
    ///
    /// A bare-section target is rejected when every dragged item already
    /// originates from that one section: dropping items back onto the
    /// section they fully belong to, with no item-level target, is a
    /// no-op. Item targets and mixed-origin drags always validate.
    pub fn validate_drop<S>(
        &self,
        session: &DragSession<S::Item>,
        sections: &[S],
        target: &DropTarget<S::Id, <S::Item as DragItem>::Id>,
    ) -> bool
    where
        S: DragSection,
    {
        let DropTarget::Section(section_id) = target else {
            return true;
        };

        let mut source_sections: Vec<usize> = Vec::new();
        for dragged in session.dragged() {
            if let Some((section, _)) = locate(sections, &dragged.id())
                && !source_sections.contains(&section)
            {
                source_sections.push(section);
            }
        }

        if let &[only_source] = &source_sections[..]
            && sections[only_source].id() == *section_id
        {
            tracing::trace!(
                target: targets::SECTION,
                "rejecting no-op drop back onto the source section"
            );
            return false;
        }

        true
    }

    /// Whether a drop is accepted at drop time: true iff at least one item
    /// is being dragged.
    pub fn perform_drop<I: DragItem>(&self, session: &DragSession<I>) -> bool {
        !session.dragged().is_empty()
    }

    /// The standing drop proposal while a drag hovers over the sections.
    pub fn drop_updated(&self) -> DropOperation {
        DropOperation::Cancel
    }
}

/// Finds the (section index, item index) of the item with `id`, scanning
/// sections in order.
fn locate<S: DragSection>(sections: &[S], id: &<S::Item as DragItem>::Id) -> Option<(usize, usize)> {
    sections.iter().enumerate().find_map(|(section_index, section)| {
        section
            .items()
            .iter()
            .position(|item| item.id() == *id)
            .map(|item_index| (section_index, item_index))
    })
}
