//! Haptic/animation feedback hooks.
//!
//! The reorder engines fire a feedback trigger whenever a drag-over event
//! actually moved something: at most once per event, never once per moved
//! item. What "feedback" means is up to the host; a mobile shell will
//! typically route it to a haptic impact generator, a desktop shell to a
//! snap animation or nothing at all.

/// Receives fire-and-forget notifications when a drag-over event mutates
/// the backing collection.
pub trait DragFeedback {
    /// Called when the platform is about to evaluate drops, so an
    /// implementation can warm up its generator. The default does nothing.
    fn prepare(&mut self) {}

    /// Called at most once per drag-over event, after all dragged items
    /// have been placed, if any of them moved.
    fn impact(&mut self);
}

/// A feedback sink that does nothing. The default for both engines.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFeedback;

impl DragFeedback for NoFeedback {
    fn impact(&mut self) {}
}

/// Adapts a closure into a [`DragFeedback`] sink.
///
/// ```
/// use dragline_core::{DragFeedback, FeedbackFn};
///
/// let mut feedback = FeedbackFn(|| println!("thud"));
/// feedback.impact();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FeedbackFn<F: FnMut()>(pub F);

impl<F: FnMut()> DragFeedback for FeedbackFn<F> {
    fn impact(&mut self) {
        (self.0)()
    }
}
