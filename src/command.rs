//! Command-based control for animators.

use palette::Srgb;

/// Actions for controlling animators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatorAction {
    /// Set target without starting.
    SetTarget(Srgb<u8>),
    /// Set target and start.
    Submit(Srgb<u8>),
    /// Start toward the current target.
    Start,
    /// Stop ticking.
    Stop,
    /// Stop and return to black.
    Reset,
    /// Resume ticking.
    Continue,
}

/// Command targeting a specific animator.
#[derive(Debug, Clone, Copy)]
pub struct AnimatorCommand<Id> {
    pub animator_id: Id,
    pub action: AnimatorAction,
}

impl<Id> AnimatorCommand<Id> {
    /// Creates command.
    pub fn new(animator_id: Id, action: AnimatorAction) -> Self {
        Self {
            animator_id,
            action,
        }
    }
}
