//! What the walker hands back to the rendering collaborator.

use sw_core::Vec2;

use crate::WalkError;

/// Why a move was committed.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MoveKind {
    Walk,
    Reverse,
    Redirect,
}

/// A committed move for the collaborator to animate.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveInstruction<L> {
    pub kind:   MoveKind,
    pub from:   L,
    pub to:     L,
    /// Where the walker starts (its current continuous position).
    pub origin: Vec2,
    /// Coordinates of the destination point.
    pub target: Vec2,
    /// Euclidean distance from `origin` to `target`.
    pub distance: f32,
    /// Milliseconds under `Pace::Tween`, frames under `Pace::Glide`.
    pub expected_duration: f32,
}

/// Outcome of a walker event.
#[derive(Debug)]
pub enum Step<L> {
    /// A new move was committed.
    Move(MoveInstruction<L>),
    /// The walker came to rest: destination reached or budget exhausted.
    Stop,
    /// Nothing to do (already idle, move in flight, stale event).
    Idle,
    /// An anomaly was logged and the walker parked in `NotStepping`.
    Stalled(WalkError),
}

impl<L> Step<L> {
    pub fn instruction(&self) -> Option<&MoveInstruction<L>> {
        match self {
            Step::Move(m) => Some(m),
            _ => None,
        }
    }

    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, Step::Move(_))
    }
}
