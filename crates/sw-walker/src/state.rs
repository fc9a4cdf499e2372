//! Stepping state and movement legs.

use std::fmt;

/// What the walker is doing right now.
///
/// Every state except `NotStepping` means a move toward the current leg's
/// destination is animating.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum SteppingState {
    /// Idle; eligible to start a move.
    #[default]
    NotStepping,
    /// Ordinary forward move.
    Walking,
    /// Undoing a move after hitting a block.
    Reversing,
    /// Forced move imposed by a redirect point.
    Redirecting,
}

impl SteppingState {
    #[inline]
    pub fn is_moving(self) -> bool {
        !matches!(self, SteppingState::NotStepping)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SteppingState::NotStepping => "not_stepping",
            SteppingState::Walking     => "walking",
            SteppingState::Reversing   => "reversing",
            SteppingState::Redirecting => "redirecting",
        }
    }
}

impl fmt::Display for SteppingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One directed move between two neighbouring points.
///
/// The walker's direction history is a list of legs; on a lattice a leg is
/// equivalent to a cardinal direction, on a loaded graph to a bearing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leg<L> {
    pub from: L,
    pub to:   L,
}

impl<L: Clone> Leg<L> {
    pub fn new(from: L, to: L) -> Self {
        Self { from, to }
    }

    /// The same leg travelled backwards.
    pub fn inverse(&self) -> Leg<L> {
        Leg { from: self.to.clone(), to: self.from.clone() }
    }
}

impl<L: fmt::Display> fmt::Display for Leg<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
