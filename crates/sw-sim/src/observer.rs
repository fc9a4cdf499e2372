//! Observer hooks for progress reporting.

use sw_core::{Frame, Vec2};
use sw_walker::{MoveInstruction, Step};

use crate::RunStatus;

/// Callbacks invoked by [`Sim::tick`][crate::Sim::tick] and
/// [`Sim::run`][crate::Sim::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — move printer
///
/// ```rust,ignore
/// struct MovePrinter;
///
/// impl<L: std::fmt::Display> WalkObserver<L> for MovePrinter {
///     fn on_move(&mut self, frame: Frame, m: &MoveInstruction<L>) {
///         println!("{frame}: {:?} {} -> {}", m.kind, m.from, m.to);
///     }
/// }
/// ```
pub trait WalkObserver<L> {
    /// A move was committed.
    fn on_move(&mut self, _frame: Frame, _instruction: &MoveInstruction<L>) {}

    /// The walker fully reached `at`; `step` is the walker's response.
    fn on_arrival(&mut self, _frame: Frame, _at: &L, _step: &Step<L>) {}

    /// Called at the end of every frame with the walker's position.
    fn on_frame_end(&mut self, _frame: Frame, _position: Vec2) {}

    /// Called once when [`Sim::run`][crate::Sim::run] returns.
    fn on_run_end(&mut self, _frame: Frame, _status: RunStatus) {}
}

/// A [`WalkObserver`] that does nothing.
pub struct NoopObserver;

impl<L> WalkObserver<L> for NoopObserver {}
