//! The walker state machine.

use std::collections::VecDeque;
use std::fmt;
use std::hash::Hash;

use sw_core::{Pace, Vec2};
use sw_graph::{NeighborLink, PointGraph};

use crate::{
    ArrivalContext, Leg, MoveInstruction, MoveKind, Resolution, Step, StepChooser, SteppingState,
    WalkError, WalkResult, resolve_arrival,
};

/// Completed legs kept per walker.  Only the newest is consulted (to avoid
/// undoing the previous move); a block bounce appends two at once.
pub const HISTORY_LEN: usize = 4;

/// A single walker moving across a [`PointGraph`].
///
/// Generic over the graph's location type, so the same state machine drives
/// both lattices (`L = Cell`) and loaded graphs (`L = PointId`).
///
/// # Invariants
///
/// - `remaining_steps` never underflows; every committed move (walk,
///   reversal, redirect) costs exactly one step.
/// - `state` is `NotStepping` exactly when no leg is in flight.
/// - Once a destination is reached no further move is issued until
///   [`reset_budget`](Self::reset_budget) is called.
pub struct Walker<L> {
    /// The point the walker is at, or departed from while a move is in flight.
    location: L,
    /// Continuous position, as last reported by the collaborator.
    position: Vec2,
    remaining_steps: u32,
    state: SteppingState,
    /// The move in flight (current direction).
    leg: Option<Leg<L>>,
    /// Coordinates of `leg.to`.
    target: Option<Vec2>,
    /// The last [`HISTORY_LEN`] completed legs, oldest first.  A block
    /// bounce records the leg and its inverse.
    history: VecDeque<Leg<L>>,
    pace: Pace,
    arrived: bool,
}

impl<L> Walker<L>
where
    L: Clone + Eq + Hash + fmt::Debug + fmt::Display,
{
    /// Create an idle walker at `start` with `steps` to spend.
    pub fn new(start: L, position: Vec2, steps: u32, pace: Pace) -> Self {
        Self {
            location: start,
            position,
            remaining_steps: steps,
            state: SteppingState::NotStepping,
            leg: None,
            target: None,
            history: VecDeque::with_capacity(HISTORY_LEN),
            pace,
            arrived: false,
        }
    }

    /// Create an idle walker on `start`, taking its position from `graph`.
    pub fn place<G>(graph: &G, start: L, steps: u32, pace: Pace) -> WalkResult<Self>
    where
        G: PointGraph<Location = L>,
    {
        let position = graph.position_of(&start)?;
        Ok(Self::new(start, position, steps, pace))
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn remaining_steps(&self) -> u32 {
        self.remaining_steps
    }

    #[inline]
    pub fn current_state(&self) -> SteppingState {
        self.state
    }

    #[inline]
    pub fn location(&self) -> &L {
        &self.location
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// The move in flight, if any.
    #[inline]
    pub fn current_leg(&self) -> Option<&Leg<L>> {
        self.leg.as_ref()
    }

    /// Destination of the move in flight.
    pub fn destination(&self) -> Option<&L> {
        self.leg.as_ref().map(|l| &l.to)
    }

    pub fn target(&self) -> Option<Vec2> {
        self.target
    }

    /// Most recent completed legs, oldest first.
    pub fn history(&self) -> &VecDeque<Leg<L>> {
        &self.history
    }

    /// `true` once a destination point has been reached.
    pub fn has_arrived(&self) -> bool {
        self.arrived
    }

    pub fn pace(&self) -> Pace {
        self.pace
    }

    pub fn remaining_steps_label(&self) -> String {
        format!("Remaining steps: {}", self.remaining_steps)
    }

    // ── Collaborator hooks ────────────────────────────────────────────────

    /// Record the interpolated position reported by the renderer.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Grant a fresh budget and clear the "destination reached" flag so a
    /// new run can start from the current point.
    pub fn reset_budget(&mut self, steps: u32) {
        self.remaining_steps = steps;
        self.arrived = false;
    }

    /// Start a random move if idle.
    ///
    /// Returns [`Step::Idle`] while a move is in flight or after the
    /// destination was reached, [`Step::Stop`] when the budget is spent.
    pub fn take_step<G, C>(&mut self, graph: &G, chooser: &mut C) -> Step<L>
    where
        G: PointGraph<Location = L>,
        C: StepChooser,
    {
        if self.state.is_moving() {
            return Step::Idle;
        }
        match self.try_take_step(graph, chooser) {
            Ok(step) => step,
            Err(e) => self.stall(e),
        }
    }

    /// The walker has fully reached `at`.
    ///
    /// Events for any point other than the in-flight destination are stale
    /// and ignored, as are events while idle.
    pub fn on_arrived_at<G, C>(&mut self, graph: &mut G, at: &L, chooser: &mut C) -> Step<L>
    where
        G: PointGraph<Location = L>,
        C: StepChooser,
    {
        let leg = match (&self.leg, self.state.is_moving()) {
            (Some(leg), true) if &leg.to == at => leg.clone(),
            _ => {
                tracing::debug!(point = %at, state = %self.state, "arrival ignored");
                return Step::Idle;
            }
        };
        match self.try_arrive(graph, leg, chooser) {
            Ok(step) => step,
            Err(e) => self.stall(e),
        }
    }

    // ── Transitions ───────────────────────────────────────────────────────

    fn try_take_step<G, C>(&mut self, graph: &G, chooser: &mut C) -> WalkResult<Step<L>>
    where
        G: PointGraph<Location = L>,
        C: StepChooser,
    {
        if self.arrived {
            return Ok(Step::Idle);
        }
        if self.remaining_steps == 0 {
            tracing::info!(point = %self.location, "out of steps");
            return Ok(Step::Stop);
        }

        let came_from = self
            .history
            .back()
            .filter(|l| l.to == self.location)
            .map(|l| l.from.clone());
        let mut candidates = graph.step_candidates(&self.location, came_from.as_ref())?;

        let idx = chooser
            .choose(&candidates)
            .filter(|&i| i < candidates.len())
            .ok_or_else(|| WalkError::EmptyCandidateSet(self.location.to_string()))?;
        let link = candidates.swap_remove(idx);

        Ok(Step::Move(self.commit(MoveKind::Walk, link)))
    }

    fn try_arrive<G, C>(&mut self, graph: &mut G, leg: Leg<L>, chooser: &mut C) -> WalkResult<Step<L>>
    where
        G: PointGraph<Location = L>,
        C: StepChooser,
    {
        let at = leg.to.clone();
        let (resolution, pos) = {
            let point = graph.point(&at)?;
            let ctx = ArrivalContext {
                state:           self.state,
                remaining_steps: self.remaining_steps,
                leg:             &leg,
            };
            (resolve_arrival(&*graph, point, &ctx)?, point.pos)
        };
        tracing::debug!(point = %at, ?resolution, "arrival resolved");

        match resolution {
            Resolution::NoAction => Ok(Step::Idle),

            Resolution::Continue => {
                self.settle(at, pos);
                self.record(leg);
                self.try_take_step(&*graph, chooser)
            }

            Resolution::Reverse(back) => {
                let inverse = leg.inverse();
                self.record(leg);
                self.record(inverse);
                self.location = at;
                self.position = pos;
                Ok(Step::Move(self.commit(MoveKind::Reverse, back)))
            }

            Resolution::Redirect(exit) => {
                let left = graph.consume_redirect(&at)?;
                tracing::debug!(point = %at, exits_left = left, "redirect consumed");
                self.record(leg);
                self.location = at;
                self.position = pos;
                Ok(Step::Move(self.commit(MoveKind::Redirect, exit)))
            }

            Resolution::Arrive => {
                tracing::info!(point = %at, remaining = self.remaining_steps, "arrived at destination");
                self.record(leg);
                self.settle(at, pos);
                self.arrived = true;
                Ok(Step::Stop)
            }

            Resolution::Exhausted => {
                tracing::info!(point = %at, "out of steps");
                self.record(leg);
                self.settle(at, pos);
                Ok(Step::Stop)
            }

            Resolution::Pinned => {
                tracing::warn!(point = %at, "block reached while reversing; walker parked");
                self.record(leg);
                self.settle(at, pos);
                Ok(Step::Stop)
            }
        }
    }

    /// Commit a move along `link` from the current location.
    fn commit(&mut self, kind: MoveKind, link: NeighborLink<L>) -> MoveInstruction<L> {
        let from = self.location.clone();
        let origin = self.position;
        let distance = origin.distance(link.pos);

        self.remaining_steps = self.remaining_steps.saturating_sub(1);
        self.state = match kind {
            MoveKind::Walk     => SteppingState::Walking,
            MoveKind::Reverse  => SteppingState::Reversing,
            MoveKind::Redirect => SteppingState::Redirecting,
        };
        self.leg = Some(Leg::new(from.clone(), link.location.clone()));
        self.target = Some(link.pos);

        tracing::debug!(
            ?kind,
            from = %from,
            to = %link.location,
            remaining = self.remaining_steps,
            "move committed"
        );

        MoveInstruction {
            kind,
            from,
            to: link.location,
            origin,
            target: link.pos,
            distance,
            expected_duration: self.pace.duration_for(distance),
        }
    }

    fn record(&mut self, leg: Leg<L>) {
        if self.history.len() == HISTORY_LEN {
            self.history.pop_front();
        }
        self.history.push_back(leg);
    }

    /// Come to rest on `at`.
    fn settle(&mut self, at: L, pos: Vec2) {
        self.location = at;
        self.position = pos;
        self.state = SteppingState::NotStepping;
        self.leg = None;
        self.target = None;
    }

    fn stall(&mut self, e: WalkError) -> Step<L> {
        tracing::warn!(error = %e, point = %self.location, "walker stalled");
        self.state = SteppingState::NotStepping;
        self.leg = None;
        self.target = None;
        Step::Stalled(e)
    }
}
