//! The `Sim` struct and its frame loop.

use sw_core::{FrameClock, Vec2, WalkConfig, WalkerRng};
use sw_graph::{PointGraph, SiteKind};
use sw_walker::{Motion, Step, StepChooser, SteppingState, Walker};

use crate::{RunStatus, SimResult, WalkObserver};

/// Headless stand-in for the rendering collaborator.
///
/// `Sim<G, C>` owns the graph, the walker, the move picker and the motion of
/// the move in flight:
///
/// 1. **Start**: [`Sim::start`] asks the walker for its first move.
/// 2. **Frames**: [`Sim::tick`] interpolates the walker's position and,
///    once the target is fully reached, raises the arrival event.
/// 3. **Editing**: [`Sim::on_behavior_cycled`] forwards a click-to-cycle to
///    the graph; it may be called at any time, including mid-move.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<G: PointGraph, C: StepChooser = WalkerRng> {
    /// Budget, seed and pace this run was built with.
    pub config: WalkConfig,

    /// Frame counter; `frame_ms` drives tween interpolation.
    pub clock: FrameClock,

    graph:   G,
    walker:  Walker<G::Location>,
    chooser: C,
    /// Interpolation of the move in flight, if any.
    motion:  Option<Motion>,

    destination_count:    usize,
    destinations_reached: usize,
    /// Set when the last walker event stalled on a graph anomaly.
    stalled: bool,
}

impl<G: PointGraph, C: StepChooser> Sim<G, C> {
    pub(crate) fn new(
        graph:             G,
        walker:            Walker<G::Location>,
        chooser:           C,
        clock:             FrameClock,
        config:            WalkConfig,
        destination_count: usize,
    ) -> Self {
        Self {
            config,
            clock,
            graph,
            walker,
            chooser,
            motion: None,
            destination_count,
            destinations_reached: 0,
            stalled: false,
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn graph(&self) -> &G {
        &self.graph
    }

    #[inline]
    pub fn walker(&self) -> &Walker<G::Location> {
        &self.walker
    }

    #[inline]
    pub fn remaining_steps(&self) -> u32 {
        self.walker.remaining_steps()
    }

    #[inline]
    pub fn current_state(&self) -> SteppingState {
        self.walker.current_state()
    }

    pub fn remaining_steps_label(&self) -> String {
        self.walker.remaining_steps_label()
    }

    pub fn position(&self) -> Vec2 {
        self.walker.position()
    }

    pub fn destination_count(&self) -> usize {
        self.destination_count
    }

    pub fn destinations_reached(&self) -> usize {
        self.destinations_reached
    }

    /// `true` while a move is being interpolated.
    pub fn is_moving(&self) -> bool {
        self.motion.is_some()
    }

    pub fn status(&self) -> RunStatus {
        if self.stalled {
            RunStatus::Stalled
        } else if self.walker.has_arrived() {
            RunStatus::ArrivedAtDestination
        } else if self.walker.remaining_steps() == 0
            && !self.walker.current_state().is_moving()
            && self.destinations_reached < self.destination_count
        {
            RunStatus::OutOfSteps
        } else {
            RunStatus::Walking
        }
    }

    // ── Walker events ─────────────────────────────────────────────────────

    /// Ask the walker for a move if it is idle.
    pub fn start(&mut self) -> Step<G::Location> {
        let step = self.walker.take_step(&self.graph, &mut self.chooser);
        self.absorb(&step);
        step
    }

    /// Report that the walker has fully reached `at`.
    ///
    /// Normally raised by [`tick`](Self::tick); exposed for collaborators
    /// that do their own interpolation.
    pub fn on_arrived_at(&mut self, at: &G::Location) -> Step<G::Location> {
        let step = self.walker.on_arrived_at(&mut self.graph, at, &mut self.chooser);
        self.absorb(&step);
        step
    }

    /// Cycle the behavior of the point at `at` (an editor click).
    pub fn on_behavior_cycled(&mut self, at: &G::Location) -> SimResult<SiteKind> {
        Ok(self.graph.cycle_behavior(at)?)
    }

    /// Cycle the behavior of the point nearest `pos`, if there is one.
    pub fn cycle_at(&mut self, pos: Vec2) -> SimResult<Option<(G::Location, SiteKind)>> {
        let Some(at) = self.graph.point_at(pos) else {
            return Ok(None);
        };
        let kind = self.graph.cycle_behavior(&at)?;
        Ok(Some((at, kind)))
    }

    /// Grant a fresh budget so a new run can start from the current point.
    pub fn reset_budget(&mut self, steps: u32) {
        self.walker.reset_budget(steps);
        self.stalled = false;
    }

    // ── Frame loop ────────────────────────────────────────────────────────

    /// Advance one frame.  Returns the walker's response if an arrival was
    /// raised this frame.
    pub fn tick<O: WalkObserver<G::Location>>(&mut self, observer: &mut O) -> Option<Step<G::Location>> {
        let frame = self.clock.current_frame;
        let arrived = match self.motion.as_mut() {
            Some(motion) => {
                let pos = motion.advance(self.clock.frame_ms);
                self.walker.set_position(pos);
                motion.has_arrived()
            }
            None => false,
        };

        let mut response = None;
        if arrived {
            self.motion = None;
            if let Some(at) = self.walker.destination().cloned() {
                let step = self.on_arrived_at(&at);
                observer.on_arrival(frame, &at, &step);
                if let Step::Move(m) = &step {
                    observer.on_move(frame, m);
                }
                response = Some(step);
            }
        }

        observer.on_frame_end(frame, self.walker.position());
        self.clock.advance();
        response
    }

    /// Start the walker if idle, then run frames until it comes to rest or
    /// `max_frames` frames have passed.  Returns the number of frames run.
    pub fn run<O: WalkObserver<G::Location>>(&mut self, max_frames: u64, observer: &mut O) -> u64 {
        if self.motion.is_none() {
            let frame = self.clock.current_frame;
            if let Step::Move(m) = &self.start() {
                observer.on_move(frame, m);
            }
        }

        let mut frames = 0;
        while self.motion.is_some() && frames < max_frames {
            self.tick(observer);
            frames += 1;
        }
        if self.motion.is_some() {
            tracing::warn!(frames, "frame cap reached with a move in flight");
        }

        let status = self.status();
        tracing::info!(%status, remaining = self.remaining_steps(), frames, "run ended");
        observer.on_run_end(self.clock.current_frame, status);
        frames
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Update motion and counters from a walker response.
    fn absorb(&mut self, step: &Step<G::Location>) {
        match step {
            Step::Move(m) => {
                self.motion = Some(Motion::start(m, self.walker.pace()));
                self.stalled = false;
            }
            Step::Stop => {
                self.motion = None;
                if self.walker.has_arrived() {
                    self.destinations_reached += 1;
                }
            }
            Step::Stalled(_) => {
                self.motion = None;
                self.stalled = true;
            }
            Step::Idle => {}
        }
    }
}
