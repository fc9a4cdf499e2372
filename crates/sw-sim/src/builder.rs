//! Fluent builder for constructing a [`Sim`].

use sw_core::{FrameClock, WalkConfig, WalkerId, WalkerRng};
use sw_graph::PointGraph;
use sw_walker::{StepChooser, Walker};

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim<G, C>`].
///
/// # Required inputs
///
/// - `G: PointGraph` — a [`sw_graph::Lattice`] or [`sw_graph::PointMap`]
/// - the start location
/// - [`WalkConfig`] — step budget, seed, pace
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                       |
/// |-----------------|-----------------------------------------------|
/// | `.walker_id(i)` | `WalkerId(0)`, mixed into the RNG seed        |
/// | `.chooser(c)`   | `WalkerRng` seeded from `config.seed`         |
/// | `.clock(c)`     | `FrameClock::default()` (60 fps)              |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(map, PointId::new("a"), config)
///     .clock(FrameClock::new(10.0))
///     .build()?;
/// sim.run(100_000, &mut NoopObserver);
/// ```
pub struct SimBuilder<G: PointGraph, C: StepChooser = WalkerRng> {
    graph:   G,
    start:   G::Location,
    config:  WalkConfig,
    chooser: C,
    clock:   FrameClock,
}

impl<G: PointGraph> SimBuilder<G, WalkerRng> {
    /// Create a builder with all required inputs.
    pub fn new(graph: G, start: G::Location, config: WalkConfig) -> Self {
        let chooser = WalkerRng::new(config.seed, WalkerId(0));
        Self { graph, start, config, chooser, clock: FrameClock::default() }
    }

    /// Re-seed the RNG for walker `id` (distinct ids, distinct walks).
    pub fn walker_id(mut self, id: WalkerId) -> Self {
        self.chooser = WalkerRng::new(self.config.seed, id);
        self
    }
}

impl<G: PointGraph, C: StepChooser> SimBuilder<G, C> {
    /// Replace the seeded RNG with another move picker (e.g. a scripted one).
    pub fn chooser<C2: StepChooser>(self, chooser: C2) -> SimBuilder<G, C2> {
        SimBuilder {
            graph:  self.graph,
            start:  self.start,
            config: self.config,
            chooser,
            clock:  self.clock,
        }
    }

    pub fn clock(mut self, clock: FrameClock) -> Self {
        self.clock = clock;
        self
    }

    /// Validate inputs, place the walker and return a ready-to-run [`Sim`].
    ///
    /// # Errors
    ///
    /// [`SimError::Config`](crate::SimError::Config) for an invalid pace,
    /// [`SimError::Walk`](crate::SimError::Walk) if the start location is
    /// not in the graph.
    pub fn build(self) -> SimResult<Sim<G, C>> {
        let Self { graph, start, config, chooser, clock } = self;
        config.validate()?;

        let walker = Walker::place(&graph, start, config.steps, config.pace)?;
        let destination_count = graph.destination_count();

        tracing::debug!(
            start = %walker.location(),
            steps = config.steps,
            destinations = destination_count,
            "sim built"
        );

        Ok(Sim::new(graph, walker, chooser, clock, config, destination_count))
    }
}
