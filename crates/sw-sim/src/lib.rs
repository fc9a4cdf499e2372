//! `sw-sim` — headless driver for a single walker on a point graph.
//!
//! # Frame loop
//!
//! ```text
//! start:      Walker::take_step → MoveInstruction → Motion
//! each frame: ① advance Motion (glide delta or tween interpolation)
//!             ② report the position to the walker
//!             ③ on arrival, Walker::on_arrived_at → next instruction / stop
//! ```
//!
//! The frame loop stands in for the rendering collaborator: it owns the
//! per-frame interpolation and raises the "arrived at point" event once the
//! walker has fully reached its target.  Editing (click-to-cycle) goes
//! through [`Sim::on_behavior_cycled`] or [`Sim::cycle_at`].
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sw_core::{Cell, WalkConfig};
//! use sw_graph::{Lattice, LatticeConfig};
//! use sw_sim::{NoopObserver, SimBuilder};
//!
//! let lattice = Lattice::new(&LatticeConfig::default())?;
//! let mut sim = SimBuilder::new(lattice, Cell::new(2, 5), WalkConfig::default()).build()?;
//! sim.run(10_000, &mut NoopObserver);
//! println!("{}", sim.status());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod status;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, WalkObserver};
pub use sim::Sim;
pub use status::RunStatus;
