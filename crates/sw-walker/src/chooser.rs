//! Pluggable move selection.
//!
//! The walker picks uniformly at random among its candidates.  Tests and
//! scripted scenarios swap in a deterministic chooser instead.

use sw_core::WalkerRng;
use sw_graph::NeighborLink;

/// Picks the next move from a non-empty candidate list.
pub trait StepChooser {
    /// Return the index of the chosen candidate, or `None` to decline.
    fn choose<L>(&mut self, candidates: &[NeighborLink<L>]) -> Option<usize>;
}

/// Uniform random choice.
impl StepChooser for WalkerRng {
    fn choose<L>(&mut self, candidates: &[NeighborLink<L>]) -> Option<usize> {
        if candidates.is_empty() {
            return None;
        }
        Some(self.gen_range(0..candidates.len()))
    }
}
