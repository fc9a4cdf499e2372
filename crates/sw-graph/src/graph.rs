//! The `PointGraph` capability shared by both graph variants.
//!
//! The walker is generic over this trait, so it never needs to know whether
//! neighbours are computed (lattice) or looked up (loaded graph).

use std::fmt;
use std::hash::Hash;

use sw_core::Vec2;

use crate::{GraphResult, NeighborLink, Point, SiteKind};

/// Point graph queried and (for redirect queues and editing) mutated by the
/// simulation.
///
/// # Errors
///
/// Every lookup of an unknown location returns
/// [`GraphError::UnknownPoint`](crate::GraphError::UnknownPoint).  Callers
/// treat it as a logged anomaly, never a crash.
pub trait PointGraph {
    /// How a point is addressed: a `Cell` for lattices, a `PointId` for
    /// loaded graphs.
    type Location: Clone + Eq + Hash + fmt::Debug + fmt::Display;

    fn point(&self, at: &Self::Location) -> GraphResult<&Point<Self::Location>>;

    fn point_mut(&mut self, at: &Self::Location) -> GraphResult<&mut Point<Self::Location>>;

    /// Outgoing neighbour links of `at`, in the graph's natural order.
    /// Empty for an isolated point.
    fn neighbors_of(&self, at: &Self::Location) -> GraphResult<Vec<NeighborLink<Self::Location>>>;

    /// The point nearest to `pos`, or `None` if there is none close enough.
    fn point_at(&self, pos: Vec2) -> Option<Self::Location>;

    /// The forced exit of a redirect point at `at`, without consuming it.
    ///
    /// `Ok(None)` when `at` is not a redirect or its exit is unusable (e.g. a
    /// lattice redirect pointing off the grid).
    fn redirect_exit(&self, at: &Self::Location) -> GraphResult<Option<NeighborLink<Self::Location>>>;

    /// Advance the editor's behavior cycle for the point at `at` and return
    /// the new tag.  Destinations never change.
    fn cycle_behavior(&mut self, at: &Self::Location) -> GraphResult<SiteKind>;

    /// Number of points tagged `Destination`.
    fn destination_count(&self) -> usize;

    /// Candidate moves from `at`.
    ///
    /// `came_from` is where the walker's previous move started, if that move
    /// ended at `at`.  The default excludes only `at` itself; lattices also
    /// exclude `came_from` so the walker never immediately backtracks.
    fn step_candidates(
        &self,
        at:         &Self::Location,
        _came_from: Option<&Self::Location>,
    ) -> GraphResult<Vec<NeighborLink<Self::Location>>> {
        let mut links = self.neighbors_of(at)?;
        links.retain(|l| &l.location != at);
        Ok(links)
    }

    /// Consume one redirect exit at `at` (a walker visit).
    ///
    /// Returns how many exits remain; the point reverts to `Default` at 0.
    fn consume_redirect(&mut self, at: &Self::Location) -> GraphResult<usize> {
        Ok(self.point_mut(at)?.consume_exit())
    }

    #[inline]
    fn position_of(&self, at: &Self::Location) -> GraphResult<Vec2> {
        Ok(self.point(at)?.pos)
    }
}
