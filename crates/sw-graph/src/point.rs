//! Graph nodes and directed neighbour records.

use sw_core::{Vec2, bearing_deg};

use crate::{Behavior, Redirect};

// ── Point ─────────────────────────────────────────────────────────────────────

/// A single graph node: immutable identity and position, mutable behavior.
///
/// Points never reference the walker.  Behavior changes come from the
/// editor (see [`PointGraph::cycle_behavior`](crate::PointGraph::cycle_behavior))
/// and from redirect exits being consumed.
#[derive(Clone, Debug)]
pub struct Point<L> {
    pub location: L,
    pub pos:      Vec2,
    behavior:     Behavior<L>,
}

impl<L> Point<L> {
    pub fn new(location: L, pos: Vec2, behavior: Behavior<L>) -> Self {
        Self { location, pos, behavior }
    }

    #[inline]
    pub fn behavior(&self) -> &Behavior<L> {
        &self.behavior
    }

    pub fn set_behavior(&mut self, behavior: Behavior<L>) {
        self.behavior = behavior;
    }

    /// Drop the front exit of an exit-queue redirect, reverting to `Default`
    /// once the queue is empty.  Returns the remaining queue length.
    ///
    /// Cardinal redirects and non-redirect behaviors are left untouched and
    /// report 0.
    pub fn consume_exit(&mut self) -> usize {
        let remaining = match &mut self.behavior {
            Behavior::Redirect(Redirect::Exits(exits)) => {
                exits.pop_front();
                exits.len()
            }
            _ => return 0,
        };
        if remaining == 0 {
            self.behavior = Behavior::Default;
        }
        remaining
    }

    /// Number of queued exits (0 unless this is an exit-queue redirect).
    pub fn exit_count(&self) -> usize {
        match &self.behavior {
            Behavior::Redirect(Redirect::Exits(exits)) => exits.len(),
            _ => 0,
        }
    }
}

// ── NeighborLink ──────────────────────────────────────────────────────────────

/// Directed association from some point A to its neighbour B.
///
/// Carries B's absolute position, the raw screen displacement `B − A`, and
/// the bearing of that displacement (see [`sw_core::bearing_deg`]).
#[derive(Clone, Debug, PartialEq)]
pub struct NeighborLink<L> {
    pub location: L,
    pub pos:      Vec2,
    pub bearing:  f32,
    pub dx:       f32,
    pub dy:       f32,
}

impl<L> NeighborLink<L> {
    /// Build the link from a point at `from` to `location` at `to`.
    pub fn between(from: Vec2, location: L, to: Vec2) -> Self {
        let d = to - from;
        Self {
            location,
            pos:     to,
            bearing: bearing_deg(d),
            dx:      d.x,
            dy:      d.y,
        }
    }

    #[inline]
    pub fn displacement(&self) -> Vec2 {
        Vec2::new(self.dx, self.dy)
    }
}
