//! Site-behavior resolution.
//!
//! [`resolve_arrival`] maps a point's behavior plus the walker's arrival
//! context to a [`Resolution`].  It reads the graph (to find the way back
//! from a block or a redirect's exit) but never mutates anything, so the
//! walker, the points and the graph never need each other's internals.
//!
//! | State on arrival        | Behavior    | Resolution                       |
//! |-------------------------|-------------|----------------------------------|
//! | `NotStepping`           | any         | `NoAction`                       |
//! | moving                  | Destination | `Arrive`                         |
//! | moving, budget = 0      | other       | `Exhausted`                      |
//! | moving                  | Default     | `Continue`                       |
//! | Walking / Redirecting   | Block       | `Reverse(back to leg.from)`      |
//! | Reversing               | Block       | `Pinned`                         |
//! | moving                  | Redirect    | `Redirect(exit)`, or `Continue` if no usable exit |

use sw_graph::{Behavior, NeighborLink, Point, PointGraph};

use crate::{Leg, SteppingState, WalkError, WalkResult};

/// The walker's side of an arrival.
#[derive(Debug)]
pub struct ArrivalContext<'a, L> {
    pub state:           SteppingState,
    pub remaining_steps: u32,
    /// The leg that just completed; `leg.to` is the point arrived at.
    pub leg:             &'a Leg<L>,
}

/// What an arrival implies.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution<L> {
    /// Pick the next move at random.
    Continue,
    /// Go back along this link to where the walker came from.
    Reverse(NeighborLink<L>),
    /// Take this forced exit.
    Redirect(NeighborLink<L>),
    /// Destination reached; the run is over.
    Arrive,
    /// Budget spent; come to rest here.
    Exhausted,
    /// Hit a block while already bouncing off one; come to rest here.
    Pinned,
    /// Ignore the event (the walker is idle).
    NoAction,
}

/// Resolve the walker's arrival at `point`.
///
/// # Errors
///
/// [`WalkError::MissingPredecessor`] if a block has no link back to the
/// point the walker came from; lookup failures from the graph.
pub fn resolve_arrival<G: PointGraph>(
    graph: &G,
    point: &Point<G::Location>,
    ctx:   &ArrivalContext<'_, G::Location>,
) -> WalkResult<Resolution<G::Location>> {
    if !ctx.state.is_moving() {
        return Ok(Resolution::NoAction);
    }

    let behavior = point.behavior();
    if behavior.is_destination() {
        return Ok(Resolution::Arrive);
    }
    if ctx.remaining_steps == 0 {
        return Ok(Resolution::Exhausted);
    }

    match behavior {
        Behavior::Default | Behavior::Destination => Ok(Resolution::Continue),

        Behavior::Block => {
            if ctx.state == SteppingState::Reversing {
                return Ok(Resolution::Pinned);
            }
            graph
                .neighbors_of(&point.location)?
                .into_iter()
                .find(|l| l.location == ctx.leg.from)
                .map(Resolution::Reverse)
                .ok_or_else(|| WalkError::MissingPredecessor {
                    block:    point.location.to_string(),
                    previous: ctx.leg.from.to_string(),
                })
        }

        Behavior::Redirect(_) => Ok(graph
            .redirect_exit(&point.location)?
            .map_or(Resolution::Continue, Resolution::Redirect)),
    }
}
