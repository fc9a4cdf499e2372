//! Site behaviors.
//!
//! [`SiteKind`] is the plain tag used in override lists, level files and
//! display text.  [`Behavior`] is the runtime form a [`Point`](crate::Point)
//! carries; its `Redirect` variant holds whatever the graph variant needs to
//! resolve the forced exit.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use sw_core::Direction;

/// Flat behavior tag.
///
/// The four `Redirect<Direction>` tags are lattice redirects.  A plain
/// `Redirect` on a lattice starts pointing north; any redirect tag on a
/// loaded graph becomes an exit queue.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum SiteKind {
    #[default]
    Default,
    Destination,
    Block,
    Redirect,
    RedirectNorth,
    RedirectEast,
    RedirectSouth,
    RedirectWest,
}

impl SiteKind {
    /// The direction of a cardinal redirect tag, if this is one.
    pub fn redirect_direction(self) -> Option<Direction> {
        match self {
            SiteKind::RedirectNorth => Some(Direction::North),
            SiteKind::RedirectEast  => Some(Direction::East),
            SiteKind::RedirectSouth => Some(Direction::South),
            SiteKind::RedirectWest  => Some(Direction::West),
            _ => None,
        }
    }

    pub fn is_redirect(self) -> bool {
        matches!(
            self,
            SiteKind::Redirect
                | SiteKind::RedirectNorth
                | SiteKind::RedirectEast
                | SiteKind::RedirectSouth
                | SiteKind::RedirectWest
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SiteKind::Default       => "default",
            SiteKind::Destination   => "destination",
            SiteKind::Block         => "block",
            SiteKind::Redirect      => "redirect",
            SiteKind::RedirectNorth => "redirect_north",
            SiteKind::RedirectEast  => "redirect_east",
            SiteKind::RedirectSouth => "redirect_south",
            SiteKind::RedirectWest  => "redirect_west",
        }
    }
}

impl std::fmt::Display for SiteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a redirect point picks its forced exit.
#[derive(Clone, Debug, PartialEq)]
pub enum Redirect<L> {
    /// Lattice: always push the walker one cell in this direction.
    Toward(Direction),
    /// Loaded graph: neighbours in bearing order, consumed front-first.
    /// Never empty; the point reverts to `Default` when the last exit goes.
    Exits(VecDeque<L>),
}

/// Runtime behavior of a point.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Behavior<L> {
    #[default]
    Default,
    Destination,
    Block,
    Redirect(Redirect<L>),
}

impl<L> Behavior<L> {
    /// The flat tag for this behavior.
    pub fn kind(&self) -> SiteKind {
        match self {
            Behavior::Default     => SiteKind::Default,
            Behavior::Destination => SiteKind::Destination,
            Behavior::Block       => SiteKind::Block,
            Behavior::Redirect(Redirect::Toward(d)) => match d {
                Direction::North => SiteKind::RedirectNorth,
                Direction::East  => SiteKind::RedirectEast,
                Direction::South => SiteKind::RedirectSouth,
                Direction::West  => SiteKind::RedirectWest,
            },
            Behavior::Redirect(Redirect::Exits(_)) => SiteKind::Redirect,
        }
    }

    #[inline]
    pub fn is_destination(&self) -> bool {
        matches!(self, Behavior::Destination)
    }
}
