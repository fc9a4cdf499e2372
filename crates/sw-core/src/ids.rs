//! Location identifiers.
//!
//! The two graph variants locate points differently: the lattice uses a
//! column/row [`Cell`], the loaded graph uses a string [`PointId`].  Both are
//! cheap to clone, hashable, and printable so they can serve as the walker's
//! generic location type.

use std::fmt;
use std::sync::Arc;

// ── Cell ──────────────────────────────────────────────────────────────────────

/// A column/row pair addressing one point of a rectangular lattice.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub col: u32,
    pub row: u32,
}

impl Cell {
    #[inline]
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// Offset by a signed column/row delta.  `None` if either index would go
    /// below zero; upper bounds are the lattice's business.
    #[inline]
    pub fn offset(self, dcol: i32, drow: i32) -> Option<Cell> {
        let col = self.col.checked_add_signed(dcol)?;
        let row = self.row.checked_add_signed(drow)?;
        Some(Cell { col, row })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

// ── PointId ───────────────────────────────────────────────────────────────────

/// Identifier of a point in a loaded graph, unique per graph.
///
/// Backed by `Arc<str>` so adjacency tables, redirect queues and the walker's
/// history can all hold the same id without re-allocating.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointId(Arc<str>);

impl PointId {
    pub fn new(id: impl AsRef<str>) -> Self {
        PointId(Arc::from(id.as_ref()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PointId {
    fn from(s: &str) -> Self {
        PointId::new(s)
    }
}

impl From<String> for PointId {
    fn from(s: String) -> Self {
        PointId(Arc::from(s))
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── WalkerId ──────────────────────────────────────────────────────────────────

/// Index of an independent walker.  Only used to derive per-walker RNG seeds.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkerId(pub u32);

impl fmt::Display for WalkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WalkerId({})", self.0)
    }
}
