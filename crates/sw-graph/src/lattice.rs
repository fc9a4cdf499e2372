//! Rectangular lattice (grid variant).
//!
//! # Layout
//!
//! `cols × rows` points stored row-major.  Cell `(col, row)` sits at
//!
//! ```text
//! (col * col_spacing + offset, row * row_spacing + offset)
//! ```
//!
//! where `col_spacing = viewport.width / cols` and
//! `row_spacing = viewport.height / rows`.  Neighbours are never stored: the
//! four cardinal offsets are computed on demand and filtered to
//! `[0, cols-1] × [0, rows-1]`.

use serde::{Deserialize, Serialize};
use sw_core::{Cell, Direction, Vec2, Viewport};

use crate::{
    Behavior, GraphError, GraphResult, NeighborLink, Point, PointGraph, Redirect, SiteKind,
};

// ── Configuration ─────────────────────────────────────────────────────────────

/// Behavior override for one lattice cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellOverride {
    pub cell: Cell,
    pub kind: SiteKind,
}

/// Everything needed to synthesize a [`Lattice`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LatticeConfig {
    pub cols:     u32,
    pub rows:     u32,
    /// Pixel offset added to both coordinates of every point.
    pub offset:   f32,
    pub viewport: Viewport,
    /// Cells whose behavior is not `Default`.  Later entries win.
    #[serde(default)]
    pub overrides: Vec<CellOverride>,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            cols:      8,
            rows:      8,
            offset:    45.0,
            viewport:  Viewport::default(),
            overrides: Vec::new(),
        }
    }
}

// ── Lattice ───────────────────────────────────────────────────────────────────

/// Implicit grid graph.  Construct with [`Lattice::new`].
pub struct Lattice {
    cols:        u32,
    rows:        u32,
    offset:      f32,
    col_spacing: f32,
    row_spacing: f32,
    /// Row-major: index = row * cols + col.
    points:      Vec<Point<Cell>>,
}

impl Lattice {
    /// Synthesize all `cols × rows` points and apply the overrides.
    pub fn new(config: &LatticeConfig) -> GraphResult<Self> {
        let LatticeConfig { cols, rows, offset, viewport, .. } = *config;
        if cols == 0 || rows == 0 {
            return Err(GraphError::InvalidDimensions { cols, rows });
        }

        let col_spacing = viewport.width / cols as f32;
        let row_spacing = viewport.height / rows as f32;

        let mut lattice = Self {
            cols,
            rows,
            offset,
            col_spacing,
            row_spacing,
            points: Vec::with_capacity((cols * rows) as usize),
        };
        for row in 0..rows {
            for col in 0..cols {
                let cell = Cell::new(col, row);
                let pos = lattice.cell_pos(cell);
                lattice.points.push(Point::new(cell, pos, Behavior::Default));
            }
        }

        for o in &config.overrides {
            let idx = lattice
                .index(o.cell)
                .ok_or(GraphError::OutOfBounds { col: o.cell.col, row: o.cell.row })?;
            lattice.points[idx].set_behavior(behavior_for(o.kind));
        }

        Ok(lattice)
    }

    pub fn cols(&self) -> u32 { self.cols }
    pub fn rows(&self) -> u32 { self.rows }

    /// Screen position of `cell` (whether or not it is in bounds).
    #[inline]
    pub fn cell_pos(&self, cell: Cell) -> Vec2 {
        Vec2::new(
            cell.col as f32 * self.col_spacing + self.offset,
            cell.row as f32 * self.row_spacing + self.offset,
        )
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.col < self.cols && cell.row < self.rows
    }

    /// The in-bounds cell one step from `cell` towards `dir`.
    #[inline]
    pub fn step(&self, cell: Cell, dir: Direction) -> Option<Cell> {
        let (dc, dr) = dir.delta();
        cell.offset(dc, dr).filter(|&c| self.contains(c))
    }

    #[inline]
    fn index(&self, cell: Cell) -> Option<usize> {
        self.contains(cell)
            .then(|| (cell.row * self.cols + cell.col) as usize)
    }

    fn checked_index(&self, at: &Cell) -> GraphResult<usize> {
        self.index(*at).ok_or_else(|| GraphError::UnknownPoint(at.to_string()))
    }

    fn link(&self, from: Cell, to: Cell) -> NeighborLink<Cell> {
        NeighborLink::between(self.cell_pos(from), to, self.cell_pos(to))
    }
}

/// Lattice interpretation of an override tag.
fn behavior_for(kind: SiteKind) -> Behavior<Cell> {
    match kind {
        SiteKind::Default     => Behavior::Default,
        SiteKind::Destination => Behavior::Destination,
        SiteKind::Block       => Behavior::Block,
        other => Behavior::Redirect(Redirect::Toward(
            other.redirect_direction().unwrap_or(Direction::North),
        )),
    }
}

impl PointGraph for Lattice {
    type Location = Cell;

    fn point(&self, at: &Cell) -> GraphResult<&Point<Cell>> {
        let idx = self.checked_index(at)?;
        Ok(&self.points[idx])
    }

    fn point_mut(&mut self, at: &Cell) -> GraphResult<&mut Point<Cell>> {
        let idx = self.checked_index(at)?;
        Ok(&mut self.points[idx])
    }

    fn neighbors_of(&self, at: &Cell) -> GraphResult<Vec<NeighborLink<Cell>>> {
        self.checked_index(at)?;
        Ok(Direction::ALL
            .iter()
            .filter_map(|&d| self.step(*at, d))
            .map(|c| self.link(*at, c))
            .collect())
    }

    fn point_at(&self, pos: Vec2) -> Option<Cell> {
        let col = ((pos.x - self.offset) / self.col_spacing).round();
        let row = ((pos.y - self.offset) / self.row_spacing).round();
        if col < 0.0 || row < 0.0 {
            return None;
        }
        let cell = Cell::new(col as u32, row as u32);
        self.contains(cell).then_some(cell)
    }

    fn redirect_exit(&self, at: &Cell) -> GraphResult<Option<NeighborLink<Cell>>> {
        let exit = match self.point(at)?.behavior() {
            Behavior::Redirect(Redirect::Toward(dir)) => self.step(*at, *dir),
            _ => None,
        };
        Ok(exit.map(|c| self.link(*at, c)))
    }

    /// Default → Block → North → East → South → West → Default.
    fn cycle_behavior(&mut self, at: &Cell) -> GraphResult<SiteKind> {
        let point = self.point_mut(at)?;
        let next = match point.behavior() {
            Behavior::Destination => return Ok(SiteKind::Destination),
            Behavior::Default => Behavior::Block,
            Behavior::Block => Behavior::Redirect(Redirect::Toward(Direction::North)),
            Behavior::Redirect(Redirect::Toward(Direction::West)) => Behavior::Default,
            Behavior::Redirect(Redirect::Toward(d)) => {
                Behavior::Redirect(Redirect::Toward(d.clockwise()))
            }
            _ => Behavior::Default,
        };
        let kind = next.kind();
        point.set_behavior(next);
        tracing::debug!(cell = %at, %kind, "lattice behavior cycled");
        Ok(kind)
    }

    fn destination_count(&self) -> usize {
        self.points.iter().filter(|p| p.behavior().is_destination()).count()
    }

    /// Excludes the move that would undo the previous one.
    fn step_candidates(
        &self,
        at:        &Cell,
        came_from: Option<&Cell>,
    ) -> GraphResult<Vec<NeighborLink<Cell>>> {
        let mut links = self.neighbors_of(at)?;
        if let Some(prev) = came_from {
            links.retain(|l| &l.location != prev);
        }
        Ok(links)
    }
}
