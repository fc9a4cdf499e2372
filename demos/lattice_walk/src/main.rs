//! lattice_walk — the grid scene, driven headlessly.
//!
//! An 8×8 lattice with a single destination.  The walker starts three cells
//! away on the diagonal with 25 steps and picks every move at random.  A
//! few cells are pre-set the way a player would set them by clicking, so
//! blocks and redirects show up in the trace.
//!
//! Usage: `lattice_walk [SEED]` (default seed 42).  `RUST_LOG=debug` shows
//! every committed move and arrival.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use sw_core::{Cell, Frame, Pace, WalkConfig};
use sw_graph::{CellOverride, Lattice, LatticeConfig, PointGraph, SiteKind};
use sw_sim::{RunStatus, SimBuilder, WalkObserver};
use sw_walker::{MoveInstruction, MoveKind};

// ── Constants ─────────────────────────────────────────────────────────────────

const COLS:         u32 = 8;
const ROWS:         u32 = 8;
const STEPS:        u32 = 25;
const DEFAULT_SEED: u64 = 42;
const MAX_FRAMES:   u64 = 1_000_000; // ~290 frames per move at 0.35 px/frame

const START:       Cell = Cell::new(2, 5);
const DESTINATION: Cell = Cell::new(5, 2);

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints one line per committed move.
struct TracePrinter {
    moves: usize,
}

impl WalkObserver<Cell> for TracePrinter {
    fn on_move(&mut self, frame: Frame, m: &MoveInstruction<Cell>) {
        self.moves += 1;
        let tag = match m.kind {
            MoveKind::Walk     => "walk",
            MoveKind::Reverse  => "reverse",
            MoveKind::Redirect => "redirect",
        };
        println!("{frame:>8}  {tag:<9} {} -> {}  ({:.0} frames)", m.from, m.to, m.expected_duration);
    }

    fn on_run_end(&mut self, frame: Frame, status: RunStatus) {
        println!("{frame:>8}  {status}");
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn glyph(kind: SiteKind) -> char {
    match kind {
        SiteKind::Default       => '.',
        SiteKind::Destination   => '*',
        SiteKind::Block         => '#',
        SiteKind::Redirect      => '?',
        SiteKind::RedirectNorth => '^',
        SiteKind::RedirectEast  => '>',
        SiteKind::RedirectSouth => 'v',
        SiteKind::RedirectWest  => '<',
    }
}

fn print_grid(lattice: &Lattice, walker: Cell) -> Result<()> {
    for row in 0..lattice.rows() {
        let mut line = String::new();
        for col in 0..lattice.cols() {
            let cell = Cell::new(col, row);
            let c = if cell == walker {
                '@'
            } else {
                glyph(lattice.point(&cell)?.behavior().kind())
            };
            line.push(c);
            line.push(' ');
        }
        println!("  {line}");
    }
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse().with_context(|| format!("invalid seed {arg:?}"))?,
        None => DEFAULT_SEED,
    };

    println!("=== lattice_walk ===");
    println!("Grid: {COLS}×{ROWS}  |  Steps: {STEPS}  |  Seed: {seed}");
    println!();

    // 1. Lattice with the destination and a few editor-placed sites.
    let overrides = vec![
        CellOverride { cell: DESTINATION,      kind: SiteKind::Destination },
        CellOverride { cell: Cell::new(3, 3),  kind: SiteKind::Block },
        CellOverride { cell: Cell::new(4, 5),  kind: SiteKind::RedirectNorth },
        CellOverride { cell: Cell::new(1, 2),  kind: SiteKind::RedirectEast },
    ];
    let lattice = Lattice::new(&LatticeConfig { cols: COLS, rows: ROWS, overrides, ..LatticeConfig::default() })?;
    print_grid(&lattice, START)?;
    println!();

    // 2. Build sim.
    let config = WalkConfig { steps: STEPS, seed, pace: Pace::glide() };
    let mut sim = SimBuilder::new(lattice, START, config).build()?;
    tracing::info!(start = %START, destination = %DESTINATION, "walker placed");

    // 3. Run.
    let mut printer = TracePrinter { moves: 0 };
    let frames = sim.run(MAX_FRAMES, &mut printer);

    // 4. Summary.
    println!();
    print_grid(sim.graph(), *sim.walker().location())?;
    println!();
    println!("{}", sim.status());
    println!("{}", sim.remaining_steps_label());
    println!(
        "Moves: {}  |  Frames: {frames}  |  Destinations: {}/{}",
        printer.moves,
        sim.destinations_reached(),
        sim.destination_count(),
    );

    Ok(())
}
