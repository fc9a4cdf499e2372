//! region_walk — the region-graph scene, driven headlessly.
//!
//! Loads level geometry (normalized vertex positions plus region edge
//! lists) from a JSON file, scales it to a 600×600 viewport, and lets a
//! walker wander the region boundaries with tweened moves until it reaches
//! the destination corner or runs out of steps.
//!
//! Usage: `region_walk [LEVEL_JSON] [SEED]`.  Defaults to the bundled
//! `level.json` and seed 42.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use sw_core::{Frame, Pace, PointId, Viewport, WalkConfig};
use sw_graph::{LevelData, PointGraph, PointMap, SiteKind};
use sw_sim::{RunStatus, SimBuilder, WalkObserver};
use sw_walker::{MoveInstruction, MoveKind, Step};

// ── Constants ─────────────────────────────────────────────────────────────────

const STEPS:        u32 = 25;
const DEFAULT_SEED: u64 = 42;
const MAX_FRAMES:   u64 = 100_000;

const START:       &str = "b0";
const DESTINATION: &str = "b8";

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints moves, and the regions bordering the point the walker rests on.
struct TracePrinter<'a> {
    map:   &'a PointMap,
    moves: usize,
}

impl WalkObserver<PointId> for TracePrinter<'_> {
    fn on_move(&mut self, frame: Frame, m: &MoveInstruction<PointId>) {
        self.moves += 1;
        let tag = match m.kind {
            MoveKind::Walk     => "walk",
            MoveKind::Reverse  => "reverse",
            MoveKind::Redirect => "redirect",
        };
        println!(
            "{frame:>7}  {tag:<9} {:>3} -> {:<3} {:>6.1} px  {:>6.0} ms",
            m.from.as_str(), m.to.as_str(), m.distance, m.expected_duration,
        );
    }

    fn on_arrival(&mut self, frame: Frame, at: &PointId, step: &Step<PointId>) {
        match step {
            Step::Stop => {
                println!("{frame:>7}  resting at {at}, bordering {}", self.map.regions_of(at).join(", "));
            }
            Step::Stalled(e) => println!("{frame:>7}  stalled at {at}: {e}"),
            Step::Move(_) | Step::Idle => {}
        }
    }

    fn on_run_end(&mut self, frame: Frame, status: RunStatus) {
        println!("{frame:>7}  {status}");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let level_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/level.json")));
    let seed = match args.next() {
        Some(arg) => arg.parse().with_context(|| format!("invalid seed {arg:?}"))?,
        None => DEFAULT_SEED,
    };

    println!("=== region_walk ===");
    println!("Level: {}  |  Steps: {STEPS}  |  Seed: {seed}", level_path.display());
    println!();

    // 1. Load level geometry.
    let file = File::open(&level_path)
        .with_context(|| format!("opening {}", level_path.display()))?;
    let level = LevelData::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", level_path.display()))?;

    // 2. Build the graph.  The interior junction starts as a redirect, the
    //    way an editor click on it would leave it.
    let overrides: HashMap<PointId, SiteKind> = [
        (PointId::new(DESTINATION), SiteKind::Destination),
        (PointId::new("d4"),        SiteKind::Redirect),
    ]
    .into_iter()
    .collect();
    let map = PointMap::from_level(&level, Viewport::default(), &overrides)?;
    println!(
        "Graph: {} points, {} links, {} regions",
        map.point_count(),
        map.link_count(),
        map.regions().len(),
    );
    for point in map.points() {
        println!(
            "  {:<3} ({:>5.1}, {:>5.1})  {:<11}  regions: {}",
            point.location.as_str(),
            point.pos.x,
            point.pos.y,
            point.behavior().kind().as_str(),
            map.regions_of(&point.location).join(", "),
        );
    }
    println!();

    // 3. Build sim.
    let config = WalkConfig { steps: STEPS, seed, pace: Pace::tween() };
    let mut sim = SimBuilder::new(map, PointId::new(START), config).build()?;
    tracing::info!(start = START, destination = DESTINATION, "walker placed");

    // 4. Run.  The sim owns the graph; region lookups use a second copy.
    let regions = PointMap::from_level(&level, Viewport::default(), &overrides)?;
    let mut printer = TracePrinter { map: &regions, moves: 0 };
    let frames = sim.run(MAX_FRAMES, &mut printer);

    // 5. Summary.
    let here = sim.walker().location().clone();
    println!();
    println!("{}", sim.status());
    println!("{}", sim.remaining_steps_label());
    println!(
        "Moves: {}  |  Frames: {frames}  |  Ended at {here} ({})",
        printer.moves,
        sim.graph().point(&here)?.behavior().kind(),
    );

    Ok(())
}
