//! Integration tests for sw-sim.

use sw_core::{Cell, Frame, Pace, PointId, Vec2, Viewport, WalkConfig};
use sw_graph::{CellOverride, Lattice, LatticeConfig, NeighborLink, PointMap, PointMapBuilder, SiteKind};
use sw_walker::{MoveInstruction, Step, StepChooser};

use crate::{RunStatus, WalkObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Picks the candidate whose bearing is closest to the given one.
struct Heading(f32);

impl StepChooser for Heading {
    fn choose<L>(&mut self, candidates: &[NeighborLink<L>]) -> Option<usize> {
        candidates
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| (a.bearing - self.0).abs().total_cmp(&(b.bearing - self.0).abs()))
            .map(|(i, _)| i)
    }
}

fn id(s: &str) -> PointId {
    PointId::new(s)
}

fn config(steps: u32, pace: Pace) -> WalkConfig {
    WalkConfig { steps, seed: 42, pace }
}

/// 3×3 lattice on 300×300, points at 50/150/250.
fn lattice(overrides: &[(u32, u32, SiteKind)]) -> Lattice {
    let cfg = LatticeConfig {
        cols:      3,
        rows:      3,
        offset:    50.0,
        viewport:  Viewport { width: 300.0, height: 300.0 },
        overrides: overrides
            .iter()
            .map(|&(col, row, kind)| CellOverride { cell: Cell::new(col, row), kind })
            .collect(),
    };
    Lattice::new(&cfg).unwrap()
}

/// a — b — c along the x axis, 10 px apart.
fn line(kinds: [SiteKind; 3]) -> PointMap {
    let mut b = PointMapBuilder::new();
    for (i, (name, kind)) in ["a", "b", "c"].into_iter().zip(kinds).enumerate() {
        b.add_point(name, Vec2::new(10.0 * i as f32, 0.0)).unwrap();
        b.set_kind(&id(name), kind).unwrap();
    }
    b.add_edge(&id("a"), &id("b")).unwrap();
    b.add_edge(&id("b"), &id("c")).unwrap();
    b.build()
}

/// Records every hook call.
struct Recorder<L> {
    moves:    Vec<L>,
    arrivals: Vec<L>,
    frames:   u64,
    end:      Option<(Frame, RunStatus)>,
}

impl<L> Default for Recorder<L> {
    fn default() -> Self {
        Self { moves: Vec::new(), arrivals: Vec::new(), frames: 0, end: None }
    }
}

impl<L: Clone> WalkObserver<L> for Recorder<L> {
    fn on_move(&mut self, _frame: Frame, m: &MoveInstruction<L>) {
        self.moves.push(m.to.clone());
    }

    fn on_arrival(&mut self, _frame: Frame, at: &L, _step: &Step<L>) {
        self.arrivals.push(at.clone());
    }

    fn on_frame_end(&mut self, _frame: Frame, _position: Vec2) {
        self.frames += 1;
    }

    fn on_run_end(&mut self, frame: Frame, status: RunStatus) {
        self.end = Some((frame, status));
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::{SimBuilder, SimError};
    use sw_walker::WalkError;

    #[test]
    fn builds_with_defaults() {
        let sim = SimBuilder::new(lattice(&[(2, 1, SiteKind::Destination)]), Cell::new(0, 0), WalkConfig::default())
            .build()
            .unwrap();
        assert_eq!(sim.remaining_steps(), 25);
        assert_eq!(sim.destination_count(), 1);
        assert_eq!(sim.position(), Vec2::new(50.0, 50.0));
        assert_eq!(sim.status(), RunStatus::Walking);
        assert_eq!(sim.remaining_steps_label(), "Remaining steps: 25");
    }

    #[test]
    fn unknown_start_rejected() {
        let result = SimBuilder::new(line([SiteKind::Default; 3]), id("zz"), WalkConfig::default()).build();
        assert!(matches!(result, Err(SimError::Walk(WalkError::UnknownPointId(_)))));
    }

    #[test]
    fn invalid_pace_rejected() {
        let result = SimBuilder::new(lattice(&[]), Cell::new(0, 0), config(5, Pace::Glide { delta: 0.0 })).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }
}

// ── Frame loop ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;
    use crate::{NoopObserver, SimBuilder};
    use sw_core::FrameClock;
    use sw_walker::SteppingState;

    #[test]
    fn glide_reaches_adjacent_destination() {
        let mut sim = SimBuilder::new(lattice(&[(2, 1, SiteKind::Destination)]), Cell::new(1, 1), config(5, Pace::glide()))
            .chooser(Heading(90.0))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        let frames = sim.run(10_000, &mut rec);

        // 100 px at 0.35 px per frame.
        assert!((285..=287).contains(&frames), "frames = {frames}");
        assert_eq!(rec.moves, vec![Cell::new(2, 1)]);
        assert_eq!(rec.arrivals, vec![Cell::new(2, 1)]);
        assert_eq!(rec.frames, frames);
        assert_eq!(rec.end.map(|(_, s)| s), Some(RunStatus::ArrivedAtDestination));

        assert_eq!(sim.remaining_steps(), 4);
        assert_eq!(sim.current_state(), SteppingState::NotStepping);
        assert_eq!(sim.destinations_reached(), 1);
        assert_eq!(sim.position(), Vec2::new(250.0, 150.0));
        assert_eq!(sim.status().to_string(), "Arrived at destination!");

        // Terminal: running again issues nothing.
        assert_eq!(sim.run(10_000, &mut NoopObserver), 0);
        assert_eq!(sim.remaining_steps(), 4);
    }

    #[test]
    fn tween_walks_line_to_destination() {
        let map = line([SiteKind::Default, SiteKind::Default, SiteKind::Destination]);
        let mut sim = SimBuilder::new(map, id("a"), config(5, Pace::tween()))
            .chooser(Heading(90.0))
            .clock(FrameClock::new(10.0))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        let frames = sim.run(1_000, &mut rec);

        // Two 10 px moves at 150 ms each, 10 ms frames.
        assert_eq!(frames, 30);
        assert_eq!(rec.moves, vec![id("b"), id("c")]);
        assert_eq!(sim.status(), RunStatus::ArrivedAtDestination);
        assert_eq!(sim.remaining_steps(), 3);
        assert_eq!(sim.clock.current_frame, Frame(30));
    }

    #[test]
    fn out_of_steps_before_destination() {
        let mut sim = SimBuilder::new(lattice(&[(0, 0, SiteKind::Destination)]), Cell::new(0, 2), config(2, Pace::glide()))
            .chooser(Heading(90.0))
            .build()
            .unwrap();
        sim.run(10_000, &mut NoopObserver);
        assert_eq!(sim.remaining_steps(), 0);
        assert_eq!(*sim.walker().location(), Cell::new(2, 2));
        assert_eq!(sim.status(), RunStatus::OutOfSteps);
        assert_eq!(sim.status().as_str(), "Out of steps..");

        // A fresh budget resumes the walk (the only way on is north).
        sim.reset_budget(1);
        assert_eq!(sim.status(), RunStatus::Walking);
        let mut rec = Recorder::default();
        sim.run(10_000, &mut rec);
        assert_eq!(rec.moves, vec![Cell::new(2, 1)]);
    }

    #[test]
    fn block_bounce_costs_two_steps() {
        let map = line([SiteKind::Default, SiteKind::Block, SiteKind::Default]);
        let mut sim = SimBuilder::new(map, id("a"), config(3, Pace::tween()))
            .chooser(Heading(90.0))
            .build()
            .unwrap();
        assert!(sim.start().is_move());
        let back = sim.on_arrived_at(&id("b"));
        assert_eq!(back.instruction().unwrap().to, id("a"));
        assert_eq!(sim.remaining_steps(), 1);
        assert_eq!(sim.current_state(), SteppingState::Reversing);
        assert!(sim.is_moving());
    }

    #[test]
    fn isolated_start_stalls() {
        let mut b = PointMapBuilder::new();
        b.add_point("solo", Vec2::new(5.0, 5.0)).unwrap();
        let mut sim = SimBuilder::new(b.build(), id("solo"), config(5, Pace::tween())).build().unwrap();

        let mut rec = Recorder::default();
        assert_eq!(sim.run(100, &mut rec), 0);
        assert_eq!(sim.status(), RunStatus::Stalled);
        assert_eq!(sim.remaining_steps(), 5);
        assert!(rec.moves.is_empty());
        assert_eq!(rec.end.map(|(_, s)| s), Some(RunStatus::Stalled));
    }

    #[test]
    fn frame_cap_stops_run() {
        let mut sim = SimBuilder::new(lattice(&[]), Cell::new(0, 0), config(25, Pace::glide()))
            .build()
            .unwrap();
        assert_eq!(sim.run(10, &mut NoopObserver), 10);
        assert!(sim.is_moving());
        assert_eq!(sim.status(), RunStatus::Walking);
    }

    #[test]
    fn same_seed_same_walk() {
        let walk = |seed: u64| {
            let cfg = WalkConfig { steps: 12, seed, pace: Pace::glide() };
            let mut sim = SimBuilder::new(Lattice::new(&LatticeConfig::default()).unwrap(), Cell::new(2, 5), cfg)
                .build()
                .unwrap();
            let mut rec = Recorder::default();
            sim.run(1_000_000, &mut rec);
            rec.moves
        };
        let first = walk(7);
        assert_eq!(first.len(), 12);
        assert_eq!(first, walk(7));
    }
}

// ── Editing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod edit_tests {
    use super::*;
    use crate::SimBuilder;
    use sw_graph::PointGraph;

    #[test]
    fn cycle_at_snaps_to_nearest_cell() {
        let mut sim = SimBuilder::new(lattice(&[(2, 2, SiteKind::Destination)]), Cell::new(0, 0), WalkConfig::default())
            .build()
            .unwrap();
        let hit = sim.cycle_at(Vec2::new(140.0, 160.0)).unwrap();
        assert_eq!(hit, Some((Cell::new(1, 1), SiteKind::Block)));
        assert_eq!(sim.on_behavior_cycled(&Cell::new(1, 1)).unwrap(), SiteKind::RedirectNorth);
        assert_eq!(sim.on_behavior_cycled(&Cell::new(2, 2)).unwrap(), SiteKind::Destination);
        assert!(sim.cycle_at(Vec2::new(-500.0, -500.0)).unwrap().is_none());
    }

    #[test]
    fn editing_mid_move_applies_on_arrival() {
        let map = line([SiteKind::Default; 3]);
        let mut sim = SimBuilder::new(map, id("a"), config(5, Pace::tween()))
            .chooser(Heading(90.0))
            .build()
            .unwrap();
        sim.start();
        // b becomes a block while the walker is on its way.
        assert_eq!(sim.on_behavior_cycled(&id("b")).unwrap(), SiteKind::Block);
        let step = sim.on_arrived_at(&id("b"));
        assert_eq!(step.instruction().unwrap().to, id("a"));
        assert_eq!(sim.graph().point(&id("b")).unwrap().behavior().kind(), SiteKind::Block);
    }
}
