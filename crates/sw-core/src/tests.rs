//! Unit tests for sw-core primitives.

#[cfg(test)]
mod ids {
    use crate::{Cell, PointId, WalkerId};

    #[test]
    fn cell_offset_stays_non_negative() {
        let c = Cell::new(0, 2);
        assert_eq!(c.offset(1, 0), Some(Cell::new(1, 2)));
        assert_eq!(c.offset(0, -2), Some(Cell::new(0, 0)));
        assert_eq!(c.offset(-1, 0), None);
    }

    #[test]
    fn point_id_from_str_and_string_agree() {
        assert_eq!(PointId::from("v1"), PointId::from(String::from("v1")));
        assert_eq!(PointId::new("v1").as_str(), "v1");
    }

    #[test]
    fn display() {
        assert_eq!(Cell::new(3, 4).to_string(), "(3, 4)");
        assert_eq!(PointId::new("a").to_string(), "a");
        assert_eq!(WalkerId(7).to_string(), "WalkerId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{Vec2, bearing_deg};

    #[test]
    fn distance_is_euclidean() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn lerp_clamps() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert_eq!(a.lerp(b, 0.5), Vec2::new(5.0, 0.0));
        assert_eq!(a.lerp(b, 2.0), b);
    }

    #[test]
    fn bearing_up_is_zero_right_is_ninety() {
        assert!(bearing_deg(Vec2::new(0.0, -1.0)).abs() < 1e-4);
        assert!((bearing_deg(Vec2::new(1.0, 0.0)) - 90.0).abs() < 1e-4);
    }

    #[test]
    fn bearing_sort_is_cyclic_north_east_south_west() {
        let north = Vec2::new(0.0, -1.0);
        let east  = Vec2::new(1.0, 0.0);
        let south = Vec2::new(0.0, 1.0);
        let west  = Vec2::new(-1.0, 0.0);
        let expected = [north, east, south, west];

        let mut sorted = expected.to_vec();
        sorted.sort_by(|a, b| bearing_deg(*a).total_cmp(&bearing_deg(*b)));

        // Same cyclic order: rotate until north leads, then compare.
        let start = sorted.iter().position(|&v| v == north).unwrap();
        sorted.rotate_left(start);
        assert_eq!(sorted, expected.to_vec());
    }

    #[test]
    fn bearing_west_is_stable_for_negative_zero() {
        let a = bearing_deg(Vec2::new(-1.0, 0.0));
        let b = bearing_deg(Vec2::new(-1.0, -0.0));
        assert_eq!(a, b);
    }
}

#[cfg(test)]
mod direction {
    use crate::Direction;

    #[test]
    fn invert_is_involution() {
        for d in Direction::ALL {
            assert_eq!(d.invert().invert(), d);
            assert_ne!(d.invert(), d);
        }
    }

    #[test]
    fn clockwise_cycles_back() {
        let mut d = Direction::North;
        for _ in 0..4 {
            d = d.clockwise();
        }
        assert_eq!(d, Direction::North);
        assert_eq!(Direction::North.clockwise(), Direction::East);
    }

    #[test]
    fn north_is_row_minus_one() {
        assert_eq!(Direction::North.delta(), (0, -1));
        assert_eq!(Direction::East.to_string(), "east");
    }
}

#[cfg(test)]
mod time {
    use crate::{Frame, FrameClock};

    #[test]
    fn clock_advances() {
        let mut clock = FrameClock::new(10.0);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_frame, Frame(2));
        assert!((clock.elapsed_ms() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn frames_for_ms_rounds_up_and_never_zero() {
        let clock = FrameClock::new(10.0);
        assert_eq!(clock.frames_for_ms(25.0), 3);
        assert_eq!(clock.frames_for_ms(0.0), 1);
    }
}

#[cfg(test)]
mod rng {
    use crate::{WalkerId, WalkerRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = WalkerRng::new(12345, WalkerId(0));
        let mut r2 = WalkerRng::new(12345, WalkerId(0));
        for _ in 0..100 {
            assert_eq!(r1.gen_range(0..5usize), r2.gen_range(0..5usize));
        }
    }

    #[test]
    fn walker_ids_get_distinct_streams() {
        let mut a = WalkerRng::new(7, WalkerId(0));
        let mut b = WalkerRng::new(7, WalkerId(1));
        let xs: Vec<u64> = (0..16).map(|_| a.gen_range(0..u64::MAX)).collect();
        let ys: Vec<u64> = (0..16).map(|_| b.gen_range(0..u64::MAX)).collect();
        assert_ne!(xs, ys);
    }
}

#[cfg(test)]
mod config {
    use crate::{Pace, WalkConfig};

    #[test]
    fn tween_duration_scales_distance() {
        assert_eq!(Pace::tween().duration_for(10.0), 150.0);
    }

    #[test]
    fn glide_duration_counts_frames() {
        assert_eq!(Pace::Glide { delta: 0.5 }.duration_for(2.0), 4.0);
    }

    #[test]
    fn default_walk_config_is_valid() {
        let cfg = WalkConfig::default();
        assert_eq!(cfg.steps, 25);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn non_positive_pace_rejected() {
        let cfg = WalkConfig { pace: Pace::Glide { delta: 0.0 }, ..WalkConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = WalkConfig { pace: Pace::Tween { scale: f32::NAN }, ..WalkConfig::default() };
        assert!(cfg.validate().is_err());
    }
}
