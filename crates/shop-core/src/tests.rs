//! Unit tests for shop-core primitives.

#[cfg(test)]
mod ids {
    use crate::{BrandId, CustomerId, EmployeeId};

    #[test]
    fn index_roundtrip() {
        let id = CustomerId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(CustomerId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(CustomerId(0) < CustomerId(1));
        assert!(BrandId(3) > BrandId(2));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(CustomerId::INVALID.0, u32::MAX);
        assert_eq!(EmployeeId::INVALID.0, u32::MAX);
        assert_eq!(BrandId::INVALID.0, u16::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(BrandId(7).to_string(), "BrandId(7)");
    }
}

#[cfg(test)]
mod point {
    use crate::Point;

    #[test]
    fn distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn within_radius() {
        let a = Point::new(10.0, 10.0);
        assert!(a.within(Point::new(12.0, 10.0), 5.0));
        assert!(!a.within(Point::new(20.0, 10.0), 5.0));
    }

    #[test]
    fn step_moves_along_line() {
        let a = Point::new(0.0, 0.0);
        let next = a.step_toward(Point::new(10.0, 0.0), 4.0);
        assert_eq!(next, Point::new(4.0, 0.0));
    }

    #[test]
    fn step_clamps_at_target() {
        let a = Point::new(0.0, 0.0);
        let target = Point::new(2.0, 0.0);
        assert_eq!(a.step_toward(target, 5.0), target);
        // Stepping from the target stays put.
        assert_eq!(target.step_toward(target, 5.0), target);
    }
}

#[cfg(test)]
mod time {
    use crate::{Millis, ReplayConfig, SpawnTuning};

    #[test]
    fn millis_since() {
        let earlier = Millis(1_000.0);
        assert_eq!(Millis(3_500.0).since(earlier), 2_500.0);
        assert!(Millis(500.0).since(earlier) < 0.0);
    }

    #[test]
    fn spawn_interval_reference_point() {
        let tuning = SpawnTuning::default();
        // At exactly the reference volume the interval equals the reference.
        assert_eq!(tuning.interval_for(10_000), 2_000.0);
    }

    #[test]
    fn spawn_interval_clamps() {
        let tuning = SpawnTuning::default();
        // Huge month → fast spawning, clamped at the floor.
        assert_eq!(tuning.interval_for(1_000_000), 500.0);
        // Dead month → slow spawning, clamped at the ceiling.
        assert_eq!(tuning.interval_for(0), 3_000.0);
    }

    #[test]
    fn concurrency_cap_bounds() {
        let tuning = SpawnTuning::default();
        assert_eq!(tuning.cap_for(0), 20);
        assert_eq!(tuning.cap_for(25_000), 50);
        assert_eq!(tuning.cap_for(10_000_000), 100);
    }

    #[test]
    fn default_config_constants() {
        let config = ReplayConfig::with_seed(7);
        assert_eq!(config.seed, 7);
        assert_eq!(config.day_duration_ms, 2_000.0);
        assert_eq!(config.restock_ticks, 120);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f32 = r1.gen_range(0.0..1.0);
            let b: f32 = r2.gen_range(0.0..1.0);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn jitter_stays_in_box() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let (dx, dy) = rng.jitter(20.0, 15.0);
            assert!((-20.0..20.0).contains(&dx));
            assert!((-15.0..15.0).contains(&dy));
        }
    }

    #[test]
    fn jitter_degenerate_box_is_zero() {
        let mut rng = SimRng::new(0);
        assert_eq!(rng.jitter(0.0, 10.0), (0.0, 0.0));
    }

    #[test]
    fn weighted_pick_empty_is_none() {
        let mut rng = SimRng::new(0);
        assert_eq!(rng.weighted_pick(&[]), None);
    }

    #[test]
    fn weighted_pick_zero_weights_takes_first() {
        let mut rng = SimRng::new(0);
        assert_eq!(rng.weighted_pick(&[0, 0, 0]), Some(0));
    }

    #[test]
    fn weighted_pick_respects_weights() {
        let mut rng = SimRng::new(42);
        // One dominant weight should win the overwhelming majority of draws.
        let mut dominant = 0;
        for _ in 0..1000 {
            if rng.weighted_pick(&[1, 998, 1]) == Some(1) {
                dominant += 1;
            }
        }
        assert!(dominant > 950, "dominant weight picked {dominant}/1000");
    }

    #[test]
    fn weighted_pick_never_picks_zero_weight_brand() {
        let mut rng = SimRng::new(7);
        for _ in 0..1000 {
            let picked = rng.weighted_pick(&[0, 5, 0, 5]).unwrap();
            assert!(picked == 1 || picked == 3);
        }
    }
}
