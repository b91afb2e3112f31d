//! Unit tests for dispatch-core primitives.

#[cfg(test)]
mod ids {
    use crate::{DriverId, OrderId};

    #[test]
    fn index_roundtrip() {
        let id = OrderId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(OrderId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(OrderId(0) < OrderId(1));
        assert!(DriverId(100) > DriverId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(OrderId::INVALID.0, u32::MAX);
        assert_eq!(DriverId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(DriverId(7).to_string(), "DriverId(7)");
    }
}

#[cfg(test)]
mod plane {
    use crate::PlanePoint;

    #[test]
    fn zero_distance() {
        let p = PlanePoint::new(50.0, 50.0);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn pythagorean_distance() {
        let a = PlanePoint::new(0.0, 0.0);
        let b = PlanePoint::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn heading_cardinal_directions() {
        let origin = PlanePoint::new(50.0, 50.0);
        assert!((origin.heading_deg(PlanePoint::new(60.0, 50.0)) - 0.0).abs() < 1e-4);
        assert!((origin.heading_deg(PlanePoint::new(50.0, 60.0)) - 90.0).abs() < 1e-4);
        assert!((origin.heading_deg(PlanePoint::new(40.0, 50.0)).abs() - 180.0).abs() < 1e-4);
        assert!((origin.heading_deg(PlanePoint::new(50.0, 40.0)) + 90.0).abs() < 1e-4);
    }

    #[test]
    fn direction_to_is_unit_length() {
        let a = PlanePoint::new(10.0, 10.0);
        let b = PlanePoint::new(70.0, 30.0);
        let (dx, dy) = a.direction_to(b).unwrap();
        assert!(((dx * dx + dy * dy).sqrt() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn direction_to_coincident_is_none() {
        let p = PlanePoint::new(5.0, 5.0);
        assert!(p.direction_to(p).is_none());
    }

    #[test]
    fn clamp_and_bounds() {
        let outside = PlanePoint::new(-3.0, 120.0);
        assert!(!outside.in_bounds());
        let clamped = outside.clamped();
        assert_eq!(clamped, PlanePoint::new(0.0, 100.0));
        assert!(clamped.in_bounds());
    }
}

#[cfg(test)]
mod time {
    use crate::{Tick, TickClock};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = TickClock::new(16).unwrap();
        assert_eq!(clock.elapsed_ms(), 0);
        clock.advance();
        assert_eq!(clock.elapsed_ms(), 16);
        clock.advance();
        assert_eq!(clock.elapsed_ms(), 32);
    }

    #[test]
    fn cadence_bounds_enforced() {
        assert!(TickClock::new(0).is_err());
        assert!(TickClock::new(1_001).is_err());
        assert!(TickClock::new(1_000).is_ok()); // exactly 1 Hz is allowed
    }

    #[test]
    fn default_is_frame_rate() {
        let clock = TickClock::default();
        assert_eq!(clock.tick_interval_ms, TickClock::DEFAULT_INTERVAL_MS);
        assert_eq!(clock.interval().as_millis(), 16);
    }
}

#[cfg(test)]
mod rng {
    use crate::DispatchRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = DispatchRng::new(12345);
        let mut r2 = DispatchRng::new(12345);
        for _ in 0..100 {
            let a: f32 = r1.gen_range(0.0..1.0);
            let b: f32 = r2.gen_range(0.0..1.0);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn child_derivation_is_deterministic() {
        let mut a = DispatchRng::new(9);
        let mut b = DispatchRng::new(9);
        let mut ca = a.child(3);
        let mut cb = b.child(3);
        for _ in 0..10 {
            let x: u64 = ca.gen_range(0..u64::MAX);
            let y: u64 = cb.gen_range(0..u64::MAX);
            assert_eq!(x, y);
        }
    }

    #[test]
    fn children_with_different_offsets_diverge() {
        let mut root = DispatchRng::new(1);
        let mut c0 = root.child(0);
        let mut c1 = root.child(1);
        let a: u64 = c0.gen_range(0..u64::MAX);
        let b: u64 = c1.gen_range(0..u64::MAX);
        assert_ne!(a, b, "children for adjacent offsets should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = DispatchRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(10.0f32..90.0);
            assert!((10.0..90.0).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = DispatchRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}

#[cfg(test)]
mod params {
    use crate::SimParams;

    #[test]
    fn defaults_are_valid() {
        let p = SimParams::default().validated().unwrap();
        assert_eq!(p.speed_per_tick, 0.15);
        assert_eq!(p.arrival_epsilon, 0.5);
    }

    #[test]
    fn epsilon_must_exceed_speed() {
        let p = SimParams {
            speed_per_tick: 0.5,
            arrival_epsilon: 0.4,
            ..SimParams::default()
        };
        assert!(p.validated().is_err());
    }

    #[test]
    fn waypoint_bounds_must_be_ordered() {
        let p = SimParams {
            waypoint_min: 90.0,
            waypoint_max: 10.0,
            ..SimParams::default()
        };
        assert!(p.validated().is_err());
    }
}
