//! The `NextWaypointPolicy` trait — what happens when a driver arrives.

use dispatch_core::{DispatchRng, PlanePoint, SimParams};
use dispatch_fleet::Driver;

/// Pluggable arrival decision.
///
/// The simulator never decides on its own what an arrived driver does next;
/// it asks the policy.  `Some(point)` issues a new destination (a multi-stop
/// route placeholder), `None` terminates movement and the driver is released
/// back to idle.
///
/// Implementations must be `Send` — the policy is owned by the tick task.
pub trait NextWaypointPolicy: Send {
    fn next_waypoint(&mut self, driver: &Driver) -> Option<PlanePoint>;
}

// ── TerminateRoute ────────────────────────────────────────────────────────────

/// Production behavior: every arrival ends the route and releases the driver.
/// Subsequent stops come from fresh dispatch cycles, not from the simulator.
pub struct TerminateRoute;

impl NextWaypointPolicy for TerminateRoute {
    fn next_waypoint(&mut self, _driver: &Driver) -> Option<PlanePoint> {
        None
    }
}

// ── RandomWaypoint ────────────────────────────────────────────────────────────

/// Reference demo behavior: every arrival picks a fresh pseudo-random
/// waypoint in the inner waypoint square, keeping drivers perpetually in
/// motion.  A visual stand-in for "en route to the next delivery" — not a
/// routing decision.
pub struct RandomWaypoint {
    rng: DispatchRng,
    min: f32,
    max: f32,
}

impl RandomWaypoint {
    /// Waypoints are drawn uniformly from
    /// `[params.waypoint_min, params.waypoint_max]²`.
    pub fn new(rng: DispatchRng, params: &SimParams) -> Self {
        Self {
            rng,
            min: params.waypoint_min,
            max: params.waypoint_max,
        }
    }
}

impl NextWaypointPolicy for RandomWaypoint {
    fn next_waypoint(&mut self, _driver: &Driver) -> Option<PlanePoint> {
        let x = self.rng.gen_range(self.min..=self.max);
        let y = self.rng.gen_range(self.min..=self.max);
        Some(PlanePoint::new(x, y))
    }
}
