//! Tunable simulation parameters.

use crate::{CoreError, CoreResult, PLANE_MAX, PLANE_MIN};

/// Kinematic and waypoint parameters shared by the simulator and coordinator.
///
/// The defaults reproduce the reference behavior: 0.15 plane-units per tick,
/// a 0.5-unit arrival radius, and demo waypoints drawn from the inner
/// `[10,90]×[10,90]` square so drivers never hug the plane edge.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimParams {
    /// Distance a busy driver covers per tick, in plane units.
    pub speed_per_tick: f32,

    /// A driver closer than this to its destination has arrived.  Must be
    /// larger than `speed_per_tick` or a driver could orbit the destination
    /// forever, overshooting each tick.
    pub arrival_epsilon: f32,

    /// Lower bound (both axes) for generated demo waypoints.
    pub waypoint_min: f32,

    /// Upper bound (both axes) for generated demo waypoints.
    pub waypoint_max: f32,
}

impl SimParams {
    /// Validate field relationships.
    ///
    /// # Errors
    ///
    /// Speed and epsilon must be positive with `epsilon > speed` (see the
    /// field docs); waypoint bounds must be ordered and on the plane.
    pub fn validated(self) -> CoreResult<Self> {
        if self.speed_per_tick <= 0.0 {
            return Err(CoreError::Params(format!(
                "speed_per_tick must be positive, got {}",
                self.speed_per_tick
            )));
        }
        if self.arrival_epsilon <= self.speed_per_tick {
            return Err(CoreError::Params(format!(
                "arrival_epsilon ({}) must exceed speed_per_tick ({})",
                self.arrival_epsilon, self.speed_per_tick
            )));
        }
        if self.waypoint_min >= self.waypoint_max
            || self.waypoint_min < PLANE_MIN
            || self.waypoint_max > PLANE_MAX
        {
            return Err(CoreError::Params(format!(
                "waypoint bounds [{}, {}] must be ordered and within [{PLANE_MIN}, {PLANE_MAX}]",
                self.waypoint_min, self.waypoint_max
            )));
        }
        Ok(self)
    }
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            speed_per_tick:  0.15,
            arrival_epsilon: 0.5,
            waypoint_min:    10.0,
            waypoint_max:    90.0,
        }
    }
}
