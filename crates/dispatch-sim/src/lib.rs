//! `dispatch-sim` — the kinematic simulator.
//!
//! # One seek step per busy driver per tick
//!
//! ```text
//! for each busy driver:
//!   ① Arrival check — ‖destination − position‖ < epsilon?
//!        yes → snap position to destination, record arrival
//!        no  → move by speed·d̂, recompute heading
//! for each arrival:
//!   ② Next stop    — NextWaypointPolicy::next_waypoint
//!        Some(wp) → reroute (multi-stop placeholder)
//!        None     → release (driver returns to idle)
//! ```
//!
//! This is a steering/seek algorithm, not a physics integrator: no velocity
//! or acceleration survives between ticks, so missed ticks only slow arrival
//! — they never desync heading or overshoot (the arrival check runs before
//! the move).  Drivers are stepped independently; no driver's update reads
//! another's state.

pub mod engine;
pub mod error;
pub mod observer;
pub mod policy;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use engine::{SeekEngine, TickReport};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, TickObserver};
pub use policy::{NextWaypointPolicy, RandomWaypoint, TerminateRoute};
