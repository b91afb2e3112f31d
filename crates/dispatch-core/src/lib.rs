//! `dispatch-core` — foundational types for the delivery dispatch engine.
//!
//! This crate is a dependency of every other `dispatch-*` crate.  It
//! intentionally has no `dispatch-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                         |
//! |--------------|--------------------------------------------------|
//! | [`ids`]      | `OrderId`, `DriverId`                            |
//! | [`plane`]    | `PlanePoint`, distance, heading                  |
//! | [`time`]     | `Tick`, `TickClock`                              |
//! | [`rng`]      | `DispatchRng` (seeded, reproducible)             |
//! | [`params`]   | `SimParams` (speed, arrival epsilon, waypoints)  |
//! | [`error`]    | `CoreError`, `CoreResult`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.  |

pub mod error;
pub mod ids;
pub mod params;
pub mod plane;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{DriverId, OrderId};
pub use params::SimParams;
pub use plane::{PLANE_MAX, PLANE_MIN, PlanePoint};
pub use rng::DispatchRng;
pub use time::{Tick, TickClock};
