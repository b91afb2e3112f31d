//! The `Driver` record and its operational status.

use std::fmt;

use dispatch_core::{DriverId, PlanePoint};

// ── DriverStatus ──────────────────────────────────────────────────────────────

/// Operational status of a driver.
///
/// A driver is either **idle** (available for dispatch), **busy** (claimed,
/// moving toward a destination), or **offline** (on the roster but not
/// dispatchable).  Only idle drivers can be claimed; only busy drivers can be
/// rerouted.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DriverStatus {
    Idle,
    Busy,
    Offline,
}

impl fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DriverStatus::Idle    => "idle",
            DriverStatus::Busy    => "busy",
            DriverStatus::Offline => "offline",
        };
        f.write_str(s)
    }
}

// ── Driver ────────────────────────────────────────────────────────────────────

/// A mobile agent on the dispatch plane.
///
/// State mutations go through [`FleetRegistry`][crate::FleetRegistry] (claim,
/// release, reroute, roster changes) or the kinematic simulator (per-tick
/// position and heading while busy).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Driver {
    pub id: DriverId,
    pub name: String,
    pub status: DriverStatus,
    pub position: PlanePoint,

    /// Present iff `status == Busy`.
    pub destination: Option<PlanePoint>,

    /// Direction of travel, pure `atan2` degrees (0° = +x).  Meaningless
    /// while idle or offline; the presentation glyph offset is applied at
    /// the presentation boundary, not stored here.
    pub heading_deg: f32,

    /// Orders currently claimed by this driver.
    pub active_orders: u32,
}

impl Driver {
    /// `true` if this driver can accept a claim.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.status == DriverStatus::Idle
    }

    #[inline]
    pub fn is_busy(&self) -> bool {
        self.status == DriverStatus::Busy
    }
}
