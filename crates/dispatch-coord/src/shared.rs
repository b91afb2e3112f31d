//! Shared-state handles for the two mutable collections.
//!
//! The order ledger and fleet registry are the only shared mutable state in
//! the system.  One mutex per collection is sufficient at expected fleet
//! sizes (tens of drivers, not millions); no per-record locking.
//!
//! Lock ordering: when both are needed, take the ledger first, then the
//! fleet.  Never hold either across an `.await`.

use std::sync::Arc;

use parking_lot::Mutex;

use dispatch_fleet::FleetRegistry;
use dispatch_orders::OrderLedger;

/// The order ledger, shared between the coordinator and the presentation layer.
pub type SharedLedger = Arc<Mutex<OrderLedger>>;

/// The fleet registry, shared between the coordinator and the tick scheduler.
pub type SharedFleet = Arc<Mutex<FleetRegistry>>;
