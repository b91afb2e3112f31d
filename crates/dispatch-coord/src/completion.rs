//! Route-completion reporting back to the order ledger.
//!
//! When the simulator releases a driver (the waypoint policy ended the
//! route), that delivery is done — the ledger must learn about it or the
//! order would keep pointing at an idle driver.  The tick scheduler forwards
//! released drivers to a [`RouteCompletion`] hook; [`DeliveryCompleter`] is
//! the ledger-aware implementation that closes the loop.
//!
//! The hook is always invoked with no locks held (in particular, not the
//! fleet lock), so implementations may take the ledger lock freely without
//! violating the ledger-then-fleet ordering.

use dispatch_core::DriverId;
use dispatch_orders::{LedgerResult, OrderStatus};
use tracing::{debug, info, warn};

use crate::SharedLedger;

/// Consumer of finished routes.
///
/// Implementations must be `Send` — the hook is owned by the tick task.
pub trait RouteCompletion: Send {
    /// Called once per driver whose route ended this tick, after the fleet
    /// lock is released.
    fn on_route_complete(&mut self, driver: DriverId);
}

/// A [`RouteCompletion`] that does nothing.  For fleets that run without an
/// order ledger (pure-motion setups and tests).
pub struct NoopCompletion;

impl RouteCompletion for NoopCompletion {
    fn on_route_complete(&mut self, _driver: DriverId) {}
}

// ── DeliveryCompleter ─────────────────────────────────────────────────────────

/// Marks the order carried by a finishing driver as completed.
///
/// Looks up the order assigned to the driver and advances it to `Completed`
/// (through `Shipped` if needed); completion clears the assignment on the
/// ledger side, so the assigned ⇒ busy property holds again the moment the
/// driver goes idle.  A driver with no attached order (demo joyride, manual
/// claim) is logged and skipped.
pub struct DeliveryCompleter {
    ledger: SharedLedger,
}

impl DeliveryCompleter {
    pub fn new(ledger: SharedLedger) -> Self {
        Self { ledger }
    }
}

impl RouteCompletion for DeliveryCompleter {
    fn on_route_complete(&mut self, driver: DriverId) {
        let mut ledger = self.ledger.lock();
        let Some(order_id) = ledger.assigned_to(driver).map(|o| o.id) else {
            debug!(%driver, "route finished with no order attached");
            return;
        };

        let result: LedgerResult<()> = (|| {
            if ledger.get(order_id).map(|o| o.status) == Some(OrderStatus::Processing) {
                ledger.advance_status(order_id, OrderStatus::Shipped)?;
            }
            ledger.advance_status(order_id, OrderStatus::Completed)
        })();

        match result {
            Ok(()) => info!(%order_id, %driver, "delivery completed"),
            Err(e) => warn!(%order_id, %driver, error = %e, "failed to complete delivery"),
        }
    }
}
