//! The `DispatchCoordinator` and its cycle logic.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use dispatch_core::{DispatchRng, PlanePoint, SimParams};
use dispatch_orders::LedgerError;

use crate::{
    AssignmentPair, CycleSummary, DriverSummary, Optimizer, OptimizerError, OptimizerRequest,
    OrderSummary, SharedFleet, SharedLedger, SkipReason, SkippedPair,
};

/// Default ceiling on one optimizer call.  A slow optimizer only delays its
/// own cycle — ticks keep running — but an unbounded wait would pin the
/// still-pending orders forever.
const DEFAULT_OPTIMIZER_TIMEOUT: Duration = Duration::from_secs(5);

/// Orchestrates one-shot batch assignment of deliverable orders to idle
/// drivers.
///
/// Construction wires in the two shared collections and the optimizer; see
/// the crate docs for the cycle phases.  The coordinator is `Send + Sync`
/// and cheap to share — cycles may be triggered manually (operator command)
/// or from a periodic task.
pub struct DispatchCoordinator {
    ledger: SharedLedger,
    fleet: SharedFleet,
    optimizer: Arc<dyn Optimizer>,
    params: SimParams,
    /// Source of claim destinations — the demo stand-in for a real routing
    /// decision (see `SimParams` waypoint bounds).
    waypoints: Mutex<DispatchRng>,
    optimizer_timeout: Duration,
}

impl DispatchCoordinator {
    pub fn new(
        ledger: SharedLedger,
        fleet: SharedFleet,
        optimizer: Arc<dyn Optimizer>,
        params: SimParams,
        waypoint_rng: DispatchRng,
    ) -> Self {
        Self {
            ledger,
            fleet,
            optimizer,
            params,
            waypoints: Mutex::new(waypoint_rng),
            optimizer_timeout: DEFAULT_OPTIMIZER_TIMEOUT,
        }
    }

    /// Override the optimizer call ceiling.
    pub fn with_optimizer_timeout(mut self, timeout: Duration) -> Self {
        self.optimizer_timeout = timeout;
        self
    }

    /// Run one dispatch cycle.  Never fails — every outcome is a summary.
    pub async fn run_dispatch_cycle(&self) -> CycleSummary {
        // ── Phase 1: snapshot inputs under short-lived locks ──────────────
        let orders: Vec<OrderSummary> = {
            let ledger = self.ledger.lock();
            ledger
                .list_deliverable()
                .into_iter()
                .map(|o| OrderSummary {
                    id: o.id,
                    customer: o.customer.clone(),
                    created_unix_ms: o.created_unix_ms,
                })
                .collect()
        };
        if orders.is_empty() {
            // No deliverable work: skip the external call entirely.
            debug!("dispatch cycle: no deliverable orders, optimizer not called");
            return CycleSummary::no_pending();
        }

        let drivers: Vec<DriverSummary> = {
            let fleet = self.fleet.lock();
            fleet
                .list_available()
                .into_iter()
                .map(|d| DriverSummary {
                    id: d.id,
                    name: d.name.clone(),
                    position: d.position,
                })
                .collect()
        };

        let order_ids: HashSet<_> = orders.iter().map(|o| o.id).collect();
        let driver_ids: HashSet<_> = drivers.iter().map(|d| d.id).collect();

        // ── Phase 2: await the optimizer with no locks held ───────────────
        let request = OptimizerRequest { orders, drivers };
        let pairs = match self.propose_with_timeout(request).await {
            Ok(pairs) => pairs,
            Err(e) => {
                warn!(error = %e, "dispatch cycle: optimizer failed, 0 assigned, retry pending");
                return CycleSummary {
                    optimizer_error: Some(e.to_string()),
                    ..CycleSummary::default()
                };
            }
        };

        // ── Phases 3+4: validate and apply, pair-by-pair in returned order ─
        let mut summary = CycleSummary::default();

        // Lock ordering: ledger, then fleet (see `shared`).  The apply loop
        // is pure compute, so holding both for the batch keeps each pair's
        // two-step write invisible to concurrent readers.
        let mut ledger = self.ledger.lock();
        let mut fleet = self.fleet.lock();

        for pair in pairs {
            let AssignmentPair { order_id, driver_id } = pair;

            // Defensive validation: the optimizer may not invent ids.
            let invalid = if !order_ids.contains(&order_id) {
                Some(SkipReason::UnknownOrder)
            } else if !driver_ids.contains(&driver_id) {
                Some(SkipReason::UnknownDriver)
            } else {
                None
            };
            if let Some(reason) = invalid {
                warn!(%order_id, %driver_id, %reason, "dropping invalid optimizer pair");
                summary.skipped.push(SkippedPair { order_id, driver_id, reason });
                continue;
            }

            // Two-step apply: order first, then driver.  Either both land or
            // the order side is unwound — an assigned order always has a
            // genuinely busy driver.
            if let Err(e) = ledger.assign_driver(order_id, driver_id) {
                let reason = match e {
                    LedgerError::AlreadyAssigned(_) => SkipReason::OrderAlreadyAssigned,
                    _ => SkipReason::OrderNotDeliverable,
                };
                warn!(%order_id, %driver_id, %reason, "skipping pair");
                summary.skipped.push(SkippedPair { order_id, driver_id, reason });
                continue;
            }

            let destination = self.random_destination();
            if let Err(e) = fleet.claim(driver_id, destination) {
                // Unwind the order side before skipping.  The order was
                // assigned a moment ago under this same lock, so the clear
                // cannot miss.
                if let Err(clear_err) = ledger.clear_driver(order_id) {
                    warn!(%order_id, error = %clear_err, "failed to unwind assignment");
                }
                warn!(%order_id, %driver_id, error = %e, "skipping pair: claim failed");
                summary.skipped.push(SkippedPair {
                    order_id,
                    driver_id,
                    reason: SkipReason::DriverNotAvailable,
                });
                continue;
            }

            summary.assigned += 1;
        }

        info!(
            assigned = summary.assigned,
            skipped = summary.skipped.len(),
            "dispatch cycle complete"
        );
        summary
    }

    // ── Internal ──────────────────────────────────────────────────────────

    async fn propose_with_timeout(
        &self,
        request: OptimizerRequest,
    ) -> Result<Vec<AssignmentPair>, OptimizerError> {
        let timeout = self.optimizer_timeout;
        match tokio::time::timeout(timeout, self.optimizer.propose(request)).await {
            Ok(result) => result,
            Err(_) => Err(OptimizerError::Timeout {
                elapsed_ms: timeout.as_millis() as u64,
            }),
        }
    }

    fn random_destination(&self) -> PlanePoint {
        let mut rng = self.waypoints.lock();
        PlanePoint::new(
            rng.gen_range(self.params.waypoint_min..=self.params.waypoint_max),
            rng.gen_range(self.params.waypoint_min..=self.params.waypoint_max),
        )
    }
}
