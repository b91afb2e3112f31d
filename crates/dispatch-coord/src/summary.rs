//! The per-cycle result summary.

use std::fmt;

use dispatch_core::{DriverId, OrderId};

/// Why a proposed pair was not applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Pair referenced an order id that was not in the request.
    UnknownOrder,
    /// Pair referenced a driver id that was not in the request.
    UnknownDriver,
    /// The order picked up a driver earlier in this batch (double-booked order).
    OrderAlreadyAssigned,
    /// The order left `Processing`/`Shipped` between snapshot and apply.
    OrderNotDeliverable,
    /// The driver was no longer idle — typically double-booked earlier in
    /// the same batch.  The order-side assignment was unwound.
    DriverNotAvailable,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkipReason::UnknownOrder         => "unknown order id",
            SkipReason::UnknownDriver        => "unknown driver id",
            SkipReason::OrderAlreadyAssigned => "order already assigned",
            SkipReason::OrderNotDeliverable  => "order no longer deliverable",
            SkipReason::DriverNotAvailable   => "driver not available",
        };
        f.write_str(s)
    }
}

/// A pair the cycle skipped, with the reason.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SkippedPair {
    pub order_id: OrderId,
    pub driver_id: DriverId,
    pub reason: SkipReason,
}

/// What one dispatch cycle accomplished.
///
/// `run_dispatch_cycle` never fails; a cycle that could not assign anything
/// reports `assigned == 0` here and the caller decides whether to alert.
#[derive(Debug, Default)]
pub struct CycleSummary {
    /// Pairs applied: order assigned AND driver claimed.
    pub assigned: usize,
    /// Pairs proposed but not applied.
    pub skipped: Vec<SkippedPair>,
    /// Set when the optimizer failed or timed out (zero assignments, retry
    /// on the next cycle).
    pub optimizer_error: Option<String>,
}

impl CycleSummary {
    /// Summary for a cycle that found no deliverable orders and therefore
    /// never called the optimizer.
    pub fn no_pending() -> Self {
        Self::default()
    }

    pub fn proposed(&self) -> usize {
        self.assigned + self.skipped.len()
    }
}

impl fmt::Display for CycleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.optimizer_error {
            Some(e) => write!(f, "0 assigned, retry pending ({e})"),
            None => write!(f, "{} assigned, {} skipped", self.assigned, self.skipped.len()),
        }
    }
}
