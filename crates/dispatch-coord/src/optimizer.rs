//! The optimizer contract — the only wire-level boundary in the system.
//!
//! The optimizer is an external decision service: given pending orders and
//! the available roster it returns proposed order → driver pairings.  Its
//! algorithm is out of scope; only this request/response contract is ours.
//! All response content is validated by the coordinator before use.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use dispatch_core::{DriverId, OrderId, PlanePoint};

use crate::OptimizerResult;

// ── Wire types ────────────────────────────────────────────────────────────────

/// One deliverable order, as the optimizer sees it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrderSummary {
    pub id: OrderId,
    pub customer: String,
    pub created_unix_ms: i64,
}

/// One available driver, as the optimizer sees it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DriverSummary {
    pub id: DriverId,
    pub name: String,
    pub position: PlanePoint,
}

/// The full input for one dispatch cycle.
///
/// `orders` is oldest-first (the ledger's fairness order); `drivers` is in
/// roster order.  The optimizer may rely on neither — it returns explicit
/// pairs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OptimizerRequest {
    pub orders: Vec<OrderSummary>,
    pub drivers: Vec<DriverSummary>,
}

/// One proposed pairing.  Ephemeral — consumed by the coordinator within the
/// cycle that requested it and never stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentPair {
    pub order_id: OrderId,
    pub driver_id: DriverId,
}

// ── Optimizer trait ───────────────────────────────────────────────────────────

/// The external pairing service.
///
/// Implementations may return zero, some, or all possible pairs; they must
/// not invent ids absent from the request (the coordinator drops such pairs
/// defensively, so a buggy optimizer degrades to fewer assignments, never to
/// corruption).  `propose` is the system's only suspension point besides the
/// tick timer.
#[async_trait]
pub trait Optimizer: Send + Sync {
    async fn propose(&self, request: OptimizerRequest) -> OptimizerResult<Vec<AssignmentPair>>;
}

// ── FifoOptimizer ─────────────────────────────────────────────────────────────

/// In-process reference optimizer: zips oldest orders with drivers in roster
/// order, one order per driver.
///
/// Exists for demos and tests — the production optimizer is an external
/// service behind the same trait.
pub struct FifoOptimizer;

#[async_trait]
impl Optimizer for FifoOptimizer {
    async fn propose(&self, request: OptimizerRequest) -> OptimizerResult<Vec<AssignmentPair>> {
        Ok(request
            .orders
            .iter()
            .zip(&request.drivers)
            .map(|(o, d)| AssignmentPair {
                order_id: o.id,
                driver_id: d.id,
            })
            .collect())
    }
}
