//! The `Order` record and its fulfillment status machine.

use std::fmt;

use dispatch_core::{DriverId, OrderId};

// ── OrderStatus ───────────────────────────────────────────────────────────────

/// Fulfillment status of an order.
///
/// The sequence is linear: `New → Processing → Shipped → Completed`.
/// Transitions move exactly one step, forward or backward (operators may roll
/// back one step to correct a mistake).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrderStatus {
    New,
    Processing,
    Shipped,
    Completed,
}

impl OrderStatus {
    /// Position in the linear status sequence.
    #[inline]
    pub fn step(self) -> u8 {
        match self {
            OrderStatus::New        => 0,
            OrderStatus::Processing => 1,
            OrderStatus::Shipped    => 2,
            OrderStatus::Completed  => 3,
        }
    }

    /// `true` if `other` is exactly one step away in either direction.
    #[inline]
    pub fn is_adjacent(self, other: OrderStatus) -> bool {
        self.step().abs_diff(other.step()) == 1
    }

    /// `true` for the statuses in which an order may be carried by a driver.
    #[inline]
    pub fn is_deliverable(self) -> bool {
        matches!(self, OrderStatus::Processing | OrderStatus::Shipped)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::New        => "new",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped    => "shipped",
            OrderStatus::Completed  => "completed",
        };
        f.write_str(s)
    }
}

// ── Order ─────────────────────────────────────────────────────────────────────

/// A single customer order.
///
/// Orders arrive from the intake flow already populated and in `New` status —
/// the ledger never originates them.  `id`, `customer`, `item_count`,
/// `total_cents`, and `created_unix_ms` are immutable after intake; only
/// `status` and `assigned_driver` change, and only through
/// [`OrderLedger`][crate::OrderLedger] methods.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    pub id: OrderId,
    pub customer: String,
    pub item_count: u32,
    pub total_cents: u64,
    /// Intake timestamp, Unix milliseconds.
    pub created_unix_ms: i64,
    pub status: OrderStatus,
    /// Weak reference — lookup only, no ownership.  Set and cleared only by
    /// the dispatch coordinator (and cleared on completion).
    pub assigned_driver: Option<DriverId>,
}

impl Order {
    /// Construct a freshly intaken order in `New` status with no assignment.
    pub fn intake(
        id: OrderId,
        customer: impl Into<String>,
        item_count: u32,
        total_cents: u64,
        created_unix_ms: i64,
    ) -> Self {
        Self {
            id,
            customer: customer.into(),
            item_count,
            total_cents,
            created_unix_ms,
            status: OrderStatus::New,
            assigned_driver: None,
        }
    }

    /// Deliverable = awaiting a courier: `Processing`/`Shipped`, no driver.
    #[inline]
    pub fn is_deliverable(&self) -> bool {
        self.status.is_deliverable() && self.assigned_driver.is_none()
    }
}
