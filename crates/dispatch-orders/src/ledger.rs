//! The `OrderLedger` — owned order collection behind accessor methods.

use rustc_hash::FxHashMap;

use dispatch_core::{DriverId, OrderId};

use crate::{LedgerError, LedgerResult, Order, OrderStatus};

/// All orders known to the pipeline, in intake order.
///
/// Storage is an insertion-ordered `Vec` plus an `OrderId → slot` index.
/// Intake order doubles as the fairness order for
/// [`list_deliverable`][Self::list_deliverable] (oldest first), so no query
/// ever sorts.  Orders are never removed — the reference system is
/// process-lifetime, and completed orders stay visible to the presentation
/// layer.
#[derive(Default)]
pub struct OrderLedger {
    orders: Vec<Order>,
    index:  FxHashMap<OrderId, usize>,
}

impl OrderLedger {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Intake ────────────────────────────────────────────────────────────

    /// Accept an order from the upstream intake flow.
    ///
    /// # Errors
    ///
    /// `DuplicateId` if an order with the same id is already ledgered.
    pub fn intake(&mut self, order: Order) -> LedgerResult<()> {
        if self.index.contains_key(&order.id) {
            return Err(LedgerError::DuplicateId { id: order.id });
        }
        self.index.insert(order.id, self.orders.len());
        self.orders.push(order);
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.index.get(&id).map(|&slot| &self.orders[slot])
    }

    /// All orders in intake order — read-only snapshot for presentation.
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// All deliverable orders (`Processing`/`Shipped`, no driver), oldest
    /// first.  Intake order is creation order, so no sort is needed.
    pub fn list_deliverable(&self) -> Vec<&Order> {
        self.orders.iter().filter(|o| o.is_deliverable()).collect()
    }

    /// The order currently assigned to `driver`, if any.  A driver carries
    /// at most one order at a time, and completed orders hold no assignment,
    /// so the first match is the only match.
    pub fn assigned_to(&self, driver: DriverId) -> Option<&Order> {
        self.orders.iter().find(|o| o.assigned_driver == Some(driver))
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Move an order to `new_status`.
    ///
    /// Only adjacent moves are legal: one step forward, or one step back
    /// (operator rollback).  Completing an order releases its courier claim —
    /// the assignment flag is cleared so a completed order never points at a
    /// driver.  Rollback never touches the assignment flag.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id; `InvalidTransition` for a non-adjacent
    /// move (including `new_status == current`).
    pub fn advance_status(&mut self, id: OrderId, new_status: OrderStatus) -> LedgerResult<()> {
        let order = self.get_mut(id)?;
        if !order.status.is_adjacent(new_status) {
            return Err(LedgerError::InvalidTransition {
                id,
                from: order.status,
                to: new_status,
            });
        }
        order.status = new_status;
        if new_status == OrderStatus::Completed {
            order.assigned_driver = None;
        }
        Ok(())
    }

    /// Attach a driver to an order.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id; `AlreadyAssigned` if a driver is already
    /// attached (clear first); `NotDeliverable` if the order is `New` or
    /// `Completed` — an assigned order must always be `Processing`/`Shipped`.
    pub fn assign_driver(&mut self, id: OrderId, driver: DriverId) -> LedgerResult<()> {
        let order = self.get_mut(id)?;
        if order.assigned_driver.is_some() {
            return Err(LedgerError::AlreadyAssigned(id));
        }
        if !order.status.is_deliverable() {
            return Err(LedgerError::NotDeliverable {
                id,
                status: order.status,
            });
        }
        order.assigned_driver = Some(driver);
        Ok(())
    }

    /// Detach any driver from an order.  Always permitted; idempotent.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id.
    pub fn clear_driver(&mut self, id: OrderId) -> LedgerResult<()> {
        self.get_mut(id)?.assigned_driver = None;
        Ok(())
    }

    // ── Internal ──────────────────────────────────────────────────────────

    fn get_mut(&mut self, id: OrderId) -> LedgerResult<&mut Order> {
        match self.index.get(&id) {
            Some(&slot) => Ok(&mut self.orders[slot]),
            None => Err(LedgerError::NotFound(id)),
        }
    }
}
