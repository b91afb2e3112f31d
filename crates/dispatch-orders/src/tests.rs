//! Unit tests for dispatch-orders.

use dispatch_core::{DriverId, OrderId};

use crate::{LedgerError, Order, OrderLedger, OrderStatus};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn order(id: u32) -> Order {
    Order::intake(OrderId(id), format!("customer-{id}"), 1, 1_999, 1_700_000_000_000 + id as i64)
}

/// Ledger with `n` orders in `New` status, ids 0..n.
fn ledger_with(n: u32) -> OrderLedger {
    let mut ledger = OrderLedger::new();
    for i in 0..n {
        ledger.intake(order(i)).unwrap();
    }
    ledger
}

/// Advance an order to `Processing` (one legal step from `New`).
fn to_processing(ledger: &mut OrderLedger, id: u32) {
    ledger.advance_status(OrderId(id), OrderStatus::Processing).unwrap();
}

// ── Status machine ────────────────────────────────────────────────────────────

#[cfg(test)]
mod status {
    use super::*;

    #[test]
    fn adjacency_is_one_step_either_direction() {
        assert!(OrderStatus::New.is_adjacent(OrderStatus::Processing));
        assert!(OrderStatus::Processing.is_adjacent(OrderStatus::New));
        assert!(OrderStatus::Shipped.is_adjacent(OrderStatus::Completed));
        assert!(!OrderStatus::New.is_adjacent(OrderStatus::Shipped));
        assert!(!OrderStatus::New.is_adjacent(OrderStatus::New));
        assert!(!OrderStatus::Completed.is_adjacent(OrderStatus::New));
    }

    #[test]
    fn deliverable_statuses() {
        assert!(!OrderStatus::New.is_deliverable());
        assert!(OrderStatus::Processing.is_deliverable());
        assert!(OrderStatus::Shipped.is_deliverable());
        assert!(!OrderStatus::Completed.is_deliverable());
    }

    #[test]
    fn display_lowercase() {
        assert_eq!(OrderStatus::Processing.to_string(), "processing");
        assert_eq!(OrderStatus::Completed.to_string(), "completed");
    }
}

// ── Intake ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod intake {
    use super::*;

    #[test]
    fn new_orders_start_unassigned() {
        let ledger = ledger_with(3);
        assert_eq!(ledger.len(), 3);
        for o in ledger.orders() {
            assert_eq!(o.status, OrderStatus::New);
            assert!(o.assigned_driver.is_none());
        }
    }

    #[test]
    fn duplicate_id_rejected() {
        let mut ledger = ledger_with(1);
        let result = ledger.intake(order(0));
        assert!(matches!(result, Err(LedgerError::DuplicateId { .. })));
        assert_eq!(ledger.len(), 1);
    }
}

// ── Transitions ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod transitions {
    use super::*;

    #[test]
    fn forward_one_step_succeeds() {
        let mut ledger = ledger_with(1);
        ledger.advance_status(OrderId(0), OrderStatus::Processing).unwrap();
        ledger.advance_status(OrderId(0), OrderStatus::Shipped).unwrap();
        ledger.advance_status(OrderId(0), OrderStatus::Completed).unwrap();
        assert_eq!(ledger.get(OrderId(0)).unwrap().status, OrderStatus::Completed);
    }

    #[test]
    fn skip_ahead_rejected() {
        let mut ledger = ledger_with(1);
        let result = ledger.advance_status(OrderId(0), OrderStatus::Shipped);
        assert!(matches!(result, Err(LedgerError::InvalidTransition { .. })));
        assert_eq!(ledger.get(OrderId(0)).unwrap().status, OrderStatus::New);
    }

    #[test]
    fn rollback_one_step_allowed() {
        let mut ledger = ledger_with(1);
        to_processing(&mut ledger, 0);
        ledger.advance_status(OrderId(0), OrderStatus::Shipped).unwrap();
        ledger.advance_status(OrderId(0), OrderStatus::Processing).unwrap();
        assert_eq!(ledger.get(OrderId(0)).unwrap().status, OrderStatus::Processing);
    }

    #[test]
    fn rollback_preserves_assignment() {
        let mut ledger = ledger_with(1);
        to_processing(&mut ledger, 0);
        ledger.assign_driver(OrderId(0), DriverId(7)).unwrap();
        ledger.advance_status(OrderId(0), OrderStatus::Shipped).unwrap();
        ledger.advance_status(OrderId(0), OrderStatus::Processing).unwrap();
        assert_eq!(ledger.get(OrderId(0)).unwrap().assigned_driver, Some(DriverId(7)));
    }

    #[test]
    fn completion_releases_assignment() {
        let mut ledger = ledger_with(1);
        to_processing(&mut ledger, 0);
        ledger.assign_driver(OrderId(0), DriverId(3)).unwrap();
        ledger.advance_status(OrderId(0), OrderStatus::Shipped).unwrap();
        ledger.advance_status(OrderId(0), OrderStatus::Completed).unwrap();
        let o = ledger.get(OrderId(0)).unwrap();
        assert_eq!(o.status, OrderStatus::Completed);
        assert!(o.assigned_driver.is_none(), "completed order must hold no courier claim");
    }

    #[test]
    fn unknown_order_not_found() {
        let mut ledger = ledger_with(1);
        let result = ledger.advance_status(OrderId(99), OrderStatus::Processing);
        assert!(matches!(result, Err(LedgerError::NotFound(_))));
    }
}

// ── Assignment ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod assignment {
    use super::*;

    #[test]
    fn assign_then_clear() {
        let mut ledger = ledger_with(1);
        to_processing(&mut ledger, 0);
        ledger.assign_driver(OrderId(0), DriverId(1)).unwrap();
        assert_eq!(ledger.get(OrderId(0)).unwrap().assigned_driver, Some(DriverId(1)));
        ledger.clear_driver(OrderId(0)).unwrap();
        assert!(ledger.get(OrderId(0)).unwrap().assigned_driver.is_none());
    }

    #[test]
    fn double_assign_rejected() {
        let mut ledger = ledger_with(1);
        to_processing(&mut ledger, 0);
        ledger.assign_driver(OrderId(0), DriverId(1)).unwrap();
        let result = ledger.assign_driver(OrderId(0), DriverId(2));
        assert!(matches!(result, Err(LedgerError::AlreadyAssigned(_))));
        // Original assignment untouched.
        assert_eq!(ledger.get(OrderId(0)).unwrap().assigned_driver, Some(DriverId(1)));
    }

    #[test]
    fn assign_to_new_order_rejected() {
        let mut ledger = ledger_with(1);
        let result = ledger.assign_driver(OrderId(0), DriverId(1));
        assert!(matches!(result, Err(LedgerError::NotDeliverable { .. })));
    }

    #[test]
    fn assigned_to_finds_the_carrying_order() {
        let mut ledger = ledger_with(2);
        to_processing(&mut ledger, 0);
        to_processing(&mut ledger, 1);
        ledger.assign_driver(OrderId(1), DriverId(4)).unwrap();

        assert_eq!(ledger.assigned_to(DriverId(4)).map(|o| o.id), Some(OrderId(1)));
        assert!(ledger.assigned_to(DriverId(0)).is_none());

        // Completion clears the assignment, so the lookup goes empty.
        ledger.advance_status(OrderId(1), OrderStatus::Shipped).unwrap();
        ledger.advance_status(OrderId(1), OrderStatus::Completed).unwrap();
        assert!(ledger.assigned_to(DriverId(4)).is_none());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut ledger = ledger_with(1);
        ledger.clear_driver(OrderId(0)).unwrap();
        ledger.clear_driver(OrderId(0)).unwrap();
        assert!(ledger.get(OrderId(0)).unwrap().assigned_driver.is_none());
    }
}

// ── Deliverable query ─────────────────────────────────────────────────────────

#[cfg(test)]
mod deliverable {
    use super::*;

    #[test]
    fn only_processing_and_shipped_without_driver() {
        let mut ledger = ledger_with(4);
        // 0: New (not deliverable), 1: Processing, 2: Shipped, 3: Processing+driver.
        to_processing(&mut ledger, 1);
        to_processing(&mut ledger, 2);
        ledger.advance_status(OrderId(2), OrderStatus::Shipped).unwrap();
        to_processing(&mut ledger, 3);
        ledger.assign_driver(OrderId(3), DriverId(0)).unwrap();

        let ids: Vec<_> = ledger.list_deliverable().iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![OrderId(1), OrderId(2)]);
    }

    #[test]
    fn oldest_first_in_intake_order() {
        let mut ledger = OrderLedger::new();
        // Intake out of id order: fairness follows intake order, not id order.
        for id in [5u32, 2, 9] {
            ledger.intake(order(id)).unwrap();
            ledger.advance_status(OrderId(id), OrderStatus::Processing).unwrap();
        }
        let ids: Vec<_> = ledger.list_deliverable().iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![OrderId(5), OrderId(2), OrderId(9)]);
    }

    #[test]
    fn clearing_driver_restores_deliverability() {
        let mut ledger = ledger_with(1);
        to_processing(&mut ledger, 0);
        ledger.assign_driver(OrderId(0), DriverId(0)).unwrap();
        assert!(ledger.list_deliverable().is_empty());
        ledger.clear_driver(OrderId(0)).unwrap();
        assert_eq!(ledger.list_deliverable().len(), 1);
    }
}
