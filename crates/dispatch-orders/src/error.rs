use dispatch_core::OrderId;
use thiserror::Error;

use crate::OrderStatus;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("order {0} not found")]
    NotFound(OrderId),

    #[error("order {id} already in ledger")]
    DuplicateId { id: OrderId },

    #[error("order {id}: cannot move {from} → {to} (not adjacent)")]
    InvalidTransition {
        id:   OrderId,
        from: OrderStatus,
        to:   OrderStatus,
    },

    #[error("order {0} already has a driver assigned")]
    AlreadyAssigned(OrderId),

    #[error("order {id} is {status}, not deliverable")]
    NotDeliverable { id: OrderId, status: OrderStatus },
}

pub type LedgerResult<T> = Result<T, LedgerError>;
