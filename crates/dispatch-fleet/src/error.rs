use dispatch_core::DriverId;
use thiserror::Error;

use crate::DriverStatus;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("driver {0} not found")]
    NotFound(DriverId),

    #[error("driver {id} is {status}, not available for this operation")]
    NotAvailable { id: DriverId, status: DriverStatus },
}

pub type FleetResult<T> = Result<T, FleetError>;
