use dispatch_fleet::FleetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("fleet error during tick: {0}")]
    Fleet(#[from] FleetError),
}

pub type SimResult<T> = Result<T, SimError>;
