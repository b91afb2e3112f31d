use thiserror::Error;

/// Failure of the external optimizer call.
///
/// Never fatal to the process: the coordinator converts it into a
/// zero-assignment cycle and the next cycle retries with fresh inputs.
#[derive(Debug, Error)]
pub enum OptimizerError {
    #[error("optimizer unavailable: {0}")]
    Unavailable(String),

    #[error("optimizer timed out after {elapsed_ms} ms")]
    Timeout { elapsed_ms: u64 },
}

pub type OptimizerResult<T> = Result<T, OptimizerError>;
