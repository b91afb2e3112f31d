use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("tick task is already running")]
    AlreadyRunning,

    #[error("tick task is not running")]
    NotRunning,

    #[error("tick task aborted: {0}")]
    TickTask(#[from] tokio::task::JoinError),
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;
