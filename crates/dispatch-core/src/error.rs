//! Base error type.
//!
//! Sub-crates define their own error enums (`LedgerError`, `FleetError`, …)
//! and either convert into these variants via `From` impls or stay separate.
//! Both patterns are acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// Errors raised by `dispatch-core` itself.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid parameters: {0}")]
    Params(String),
}

/// Shorthand result type for `dispatch-core`.
pub type CoreResult<T> = Result<T, CoreError>;
