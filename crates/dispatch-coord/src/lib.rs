//! `dispatch-coord` — bridges the order ledger, the fleet registry, and the
//! external route optimizer.
//!
//! # One dispatch cycle
//!
//! ```text
//! ① Snapshot   — deliverable orders (oldest first) and idle drivers,
//!                each under its own short-lived lock.
//! ② Propose    — await the optimizer with NO locks held; ticks keep
//!                advancing busy drivers during this wait.
//! ③ Validate   — drop (and log) any pair referencing an id that was not
//!                in the request; the optimizer is not trusted.
//! ④ Apply      — pair-by-pair in the returned order: assign the order,
//!                then claim the driver.  If the claim fails the assignment
//!                is unwound, the pair is skipped, and the batch continues.
//! ⑤ Summarize  — the cycle never fails; it always returns a `CycleSummary`.
//! ```
//!
//! Batch-level faults (`AlreadyAssigned`, `NotAvailable`, optimizer failure
//! or timeout) are absorbed here; the next scheduled cycle re-attempts with
//! the still-pending orders.
//!
//! The return path lives here too: when a driver finishes its route the
//! runtime reports it through the [`RouteCompletion`] hook, and
//! [`DeliveryCompleter`] marks the carried order completed so the ledger
//! never points at an idle driver.

pub mod completion;
pub mod coordinator;
pub mod error;
pub mod optimizer;
pub mod shared;
pub mod summary;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use completion::{DeliveryCompleter, NoopCompletion, RouteCompletion};
pub use coordinator::DispatchCoordinator;
pub use error::{OptimizerError, OptimizerResult};
pub use optimizer::{
    AssignmentPair, DriverSummary, FifoOptimizer, Optimizer, OptimizerRequest, OrderSummary,
};
pub use shared::{SharedFleet, SharedLedger};
pub use summary::{CycleSummary, SkipReason, SkippedPair};
