//! `dispatch-orders` — the order ledger.
//!
//! Holds every order known to the fulfillment pipeline together with its
//! status and (optional) courier assignment.  Pure data plus transition
//! rules: nothing here moves a driver or calls the optimizer.
//!
//! # Invariants
//!
//! - `status` advances one step at a time through
//!   `New → Processing → Shipped → Completed`; a manual one-step rollback is
//!   always allowed.
//! - An order may hold a driver assignment only while `Processing` or
//!   `Shipped`.  Completing an order releases its assignment.
//! - An order is *deliverable* iff it is `Processing`/`Shipped` with no
//!   driver assigned.

pub mod error;
pub mod ledger;
pub mod order;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{LedgerError, LedgerResult};
pub use ledger::OrderLedger;
pub use order::{Order, OrderStatus};
