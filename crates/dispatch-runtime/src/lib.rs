//! `dispatch-runtime` — owns the periodic tick task.
//!
//! The [`TickScheduler`] spawns one Tokio task that fires on the
//! [`TickClock`][dispatch_core::TickClock] cadence and runs one
//! [`SeekEngine`][dispatch_sim::SeekEngine] tick per firing, locking the
//! shared fleet only for the duration of the synchronous step.  Shutdown is
//! cooperative: `stop` cancels the task at a tick boundary and hands back the
//! clock, so a later `start` resumes the tick count instead of restarting it.
//!
//! Dispatch cycles are NOT scheduled here.  The coordinator awaits an
//! external service and runs on its own trigger (operator command or a
//! caller-owned timer); this crate's single task keeps motion smooth no
//! matter how slow that service is.
//!
//! The tick task does carry the return path: drivers released by a tick are
//! handed to a [`RouteCompletion`] hook once the fleet lock is dropped.
//! Pass [`DeliveryCompleter`][dispatch_coord::DeliveryCompleter] to close
//! the loop with the order ledger, or [`NoopCompletion`] to run motion-only.

pub mod error;
pub mod scheduler;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use dispatch_coord::{NoopCompletion, RouteCompletion, SharedFleet, SharedLedger};
pub use error::{RuntimeError, RuntimeResult};
pub use scheduler::TickScheduler;
