//! `dispatch-fleet` — the driver roster and its operational state machine.
//!
//! Drivers are onboarded once and persist for the process lifetime, cycling
//! between `Idle` and `Busy` as the dispatch coordinator claims them and the
//! simulator completes their routes.
//!
//! # Invariants
//!
//! - `destination` is `Some` iff the driver is `Busy`.
//! - `heading_deg` is only semantically valid while moving (recomputed every
//!   tick by the simulator; zeroed on release).
//! - `active_orders` never underflows; [`release`][FleetRegistry::release] on
//!   an idle driver is a documented no-op.

pub mod driver;
pub mod error;
pub mod registry;
pub mod snapshot;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use driver::{Driver, DriverStatus};
pub use error::{FleetError, FleetResult};
pub use registry::FleetRegistry;
pub use snapshot::{GLYPH_HEADING_OFFSET_DEG, display_heading_deg};
