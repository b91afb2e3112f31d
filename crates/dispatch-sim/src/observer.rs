//! Tick observer trait for progress reporting and data collection.

use dispatch_core::{DriverId, PlanePoint, Tick};

use crate::TickReport;

/// Callbacks invoked by [`SeekEngine::tick`][crate::SeekEngine::tick].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — arrival printer
///
/// ```rust,ignore
/// struct ArrivalPrinter;
///
/// impl TickObserver for ArrivalPrinter {
///     fn on_arrival(&mut self, driver: DriverId, at: PlanePoint) {
///         println!("{driver} arrived at {at}");
///     }
/// }
/// ```
pub trait TickObserver: Send {
    /// Called once per arrival, after the snap but before the policy decides
    /// what happens next.
    fn on_arrival(&mut self, _driver: DriverId, _at: PlanePoint) {}

    /// Called at the end of each tick with the full report.
    fn on_tick_end(&mut self, _tick: Tick, _report: &TickReport) {}
}

/// A [`TickObserver`] that does nothing.  Use when you need to call `tick`
/// but don't want callbacks.
pub struct NoopObserver;

impl TickObserver for NoopObserver {}
