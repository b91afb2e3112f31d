//! The `SeekEngine` — advances every busy driver one seek step per tick.

use dispatch_core::{DriverId, PlanePoint, SimParams, Tick};
use dispatch_fleet::FleetRegistry;

use crate::{NextWaypointPolicy, SimResult, TickObserver};

/// What one tick did, for observability and tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Drivers that took a movement step this tick.
    pub moved: usize,
    /// Drivers that reached their destination this tick.
    pub arrived: Vec<DriverId>,
    /// Arrivals the policy turned into a release — these drivers finished
    /// their route and are idle again.  Callers forward them to whatever
    /// reports completion (see the runtime's completion hook).
    pub released: Vec<DriverId>,
    /// Arrivals the policy turned into a new destination.
    pub rerouted: usize,
}

/// Stateless per-tick stepper over a [`FleetRegistry`].
///
/// Holds only the validated [`SimParams`]; all mutable state lives in the
/// registry, which makes a tick a single critical section for callers that
/// share the registry behind a lock.
pub struct SeekEngine {
    params: SimParams,
}

impl SeekEngine {
    pub fn new(params: SimParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    /// Advance every busy driver by one step.
    ///
    /// Arrivals are collected during the movement scan and resolved
    /// afterwards through `policy` — reroute for `Some`, release for `None` —
    /// so the scan itself never changes who is busy.  Driver order within the
    /// tick is insignificant: no driver's update depends on another's.
    pub fn tick<P, O>(
        &self,
        fleet:    &mut FleetRegistry,
        policy:   &mut P,
        now:      Tick,
        observer: &mut O,
    ) -> SimResult<TickReport>
    where
        P: NextWaypointPolicy + ?Sized,
        O: TickObserver + ?Sized,
    {
        let mut report = TickReport::default();

        // ── Phase 1: movement scan ────────────────────────────────────────
        for driver in fleet.busy_drivers_mut() {
            // Busy ⇔ destination is a registry invariant; a busy driver
            // without one would be a registry bug, so skip defensively.
            let Some(dest) = driver.destination else { continue };

            if driver.position.distance(dest) < self.params.arrival_epsilon {
                // Arrived: snap exactly onto the destination (no asymptotic
                // creep) and defer the what-next decision to phase 2.
                driver.position = dest;
                report.arrived.push(driver.id);
            } else {
                let (dx, dy) = driver
                    .position
                    .direction_to(dest)
                    .unwrap_or((0.0, 0.0)); // unreachable: distance >= epsilon > 0
                driver.position = PlanePoint::new(
                    driver.position.x + self.params.speed_per_tick * dx,
                    driver.position.y + self.params.speed_per_tick * dy,
                );
                driver.heading_deg = driver.position.heading_deg(dest);
                report.moved += 1;
            }
        }

        // ── Phase 2: resolve arrivals ─────────────────────────────────────
        for &id in &report.arrived {
            let Some(driver) = fleet.get(id) else { continue };
            observer.on_arrival(id, driver.position);

            match policy.next_waypoint(driver) {
                Some(next) => {
                    fleet.reroute(id, next)?;
                    report.rerouted += 1;
                }
                None => {
                    fleet.release(id)?;
                    report.released.push(id);
                }
            }
        }

        observer.on_tick_end(now, &report);
        Ok(report)
    }
}
