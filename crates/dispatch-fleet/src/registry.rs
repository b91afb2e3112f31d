//! The `FleetRegistry` — owned driver collection behind accessor methods.

use dispatch_core::{DriverId, PlanePoint};

use crate::{Driver, DriverStatus, FleetError, FleetResult};

/// All drivers on the roster, indexed directly by `DriverId`.
///
/// IDs are assigned densely at onboarding (`DriverId` == slot index), so a
/// plain `Vec` is the whole storage — no id map needed.  Drivers are never
/// removed; an off-roster driver is `Offline`.
#[derive(Default)]
pub struct FleetRegistry {
    drivers: Vec<Driver>,
}

impl FleetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Roster ────────────────────────────────────────────────────────────

    /// Onboard a new driver at `position` (clamped onto the plane), idle.
    pub fn onboard(&mut self, name: impl Into<String>, position: PlanePoint) -> DriverId {
        let id = DriverId(self.drivers.len() as u32);
        self.drivers.push(Driver {
            id,
            name: name.into(),
            status: DriverStatus::Idle,
            position: position.clamped(),
            destination: None,
            heading_deg: 0.0,
            active_orders: 0,
        });
        id
    }

    /// Take a driver off dispatch rotation.
    ///
    /// # Errors
    ///
    /// `NotAvailable` if the driver is busy — finish or release the route
    /// first.  `NotFound` for an unknown id.
    pub fn set_offline(&mut self, id: DriverId) -> FleetResult<()> {
        let driver = self.get_mut(id)?;
        if driver.status == DriverStatus::Busy {
            return Err(FleetError::NotAvailable { id, status: driver.status });
        }
        driver.status = DriverStatus::Offline;
        Ok(())
    }

    /// Return an offline driver to rotation.  No-op on an idle driver.
    ///
    /// # Errors
    ///
    /// `NotAvailable` if the driver is busy; `NotFound` for an unknown id.
    pub fn set_idle(&mut self, id: DriverId) -> FleetResult<()> {
        let driver = self.get_mut(id)?;
        if driver.status == DriverStatus::Busy {
            return Err(FleetError::NotAvailable { id, status: driver.status });
        }
        driver.status = DriverStatus::Idle;
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn get(&self, id: DriverId) -> Option<&Driver> {
        self.drivers.get(id.index())
    }

    /// All drivers in onboarding order — read-only snapshot for presentation.
    pub fn drivers(&self) -> impl Iterator<Item = &Driver> {
        self.drivers.iter()
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    /// All idle drivers, in onboarding order.
    pub fn list_available(&self) -> Vec<&Driver> {
        self.drivers.iter().filter(|d| d.is_available()).collect()
    }

    /// IDs of all busy drivers.
    pub fn busy_ids(&self) -> Vec<DriverId> {
        self.drivers.iter().filter(|d| d.is_busy()).map(|d| d.id).collect()
    }

    // ── Dispatch transitions ──────────────────────────────────────────────

    /// Bind an idle driver to `destination`, making it busy.
    ///
    /// Sets the initial heading toward the destination and increments
    /// `active_orders`.  The destination is clamped onto the plane.
    ///
    /// # Errors
    ///
    /// `NotAvailable` unless the driver is idle; `NotFound` for an unknown id.
    pub fn claim(&mut self, id: DriverId, destination: PlanePoint) -> FleetResult<()> {
        let driver = self.get_mut(id)?;
        if driver.status != DriverStatus::Idle {
            return Err(FleetError::NotAvailable { id, status: driver.status });
        }
        let destination = destination.clamped();
        driver.status = DriverStatus::Busy;
        driver.heading_deg = driver.position.heading_deg(destination);
        driver.destination = Some(destination);
        driver.active_orders += 1;
        Ok(())
    }

    /// Return a driver to idle: clears destination and heading, decrements
    /// `active_orders` (never below zero).
    ///
    /// Releasing an already-idle driver is a no-op — callers may release
    /// defensively without checking status first.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id.
    pub fn release(&mut self, id: DriverId) -> FleetResult<()> {
        let driver = self.get_mut(id)?;
        if driver.status != DriverStatus::Busy {
            return Ok(());
        }
        driver.status = DriverStatus::Idle;
        driver.destination = None;
        driver.heading_deg = 0.0;
        driver.active_orders = driver.active_orders.saturating_sub(1);
        Ok(())
    }

    /// Update the destination of a busy driver without changing status —
    /// the "next stop" path used by the simulator after an arrival.
    ///
    /// # Errors
    ///
    /// `NotAvailable` unless the driver is busy; `NotFound` for an unknown id.
    pub fn reroute(&mut self, id: DriverId, destination: PlanePoint) -> FleetResult<()> {
        let driver = self.get_mut(id)?;
        if driver.status != DriverStatus::Busy {
            return Err(FleetError::NotAvailable { id, status: driver.status });
        }
        let destination = destination.clamped();
        driver.heading_deg = driver.position.heading_deg(destination);
        driver.destination = Some(destination);
        Ok(())
    }

    // ── Simulator access ──────────────────────────────────────────────────

    /// Mutable iteration over busy drivers, for the per-tick kinematic step.
    ///
    /// The simulator only writes `position` and `heading_deg`; status and
    /// destination changes must go through `claim`/`release`/`reroute` so the
    /// Busy ⇔ destination invariant holds.
    pub fn busy_drivers_mut(&mut self) -> impl Iterator<Item = &mut Driver> {
        self.drivers.iter_mut().filter(|d| d.is_busy())
    }

    // ── Internal ──────────────────────────────────────────────────────────

    fn get_mut(&mut self, id: DriverId) -> FleetResult<&mut Driver> {
        self.drivers.get_mut(id.index()).ok_or(FleetError::NotFound(id))
    }
}
