//! The `TickScheduler` — one spawned task, one tick per interval firing.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use dispatch_core::{SimParams, TickClock};
use dispatch_coord::RouteCompletion;
use dispatch_sim::{NextWaypointPolicy, SeekEngine, TickObserver};

use crate::{RuntimeError, RuntimeResult, SharedFleet};

struct Running {
    cancel: CancellationToken,
    handle: JoinHandle<TickClock>,
}

/// Drives [`SeekEngine::tick`] on a fixed cadence.
///
/// The scheduler holds the clock while stopped and lends it to the spawned
/// task while running; [`stop`][Self::stop] reclaims it, so tick numbering is
/// continuous across stop/start pairs.  One scheduler, one task: a second
/// `start` while running is refused rather than stacked.
pub struct TickScheduler {
    fleet: SharedFleet,
    params: SimParams,
    clock: TickClock,
    running: Option<Running>,
}

impl TickScheduler {
    pub fn new(fleet: SharedFleet, params: SimParams, clock: TickClock) -> Self {
        Self {
            fleet,
            params,
            clock,
            running: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// The clock as of the last stop (or construction).  While the task is
    /// running the live tick is ahead of this value.
    pub fn clock(&self) -> &TickClock {
        &self.clock
    }

    /// Spawn the tick task.
    ///
    /// The task owns `policy`, `observer`, and `completion` for its lifetime.
    /// Each firing advances the clock, takes the fleet lock, and runs one
    /// synchronous engine tick; missed firings are delayed, not bunched, so a
    /// stalled executor never produces a burst of catch-up ticks.  Drivers
    /// the tick released are handed to `completion` after the fleet lock is
    /// dropped, so a ledger-aware hook can lock the ledger without breaking
    /// the ledger-then-fleet ordering.
    ///
    /// # Errors
    ///
    /// `AlreadyRunning` if the task is active.
    pub fn start<P, O, C>(
        &mut self,
        mut policy: P,
        mut observer: O,
        mut completion: C,
    ) -> RuntimeResult<()>
    where
        P: NextWaypointPolicy + 'static,
        O: TickObserver + 'static,
        C: RouteCompletion + 'static,
    {
        if self.running.is_some() {
            return Err(RuntimeError::AlreadyRunning);
        }

        let fleet = Arc::clone(&self.fleet);
        let engine = SeekEngine::new(self.params.clone());
        let mut clock = self.clock.clone();
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(clock.interval());
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first firing is immediate; consume it so tick 1 lands one
            // full interval after start.
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = interval.tick() => {
                        clock.advance();
                        let now = clock.current_tick;
                        let result = {
                            let mut fleet = fleet.lock();
                            engine.tick(&mut fleet, &mut policy, now, &mut observer)
                        };
                        match result {
                            Ok(report) => {
                                if !report.arrived.is_empty() {
                                    debug!(
                                        tick = %now,
                                        arrived = report.arrived.len(),
                                        released = report.released.len(),
                                        rerouted = report.rerouted,
                                        "arrivals resolved"
                                    );
                                }
                                // Fleet lock is dropped; report finished routes.
                                for &id in &report.released {
                                    completion.on_route_complete(id);
                                }
                            }
                            Err(e) => warn!(tick = %now, error = %e, "tick failed"),
                        }
                    }
                }
            }
            clock
        });

        self.running = Some(Running { cancel, handle });
        Ok(())
    }

    /// Cancel the tick task, wait for it to finish its current tick, and
    /// reclaim the clock.  Returns the clock as of shutdown.
    ///
    /// # Errors
    ///
    /// `NotRunning` if there is no task; `TickTask` if the task panicked.
    pub async fn stop(&mut self) -> RuntimeResult<TickClock> {
        let Running { cancel, handle } = self.running.take().ok_or(RuntimeError::NotRunning)?;
        cancel.cancel();
        self.clock = handle.await?;
        debug!(clock = %self.clock, "tick task stopped");
        Ok(self.clock.clone())
    }
}
