//! A morning at the depot: three couriers, six orders.
//!
//! Wires every layer together: intake fills the ledger, the tick scheduler
//! keeps couriers moving at 60 Hz, and a once-a-second dispatch cycle pairs
//! pending orders with whoever is idle (via the in-process FIFO optimizer).
//! When a courier arrives the route ends and the `DeliveryCompleter` marks
//! the order completed, freeing the courier for the next cycle.  The run
//! ends when every order is completed.
//!
//! Run with `RUST_LOG=debug` to watch individual arrivals.

use std::error::Error;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dispatch_coord::{
    DeliveryCompleter, DispatchCoordinator, FifoOptimizer, SharedFleet, SharedLedger,
};
use dispatch_core::{DispatchRng, DriverId, OrderId, PlanePoint, SimParams, TickClock};
use dispatch_fleet::{FleetRegistry, display_heading_deg};
use dispatch_orders::{LedgerResult, Order, OrderLedger, OrderStatus};
use dispatch_runtime::TickScheduler;
use dispatch_sim::{TerminateRoute, TickObserver};

/// Logs each arrival as it happens on the tick task.
struct ArrivalLogger;

impl TickObserver for ArrivalLogger {
    fn on_arrival(&mut self, driver: DriverId, at: PlanePoint) {
        tracing::debug!(%driver, x = at.x, y = at.y, "courier arrived");
    }
}

fn seed_fleet() -> SharedFleet {
    let mut fleet = FleetRegistry::new();
    for (name, x, y) in [("ana", 20.0, 20.0), ("ben", 50.0, 50.0), ("chi", 80.0, 80.0)] {
        fleet.onboard(name, PlanePoint::new(x, y));
    }
    Arc::new(Mutex::new(fleet))
}

fn seed_ledger(now_ms: i64) -> LedgerResult<SharedLedger> {
    let mut ledger = OrderLedger::new();
    let customers = ["acme", "globex", "initech", "umbrella", "stark", "wayne"];
    for (i, customer) in customers.iter().enumerate() {
        let id = OrderId(i as u32);
        ledger.intake(Order::intake(id, *customer, 1 + i as u32, 2_500, now_ms + i as i64))?;
        ledger.advance_status(id, OrderStatus::Processing)?;
    }
    Ok(Arc::new(Mutex::new(ledger)))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Demo kinematics: couriers cover a plane unit per tick so a full run
    // fits in a few wall seconds.  Production uses the defaults.
    let params = SimParams {
        speed_per_tick: 1.0,
        arrival_epsilon: 1.5,
        ..SimParams::default()
    }
    .validated()?;

    let now_ms = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis() as i64;
    let fleet = seed_fleet();
    let ledger = seed_ledger(now_ms)?;

    let mut scheduler = TickScheduler::new(fleet.clone(), params.clone(), TickClock::default());
    scheduler.start(
        TerminateRoute,
        ArrivalLogger,
        DeliveryCompleter::new(ledger.clone()),
    )?;

    let coordinator = DispatchCoordinator::new(
        ledger.clone(),
        fleet.clone(),
        Arc::new(FifoOptimizer),
        params,
        DispatchRng::new(0xC0FFEE),
    );

    info!("depot open: 3 couriers, 6 orders");
    let mut cycle_timer = tokio::time::interval(Duration::from_secs(1));
    for _ in 0..120 {
        cycle_timer.tick().await;

        let summary = coordinator.run_dispatch_cycle().await;
        if summary.proposed() > 0 {
            info!(%summary, "dispatch cycle");
        }

        let all_done = ledger
            .lock()
            .orders()
            .all(|o| o.status == OrderStatus::Completed);
        if all_done {
            break;
        }
    }

    let clock = scheduler.stop().await?;
    info!(%clock, "depot closed");

    let ledger = ledger.lock();
    let fleet = fleet.lock();
    println!("-- orders --");
    for order in ledger.orders() {
        println!("  {}  {:<10} {}", order.id, order.customer, order.status);
    }
    println!("-- fleet --");
    for driver in fleet.drivers() {
        println!(
            "  {}  {:<6} {} at ({:.1}, {:.1}) glyph {:.0}°",
            driver.id,
            driver.name,
            driver.status,
            driver.position.x,
            driver.position.y,
            display_heading_deg(driver.heading_deg),
        );
    }
    Ok(())
}
