use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fleetman::{api, Config, InMemoryVehicleStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let filter = EnvFilter::try_new(&config.log).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let store = InMemoryVehicleStore::new();
    #[cfg(feature = "emitter")]
    {
        use fleetman::store::notify;

        store.on(notify::VEHICLE_STORED, |payload| {
            tracing::debug!(target: "fleetman::events", %payload, "vehicle stored");
        });
        store.on(notify::VEHICLES_BATCH_STORED, |payload| {
            tracing::debug!(target: "fleetman::events", %payload, "batch stored");
        });
    }

    let service = Arc::new(api::fleet_service(store).with_policy(config.policy()));
    tracing::info!(
        target: "fleetman",
        version = env!("CARGO_PKG_VERSION"),
        strict_ids = config.strict_ids,
        "starting fleet management API"
    );

    api::serve(service, &config.addr()).await?;
    Ok(())
}
