//! Shared fixtures for the fleet API tests.

use fleetman::{api, InMemoryVehicleStore, Service};
use serde_json::{json, Value};

pub fn fleet() -> Service<InMemoryVehicleStore> {
    api::fleet_service(InMemoryVehicleStore::new())
}

pub fn vehicle(id: &str, name: &str, status: &str) -> Value {
    json!({ "id": id, "name": name, "status": status })
}
