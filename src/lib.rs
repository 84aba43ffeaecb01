pub mod api;
pub mod config;
pub mod store;
pub mod vehicle;

pub use api::{fleet_service, HandlerError, Request, Response, Service};
pub use config::Config;
pub use store::{InMemoryVehicleStore, StoreError, VehicleStore};
pub use vehicle::{is_valid, validate, ValidationError, ValidationPolicy, VehicleEntry, VehicleRecord};
