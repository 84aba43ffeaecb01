//! Collection store: the in-memory, insertion-ordered holder of vehicles.

mod error;
mod in_memory;
pub mod notify;
mod page;
#[allow(clippy::module_inception)]
mod store;

pub use error::StoreError;
pub use in_memory::InMemoryVehicleStore;
pub use page::{Listing, PageError, PageRequest, DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT, MAX_PAGE};
pub use store::{batch_entries, VehicleStore};
