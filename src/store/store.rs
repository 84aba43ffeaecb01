//! VehicleStore - the collection store contract.

use serde_json::Value;

use super::{Listing, PageRequest, StoreError};
use crate::vehicle::{VehicleEntry, VehicleRecord};

/// Ordered, id-indexed storage for vehicles.
///
/// Ids are unique: writing an id that is already stored replaces that entry
/// in place and keeps its position. Entries without an id are appended and
/// cannot be addressed afterwards.
pub trait VehicleStore: Send + Sync {
    /// Store a validated record. Returns the record as stored.
    fn insert(&self, record: VehicleRecord) -> Result<VehicleRecord, StoreError>;

    /// Store every entry as-is, without validation. Returns how many were written.
    fn batch_insert(&self, entries: Vec<VehicleEntry>) -> Result<usize, StoreError>;

    /// Overwrite name and status of the entry with `id`, creating it if unknown.
    /// `None` clears the field.
    fn update(
        &self,
        id: &str,
        name: Option<String>,
        status: Option<String>,
    ) -> Result<VehicleEntry, StoreError>;

    /// One page of entries in insertion order.
    fn list(&self, page: PageRequest) -> Result<Listing, StoreError>;

    /// Entries whose name contains `query` (case-sensitive). Entries without a
    /// name never match.
    fn search(&self, query: &str) -> Result<Vec<VehicleEntry>, StoreError>;

    /// Look up an entry by id.
    fn get(&self, id: &str) -> Result<Option<VehicleEntry>, StoreError>;

    /// Number of stored entries.
    fn len(&self) -> Result<usize, StoreError>;

    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

/// Turn the `vehicles` field of a batch payload into entries.
///
/// Fails when the field is absent or not an array; the elements themselves
/// are taken leniently.
pub fn batch_entries(vehicles: Option<&Value>) -> Result<Vec<VehicleEntry>, StoreError> {
    match vehicles {
        Some(Value::Array(items)) => Ok(items.iter().map(VehicleEntry::from_value).collect()),
        Some(_) => Err(StoreError::Input("vehicles must be an array".into())),
        None => Err(StoreError::Input("vehicles is required".into())),
    }
}
