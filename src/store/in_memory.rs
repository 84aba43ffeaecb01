//! InMemoryVehicleStore - Vec-backed vehicle collection with an id index.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{Listing, PageRequest, StoreError, VehicleStore};
use crate::vehicle::{check_record, VehicleEntry, VehicleRecord};

use super::notify::{VEHICLES_BATCH_STORED, VEHICLE_STORED, VEHICLE_UPDATED};
#[cfg(feature = "emitter")]
use super::notify::Notifier;

/// Entries in insertion order plus the position of every entry that has an id.
#[derive(Default)]
struct Collection {
    entries: Vec<VehicleEntry>,
    index: HashMap<String, usize>,
}

impl Collection {
    /// Append, or replace in place when the id is already stored.
    fn put(&mut self, entry: VehicleEntry) -> usize {
        let existing = entry.id().and_then(|id| self.index.get(id).copied());
        match existing {
            Some(pos) => {
                self.entries[pos] = entry;
                pos
            }
            None => {
                let pos = self.entries.len();
                if let Some(id) = entry.id() {
                    self.index.insert(id.to_string(), pos);
                }
                self.entries.push(entry);
                pos
            }
        }
    }
}

/// In-memory vehicle store. Clone-friendly via Arc; clones share the collection.
#[derive(Clone, Default)]
pub struct InMemoryVehicleStore {
    collection: Arc<RwLock<Collection>>,
    #[cfg(feature = "emitter")]
    notifier: Notifier,
}

impl InMemoryVehicleStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for one of the [`notify`](super::notify) events.
    #[cfg(feature = "emitter")]
    pub fn on<F>(&self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.notifier.on(event, listener);
    }

    #[cfg(feature = "emitter")]
    fn notify<T: serde::Serialize>(&self, event: &str, payload: &T) {
        match serde_json::to_string(payload) {
            Ok(json) => self.notifier.emit(event, json),
            Err(e) => tracing::warn!(target: "fleetman::store", event, error = %e, "dropped notification"),
        }
    }

    #[cfg(not(feature = "emitter"))]
    fn notify<T: serde::Serialize>(&self, _event: &str, _payload: &T) {}
}

impl VehicleStore for InMemoryVehicleStore {
    fn insert(&self, record: VehicleRecord) -> Result<VehicleRecord, StoreError> {
        check_record(&record)?;
        {
            let mut collection = self
                .collection
                .write()
                .map_err(|_| StoreError::LockPoisoned("insert"))?;
            let pos = collection.put(VehicleEntry::from(record.clone()));
            tracing::debug!(target: "fleetman::store", id = %record.id, pos, "vehicle stored");
        }
        self.notify(VEHICLE_STORED, &record);
        Ok(record)
    }

    fn batch_insert(&self, entries: Vec<VehicleEntry>) -> Result<usize, StoreError> {
        let count = entries.len();
        {
            let mut collection = self
                .collection
                .write()
                .map_err(|_| StoreError::LockPoisoned("batch insert"))?;
            for entry in entries {
                collection.put(entry);
            }
            tracing::debug!(
                target: "fleetman::store",
                count,
                total = collection.entries.len(),
                "batch stored"
            );
        }
        self.notify(VEHICLES_BATCH_STORED, &serde_json::json!({ "count": count }));
        Ok(count)
    }

    fn update(
        &self,
        id: &str,
        name: Option<String>,
        status: Option<String>,
    ) -> Result<VehicleEntry, StoreError> {
        let entry = {
            let mut collection = self
                .collection
                .write()
                .map_err(|_| StoreError::LockPoisoned("update"))?;
            match collection.index.get(id).copied() {
                Some(pos) => {
                    let entry = &mut collection.entries[pos];
                    entry.name = name;
                    entry.status = status;
                    entry.clone()
                }
                None => {
                    let entry = VehicleEntry {
                        id: Some(id.to_string()),
                        name,
                        status,
                    };
                    collection.put(entry.clone());
                    entry
                }
            }
        };
        tracing::debug!(target: "fleetman::store", id, "vehicle updated");
        self.notify(VEHICLE_UPDATED, &entry);
        Ok(entry)
    }

    fn list(&self, page: PageRequest) -> Result<Listing, StoreError> {
        let collection = self
            .collection
            .read()
            .map_err(|_| StoreError::LockPoisoned("list"))?;
        let vehicles = collection
            .entries
            .iter()
            .skip(page.offset())
            .take(page.limit() as usize)
            .cloned()
            .collect();
        Ok(Listing {
            vehicles,
            page: page.page(),
            limit: page.limit(),
        })
    }

    fn search(&self, query: &str) -> Result<Vec<VehicleEntry>, StoreError> {
        let collection = self
            .collection
            .read()
            .map_err(|_| StoreError::LockPoisoned("search"))?;
        Ok(collection
            .entries
            .iter()
            .filter(|entry| entry.name().is_some_and(|name| name.contains(query)))
            .cloned()
            .collect())
    }

    fn get(&self, id: &str) -> Result<Option<VehicleEntry>, StoreError> {
        let collection = self
            .collection
            .read()
            .map_err(|_| StoreError::LockPoisoned("get"))?;
        Ok(collection
            .index
            .get(id)
            .map(|&pos| collection.entries[pos].clone()))
    }

    fn len(&self) -> Result<usize, StoreError> {
        let collection = self
            .collection
            .read()
            .map_err(|_| StoreError::LockPoisoned("len"))?;
        Ok(collection.entries.len())
    }
}
