//! Change notifications for the in-memory store.
//!
//! Listeners run on the emitter's own threads after the store lock has been
//! released, so a slow listener never blocks writers.

#[cfg(feature = "emitter")]
use std::sync::{Arc, Mutex, PoisonError};

#[cfg(feature = "emitter")]
use event_emitter_rs::EventEmitter;

/// Emitted with the stored entry (JSON) after `insert`.
pub const VEHICLE_STORED: &str = "vehicle.stored";
/// Emitted with the resulting entry (JSON) after `update`.
pub const VEHICLE_UPDATED: &str = "vehicle.updated";
/// Emitted with `{"count": n}` after `batch_insert`.
pub const VEHICLES_BATCH_STORED: &str = "vehicles.batch_stored";

/// Shared handle to the store's event emitter. Clones notify the same listeners.
#[cfg(feature = "emitter")]
#[derive(Clone)]
pub struct Notifier {
    emitter: Arc<Mutex<EventEmitter>>,
}

#[cfg(feature = "emitter")]
impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "emitter")]
impl Notifier {
    pub fn new() -> Self {
        Self {
            emitter: Arc::new(Mutex::new(EventEmitter::new())),
        }
    }

    /// Register a listener for a store event.
    pub fn on<F>(&self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        // The emitter holds no invariants a panicking listener could break.
        let mut emitter = self.emitter.lock().unwrap_or_else(PoisonError::into_inner);
        emitter.on(event, listener);
    }

    pub(crate) fn emit(&self, event: &str, payload: String) {
        let mut emitter = self.emitter.lock().unwrap_or_else(PoisonError::into_inner);
        emitter.emit(event, payload);
    }
}
