//! Error types for the collection store.

use thiserror::Error;

use crate::vehicle::ValidationError;

/// Errors raised by [`VehicleStore`](super::VehicleStore) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A record handed to `insert` did not pass validation.
    #[error("invalid vehicle: {0}")]
    Validation(#[from] ValidationError),

    /// Input of the wrong shape (e.g. a batch that is not a sequence).
    #[error("invalid input: {0}")]
    Input(String),

    /// Another thread panicked while holding the store lock.
    #[error("store lock poisoned during {0}")]
    LockPoisoned(&'static str),
}
