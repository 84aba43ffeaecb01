//! Route handlers.
//!
//! Each handler module follows the same convention:
//! - `METHOD`: the request method it answers
//! - `PATH`: the exact path it answers
//! - `handle`: the handler, generic over the store

pub mod batch;
pub mod health;
pub mod home;
pub mod search;
pub mod status;
pub mod update;
pub mod vehicles_create;
pub mod vehicles_list;

/// Current time as an RFC 3339 string, used by the liveness endpoints.
pub(crate) fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}
