//! Handler: GET /api/status
//!
//! Identifies the running API and its version.

use serde_json::json;

use crate::api::{Context, HandlerError, Method, Response};

pub const METHOD: Method = Method::Get;
pub const PATH: &str = "/api/status";

pub const SERVICE_NAME: &str = "Fleetman Webapp API";

pub fn handle<S>(_ctx: &Context<S>) -> Result<Response, HandlerError> {
    Ok(Response::ok(json!({
        "message": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "timestamp": super::timestamp(),
    })))
}
