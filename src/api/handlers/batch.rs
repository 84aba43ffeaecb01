//! Handler: POST /api/batch
//!
//! Stores every element of `vehicles` without per-item validation.

use serde_json::json;

use crate::api::{Context, HandlerError, Method, Response};
use crate::store::{batch_entries, StoreError, VehicleStore};

pub const METHOD: Method = Method::Post;
pub const PATH: &str = "/api/batch";

pub fn handle<S: VehicleStore>(ctx: &Context<S>) -> Result<Response, HandlerError> {
    let entries = batch_entries(ctx.field("vehicles")).map_err(|err| match err {
        StoreError::Input(msg) => HandlerError::Input(format!("Invalid batch: {msg}")),
        other => other.into(),
    })?;
    let count = ctx.store().batch_insert(entries)?;
    Ok(Response::ok(json!({ "count": count })))
}
