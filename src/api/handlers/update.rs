//! Handler: POST /api/update
//!
//! Overwrites name and status of the vehicle with the given id. Only the id
//! is checked; name and status are stored as sent, and absent values clear
//! the field.

use serde_json::{json, Value};

use crate::api::{Context, HandlerError, Method, Response};
use crate::store::VehicleStore;
use crate::vehicle::ValidationError;

pub const METHOD: Method = Method::Post;
pub const PATH: &str = "/api/update";

pub fn handle<S: VehicleStore>(ctx: &Context<S>) -> Result<Response, HandlerError> {
    let id = ctx
        .field("id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .ok_or(ValidationError::MissingField("id"))?;

    let text = |name: &str| ctx.field(name).and_then(Value::as_str).map(str::to_string);
    ctx.store().update(id, text("name"), text("status"))?;

    Ok(Response::ok(json!({ "success": true })))
}
