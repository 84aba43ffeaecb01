//! Handler: POST /api/vehicles
//!
//! Validates the body and stores it. The caller-supplied id is kept as-is.

use crate::api::{Context, HandlerError, Method, Response};
use crate::store::VehicleStore;
use crate::vehicle::validate;

pub const METHOD: Method = Method::Post;
pub const PATH: &str = "/api/vehicles";

pub fn handle<S: VehicleStore>(ctx: &Context<S>) -> Result<Response, HandlerError> {
    let record = validate(ctx.body(), ctx.policy())?;
    if !record.has_known_status() {
        tracing::debug!(
            target: "fleetman::api",
            id = %record.id,
            status = %record.status,
            "unconventional vehicle status"
        );
    }
    let stored = ctx.store().insert(record)?;
    Response::json_of(201, &stored)
}
