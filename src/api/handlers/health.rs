//! Handler: GET /health

use serde_json::json;

use crate::api::{Context, HandlerError, Method, Response};

pub const METHOD: Method = Method::Get;
pub const PATH: &str = "/health";

pub fn handle<S>(_ctx: &Context<S>) -> Result<Response, HandlerError> {
    Ok(Response::ok(json!({
        "status": "UP",
        "timestamp": super::timestamp(),
    })))
}
