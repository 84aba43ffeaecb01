//! Handler: GET /api/search

use crate::api::{Context, HandlerError, Method, Response};
use crate::store::VehicleStore;

pub const METHOD: Method = Method::Get;
pub const PATH: &str = "/api/search";

pub fn handle<S: VehicleStore>(ctx: &Context<S>) -> Result<Response, HandlerError> {
    let query = ctx.query("q").unwrap_or_default();
    let matches = ctx.store().search(query)?;
    Response::json_of(200, &matches)
}
