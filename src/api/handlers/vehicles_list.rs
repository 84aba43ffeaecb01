//! Handler: GET /api/vehicles

use crate::api::{Context, HandlerError, Method, Response};
use crate::store::{PageRequest, VehicleStore};

pub const METHOD: Method = Method::Get;
pub const PATH: &str = "/api/vehicles";

pub fn handle<S: VehicleStore>(ctx: &Context<S>) -> Result<Response, HandlerError> {
    let page = PageRequest::parse(ctx.query("page"), ctx.query("limit"))?;
    let listing = ctx.store().list(page)?;
    Response::json_of(200, &listing)
}
