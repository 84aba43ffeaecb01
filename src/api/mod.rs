//! api: request handlers for the fleet management service.
//!
//! A `Service` owns the vehicle store and routes each `Request` to a handler
//! registered for its method and path. Each handler receives a `Context<S>`
//! with access to the query, the JSON body, the store, and the validation
//! policy, and produces a `Response` (status + JSON or HTML body).
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use fleetman::api::{self, Request};
//! use fleetman::store::InMemoryVehicleStore;
//!
//! let service = Arc::new(api::fleet_service(InMemoryVehicleStore::new()));
//!
//! // Direct dispatch
//! let response = service.dispatch(&Request::get("/health"));
//!
//! // HTTP transport (requires "http" feature)
//! // api::serve(service, "0.0.0.0:3000").await?;
//! ```

mod context;
mod error;
pub mod handlers;
mod request;
mod service;

pub use context::Context;
pub use error::HandlerError;
pub use request::{Method, Request, Response, ResponseBody};
pub use service::Service;

// HTTP transport (requires "http" feature)
#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
pub use http::{router, serve, serve_listener};

use crate::store::VehicleStore;

/// Register handler modules with a service using the convention pattern.
///
/// Each handler module must export:
/// - `METHOD: Method`: the request method
/// - `PATH: &str`: the route path
/// - `handle(ctx) -> Result<Response, HandlerError>`: the handler
///
/// # Example
/// ```ignore
/// let service = fleetman::register_routes!(
///     api::Service::new(InMemoryVehicleStore::new()),
///     api::handlers::health,
///     api::handlers::vehicles_create,
/// );
/// ```
#[macro_export]
macro_rules! register_routes {
    ($service:expr, $( $($seg:ident)::+ ),+ $(,)?) => {
        $service
        $(
            .route(
                $($seg)::+::METHOD,
                $($seg)::+::PATH,
                $($seg)::+::handle,
            )
        )+
    };
}

/// A service with every fleet route registered.
pub fn fleet_service<S: VehicleStore + 'static>(store: S) -> Service<S> {
    register_routes!(
        Service::new(store),
        handlers::home,
        handlers::health,
        handlers::status,
        handlers::vehicles_create,
        handlers::vehicles_list,
        handlers::update,
        handlers::search,
        handlers::batch,
    )
}
