//! Service: route registry and dispatch for the fleet API.
//!
//! `Service<S>` owns a vehicle store and a table of handlers keyed by method
//! and path. Each handler receives a `Context<S>` and returns
//! `Result<Response, HandlerError>`; `dispatch` turns every outcome,
//! including a panicking handler, into exactly one `Response`.
//!
//! ## Example
//!
//! ```ignore
//! use fleetman::api::{self, Request};
//! use fleetman::store::InMemoryVehicleStore;
//! use serde_json::json;
//!
//! let service = api::fleet_service(InMemoryVehicleStore::new());
//! let response = service.dispatch(&Request::post(
//!     "/api/vehicles",
//!     json!({ "id": "V001", "name": "Vehicle 1", "status": "active" }),
//! ));
//! assert_eq!(response.status, 201);
//! ```

use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};

use super::context::Context;
use super::error::HandlerError;
use super::request::{Method, Request, Response};
use crate::vehicle::ValidationPolicy;

type HandleFn<S> = Box<dyn Fn(&Context<S>) -> Result<Response, HandlerError> + Send + Sync>;

/// A service that routes requests to handler functions.
pub struct Service<S> {
    store: S,
    policy: ValidationPolicy,
    routes: HashMap<(Method, String), HandleFn<S>>,
}

impl<S: Send + Sync + 'static> Service<S> {
    /// Create a service with no routes around the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            policy: ValidationPolicy::default(),
            routes: HashMap::new(),
        }
    }

    /// Set the validation policy handlers apply to incoming vehicles.
    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Register a handler for `method` + `path`.
    ///
    /// Uses builder pattern, returning `self` for chaining. A later
    /// registration for the same route replaces the earlier one.
    pub fn route<F>(mut self, method: Method, path: &str, handler: F) -> Self
    where
        F: Fn(&Context<S>) -> Result<Response, HandlerError> + Send + Sync + 'static,
    {
        self.routes
            .insert((method, path.to_string()), Box::new(handler));
        self
    }

    /// Look up the handler for a request and run it.
    ///
    /// One trailing `/` is ignored. `HEAD` falls back to the `GET` handler
    /// and answers with its status and no body.
    pub fn try_dispatch(&self, request: &Request) -> Result<Response, HandlerError> {
        let path = route_path(&request.path);
        let handler = self
            .routes
            .get(&(request.method.clone(), path.to_string()))
            .map(|handler| (handler, false))
            .or_else(|| match request.method {
                Method::Head => self
                    .routes
                    .get(&(Method::Get, path.to_string()))
                    .map(|handler| (handler, true)),
                _ => None,
            });
        let Some((handler, head)) = handler else {
            return Err(HandlerError::NotFound {
                method: request.method.clone(),
                path: request.path.clone(),
            });
        };

        let ctx = Context::new(request, &self.store, &self.policy);
        let response = handler(&ctx)?;
        if head {
            return Ok(Response::empty(response.status));
        }
        Ok(response)
    }

    /// Dispatch a request, always producing a response.
    ///
    /// Handler errors become their mapped status and public message; a
    /// panicking handler becomes a 500. Internal failures are logged with
    /// their details, which never reach the client.
    pub fn dispatch(&self, request: &Request) -> Response {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.try_dispatch(request)))
            .unwrap_or_else(|payload| Err(HandlerError::Internal(panic_message(payload.as_ref()))));

        match outcome {
            Ok(response) => {
                tracing::debug!(
                    target: "fleetman::api",
                    method = %request.method,
                    path = %request.path,
                    status = response.status,
                    "request handled"
                );
                response
            }
            Err(err) if err.is_internal() => {
                tracing::error!(
                    target: "fleetman::api",
                    method = %request.method,
                    path = %request.path,
                    error = %err,
                    "request failed"
                );
                err.into_response()
            }
            Err(err) => {
                tracing::info!(
                    target: "fleetman::api",
                    method = %request.method,
                    path = %request.path,
                    status = err.status_code(),
                    error = %err,
                    "request rejected"
                );
                err.into_response()
            }
        }
    }

    /// List registered routes as `(method, path)`.
    pub fn routes(&self) -> Vec<(&Method, &str)> {
        self.routes
            .keys()
            .map(|(method, path)| (method, path.as_str()))
            .collect()
    }

    /// Get a reference to the store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

fn route_path(path: &str) -> &str {
    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("handler panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("handler panicked: {s}")
    } else {
        "handler panicked".to_string()
    }
}
