//! HTTP transport for the fleet service: maps HTTP requests to dispatch.
//!
//! Requires the `http` feature. Uses axum for serving.
//!
//! Every request goes through one fallback handler: method, path, decoded
//! query and JSON body become a [`Request`], the service answers it, and the
//! [`Response`] is written back. Routing lives in the service, so unknown
//! paths get the service's 404.
//!
//! Also handled here:
//! - bodies are parsed only when present; non-JSON content types get 415 and
//!   malformed JSON gets 400
//! - every response carries `access-control-allow-origin: *`, and `OPTIONS`
//!   preflight on any path answers 204
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use fleetman::{api, store::InMemoryVehicleStore};
//!
//! let service = Arc::new(api::fleet_service(InMemoryVehicleStore::new()));
//!
//! // Get the router to compose with other axum routes
//! let app = api::router(service.clone());
//!
//! // Or serve directly
//! api::serve(service, "0.0.0.0:3000").await?;
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use axum::http::{HeaderMap, HeaderValue, StatusCode, Uri};
use axum::response::{Html, IntoResponse};
use axum::{middleware, Json, Router};
use serde_json::Value;

use super::error::HandlerError;
use super::request::{Method, Request, Response, ResponseBody};
use super::service::Service;
use crate::store::VehicleStore;

const ALLOWED_METHODS: &str = "GET,HEAD,PUT,PATCH,POST,DELETE";

/// Build an axum `Router` that dispatches every request via the given service.
pub fn router<S: VehicleStore + 'static>(service: Arc<Service<S>>) -> Router {
    Router::new()
        .fallback(dispatch_handler::<S>)
        .layer(middleware::map_response(cors_headers))
        .with_state(service)
}

/// Serve the service over HTTP at the given address (e.g. `"0.0.0.0:3000"`)
/// until Ctrl-C.
pub async fn serve<S: VehicleStore + 'static>(
    service: Arc<Service<S>>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    serve_listener(service, listener).await
}

/// Serve on an already-bound listener until Ctrl-C.
pub async fn serve_listener<S: VehicleStore + 'static>(
    service: Arc<Service<S>>,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!(target: "fleetman::http", %addr, "listening");
    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!(target: "fleetman::http", "shutting down"),
        Err(e) => {
            tracing::warn!(target: "fleetman::http", error = %e, "cannot listen for Ctrl-C");
            std::future::pending::<()>().await
        }
    }
}

/// Any method, any path: build a `Request` and dispatch it.
async fn dispatch_handler<S: VehicleStore + 'static>(
    State(service): State<Arc<Service<S>>>,
    method: axum::http::Method,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> axum::response::Response {
    let method = Method::from(method.as_str());
    if method == Method::Options {
        return preflight();
    }

    let response = match parse_body(&headers, &body) {
        Ok(body) => {
            let request = Request {
                method,
                path: uri.path().to_string(),
                query,
                body,
            };
            service.dispatch(&request)
        }
        Err(err) => {
            tracing::info!(
                target: "fleetman::http",
                %method,
                path = uri.path(),
                error = %err,
                "unreadable request body"
            );
            err.into_response()
        }
    };

    into_http(response)
}

/// Parse the body as JSON. An empty body is `null`.
fn parse_body(headers: &HeaderMap, body: &[u8]) -> Result<Value, HandlerError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if !is_json(content_type) {
        return Err(HandlerError::UnsupportedMediaType(content_type.to_string()));
    }

    serde_json::from_slice(body).map_err(|e| HandlerError::Parse(e.to_string()))
}

/// `application/json`, `application/<anything>+json`, with or without parameters.
fn is_json(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

fn into_http(response: Response) -> axum::response::Response {
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    match response.body {
        ResponseBody::Json(value) => (status, Json(value)).into_response(),
        ResponseBody::Html(page) => (status, Html(page)).into_response(),
        ResponseBody::Empty => status.into_response(),
    }
}

fn preflight() -> axum::response::Response {
    (
        StatusCode::NO_CONTENT,
        [
            (ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS),
            (ACCESS_CONTROL_ALLOW_HEADERS, "*"),
        ],
    )
        .into_response()
}

async fn cors_headers(mut response: axum::response::Response) -> axum::response::Response {
    response
        .headers_mut()
        .insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    response
}
