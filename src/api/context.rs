//! Context passed to request handlers.
//!
//! Carries the request, the store the service owns, and the validation
//! policy. Handlers access everything they need through the context.

use serde_json::Value;

use super::request::Request;
use crate::vehicle::ValidationPolicy;

/// The context passed to every request handler.
///
/// Generic over `S` (the store type) so handlers work with whatever store
/// implementation the service is configured with.
pub struct Context<'a, S> {
    request: &'a Request,
    store: &'a S,
    policy: &'a ValidationPolicy,
}

impl<'a, S> Context<'a, S> {
    pub(crate) fn new(request: &'a Request, store: &'a S, policy: &'a ValidationPolicy) -> Self {
        Self {
            request,
            store,
            policy,
        }
    }

    /// A decoded query parameter.
    pub fn query(&self, name: &str) -> Option<&str> {
        self.request.query.get(name).map(String::as_str)
    }

    /// The JSON body (`Null` when none was sent).
    pub fn body(&self) -> &Value {
        &self.request.body
    }

    /// A top-level field of the JSON body.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.request.body.get(name)
    }

    pub fn store(&self) -> &S {
        self.store
    }

    pub fn policy(&self) -> &ValidationPolicy {
        self.policy
    }
}
