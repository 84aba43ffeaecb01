//! Error types for request handlers.

use thiserror::Error;

use super::request::{Method, Response};
use crate::store::{PageError, StoreError};
use crate::vehicle::ValidationError;

/// Error type for request handler operations.
///
/// The `Display` text is for logs. Clients only ever see
/// [`public_message`](HandlerError::public_message).
#[derive(Debug, Error)]
pub enum HandlerError {
    /// No handler registered for this method and path.
    #[error("no route for {method} {path}")]
    NotFound { method: Method, path: String },

    /// Payload failed vehicle validation.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Query parameter out of range or malformed.
    #[error("bad request parameter: {0}")]
    Request(String),

    /// Request body is not valid JSON.
    #[error("malformed JSON body: {0}")]
    Parse(String),

    /// Request body sent with a content type other than JSON.
    #[error("unsupported content type: {0}")]
    UnsupportedMediaType(String),

    /// Body has the wrong shape for the operation.
    #[error("invalid input: {0}")]
    Input(String),

    /// Store failure (lock poisoning).
    #[error("store error: {0}")]
    Store(StoreError),

    /// Anything else, including caught panics.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<PageError> for HandlerError {
    fn from(err: PageError) -> Self {
        HandlerError::Request(err.to_string())
    }
}

impl From<StoreError> for HandlerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(e) => HandlerError::Validation(e),
            StoreError::Input(msg) => HandlerError::Input(msg),
            other => HandlerError::Store(other),
        }
    }
}

impl HandlerError {
    /// Map this error to an HTTP status code.
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::NotFound { .. } => 404,
            HandlerError::Validation(_) => 400,
            HandlerError::Request(_) => 400,
            HandlerError::Parse(_) => 400,
            HandlerError::UnsupportedMediaType(_) => 415,
            HandlerError::Input(_) => 400,
            HandlerError::Store(_) => 500,
            HandlerError::Internal(_) => 500,
        }
    }

    /// The message placed in the `error` field of the response body.
    pub fn public_message(&self) -> String {
        match self {
            HandlerError::NotFound { .. } => "Not Found".into(),
            HandlerError::Validation(_) => "Invalid vehicle".into(),
            HandlerError::Request(msg) => msg.clone(),
            HandlerError::Parse(_) => "Invalid JSON".into(),
            HandlerError::UnsupportedMediaType(_) => "Unsupported Media Type".into(),
            HandlerError::Input(msg) => msg.clone(),
            HandlerError::Store(_) | HandlerError::Internal(_) => "Internal Server Error".into(),
        }
    }

    /// Whether this is a server-side failure rather than a client mistake.
    pub fn is_internal(&self) -> bool {
        self.status_code() >= 500
    }

    pub fn into_response(self) -> Response {
        Response::error(self.status_code(), &self.public_message())
    }
}
