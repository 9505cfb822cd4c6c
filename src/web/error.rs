//! API error handling.
//!
//! Every failure leaves the service as a [`SendResult`] envelope
//! (`{"success": false, "error": "..."}`) with the matching status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::relay::SendResult;
use crate::RelayError;

/// Message for a disallowed HTTP method on a function endpoint.
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Método não permitido";

/// Message for an `Origin` outside the allow-list.
pub const ORIGIN_NOT_ALLOWED_MESSAGE: &str = "Origem não permitida pelo CORS";

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Create a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Create a forbidden error.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    /// Create a method-not-allowed error.
    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED_MESSAGE)
    }

    /// Create an internal server error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// HTTP status of this error.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Message placed in the envelope.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(SendResult::failed(self.message))).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        let message = err.client_message();
        match err {
            RelayError::Validation(_) => ApiError::bad_request(message),
            RelayError::OriginNotAllowed(_) => ApiError::forbidden(ORIGIN_NOT_ALLOWED_MESSAGE),
            RelayError::Provider(_) | RelayError::Unexpected(_) => ApiError::internal(message),
            RelayError::Config(_) | RelayError::Io(_) => {
                tracing::error!("Internal error: {}", err);
                ApiError::internal(message)
            }
        }
    }
}
