//! Error types for the relay.

use thiserror::Error;

/// Generic fallback text for failures that carry no message of their own.
pub const GENERIC_ERROR_MESSAGE: &str = "Erro interno do servidor";

/// Common error type for the relay.
#[derive(Error, Debug)]
pub enum RelayError {
    /// One or more required request fields are missing or empty.
    #[error("validation error: {0}")]
    Validation(String),

    /// The request `Origin` is not in the configured allow-list.
    #[error("origin not allowed: {0}")]
    OriginNotAllowed(String),

    /// The email provider answered with a structured error.
    ///
    /// The message is passed through to the caller unchanged.
    #[error("provider error: {0}")]
    Provider(String),

    /// Any other failure while handling a request (network, decoding, ...).
    #[error("unexpected error: {0}")]
    Unexpected(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RelayError {
    /// Message suitable for the `error` field of a response envelope.
    ///
    /// Only the inner text is exposed, never the variant prefix.
    pub fn client_message(&self) -> String {
        let message = match self {
            RelayError::Validation(msg)
            | RelayError::OriginNotAllowed(msg)
            | RelayError::Provider(msg)
            | RelayError::Unexpected(msg)
            | RelayError::Config(msg) => msg.clone(),
            RelayError::Io(e) => e.to_string(),
        };

        if message.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

/// Result type alias for relay operations.
pub type Result<T> = std::result::Result<T, RelayError>;
