//! Email delivery providers.
//!
//! The relay core talks to delivery backends through [`EmailProvider`].
//! [`ResendClient`] is the HTTP implementation used in production.

pub mod resend;

use async_trait::async_trait;
use thiserror::Error;

pub use resend::ResendClient;

/// A fully rendered message ready to hand to a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    /// Sender, e.g. `"Site <site@example.com>"`.
    pub from: String,
    /// Recipients.
    pub to: Vec<String>,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html: String,
    /// Optional reply-to address.
    pub reply_to: Option<String>,
}

/// Provider acknowledgement of an accepted message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendReceipt {
    /// Provider-assigned message identifier, when the provider returns one.
    pub id: Option<String>,
}

/// Provider failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider answered with a structured error object
    /// (unverified domain, rate limit, invalid key, ...).
    #[error("{message}")]
    Api {
        /// HTTP status of the provider response, if any.
        status: Option<u16>,
        /// Provider error message.
        message: String,
    },

    /// The call did not produce a usable answer (network, decoding, ...).
    #[error("{0}")]
    Transport(String),
}

/// Trait implemented by email delivery backends.
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Submit one message. Called exactly once per relayed request.
    async fn send(&self, email: OutboundEmail) -> Result<SendReceipt, ProviderError>;

    /// Short backend name for logging.
    fn name(&self) -> &'static str;
}
