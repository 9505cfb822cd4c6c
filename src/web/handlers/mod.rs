//! API handlers for the relay.

pub mod email;
pub mod function;
pub mod health;

pub use email::*;
pub use function::*;
pub use health::*;

use std::sync::Arc;

use crate::config::MailConfig;
use crate::provider::EmailProvider;

/// Application state shared by all handlers.
///
/// Built once at startup and never mutated.
pub struct AppState {
    /// Mail configuration (senders, destination, timezone).
    pub mail: MailConfig,
    /// Delivery backend.
    pub provider: Arc<dyn EmailProvider>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(mail: MailConfig, provider: Arc<dyn EmailProvider>) -> Self {
        Self { mail, provider }
    }
}
