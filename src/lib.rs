//! tourmail - transactional email relay for a boat-tour website.
//!
//! Accepts contact-form submissions and admin replies over HTTP, renders
//! them as HTML and forwards them to an email delivery provider.

pub mod config;
pub mod datetime;
pub mod error;
pub mod logging;
pub mod provider;
pub mod relay;
pub mod template;
pub mod web;

pub use config::{Config, DeploymentMode};
pub use error::{RelayError, Result};
pub use provider::{EmailProvider, OutboundEmail, ProviderError, ResendClient, SendReceipt};
pub use relay::{
    send_contact_notification, send_reply, ContactNotificationRequest, ReplyRequest, SendResult,
};
pub use web::WebServer;
