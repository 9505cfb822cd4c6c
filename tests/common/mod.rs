//! Test helpers for Web API tests.
//!
//! Provides a recording email provider, test configuration and routers wired
//! against them.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;

use tourmail::config::{Config, DeploymentMode};
use tourmail::provider::{EmailProvider, OutboundEmail, ProviderError, SendReceipt};
use tourmail::web::handlers::AppState;
use tourmail::web::middleware::OriginPolicy;
use tourmail::web::create_app;

/// Origin allowed by the test configuration.
pub const ALLOWED_ORIGIN: &str = "https://passeiosparaty.com.br";

/// Destination for contact notifications in tests.
pub const CONTACT_EMAIL: &str = "contato@passeiosparaty.com.br";

/// Provider double that records every message and returns a fixed outcome.
pub struct RecordingProvider {
    outcome: Result<SendReceipt, ProviderError>,
    sent: Mutex<Vec<OutboundEmail>>,
}

impl RecordingProvider {
    /// Provider that accepts every message with the given id.
    pub fn accepting(id: &str) -> Arc<Self> {
        Self::returning(Ok(SendReceipt {
            id: Some(id.to_string()),
        }))
    }

    /// Provider that accepts every message without returning an id.
    pub fn accepting_without_id() -> Arc<Self> {
        Self::returning(Ok(SendReceipt { id: None }))
    }

    /// Provider that rejects every message with a structured error.
    pub fn rejecting(message: &str) -> Arc<Self> {
        Self::returning(Err(ProviderError::Api {
            status: Some(403),
            message: message.to_string(),
        }))
    }

    /// Provider whose calls fail at the transport level.
    pub fn unreachable(message: &str) -> Arc<Self> {
        Self::returning(Err(ProviderError::Transport(message.to_string())))
    }

    fn returning(outcome: Result<SendReceipt, ProviderError>) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            sent: Mutex::new(Vec::new()),
        })
    }

    /// Messages handed to this provider so far.
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }

    /// Number of send calls so far.
    pub fn calls(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl EmailProvider for RecordingProvider {
    async fn send(&self, email: OutboundEmail) -> Result<SendReceipt, ProviderError> {
        self.sent.lock().unwrap().push(email);
        self.outcome.clone()
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// Create a test configuration for the given mode.
pub fn create_test_config(mode: DeploymentMode) -> Config {
    let mut config = Config::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.port = 0;
    config.server.mode = mode;
    config.mail.api_key = "re_test_key".to_string();
    config.mail.contact_email = CONTACT_EMAIL.to_string();
    config.cors.origins = vec![ALLOWED_ORIGIN.to_string()];
    config
}

/// Create a test server for the given config and provider.
pub fn create_test_server_with(config: &Config, provider: Arc<RecordingProvider>) -> TestServer {
    let app_state = Arc::new(AppState::new(config.mail.clone(), provider));
    let policy = OriginPolicy::from_origins(&config.effective_origins());
    let router = create_app(config.server.mode, app_state, &policy);

    TestServer::new(router).expect("Failed to create test server")
}

/// Create a test server for the given mode and provider.
pub fn create_test_server(mode: DeploymentMode, provider: Arc<RecordingProvider>) -> TestServer {
    create_test_server_with(&create_test_config(mode), provider)
}
