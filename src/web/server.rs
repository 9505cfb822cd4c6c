//! Web server for the relay.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::{Config, DeploymentMode};
use crate::provider::{EmailProvider, ResendClient};
use crate::{RelayError, Result};

use super::handlers::AppState;
use super::middleware::OriginPolicy;
use super::router::create_app;

/// Web server for the relay API.
pub struct WebServer {
    /// Server address.
    addr: SocketAddr,
    /// Exposed HTTP surface.
    mode: DeploymentMode,
    /// Application state.
    app_state: Arc<AppState>,
    /// Origin allow-list.
    policy: OriginPolicy,
}

impl WebServer {
    /// Create a server that delivers through the configured Resend API.
    pub fn new(config: &Config) -> Result<Self> {
        let provider = ResendClient::new(&config.mail)?;
        Self::with_provider(config, Arc::new(provider))
    }

    /// Create a server with an explicit delivery backend.
    pub fn with_provider(config: &Config, provider: Arc<dyn EmailProvider>) -> Result<Self> {
        let addr = format!("{}:{}", config.server.host, config.server.port)
            .parse()
            .map_err(|e| RelayError::Config(format!("invalid server address: {e}")))?;

        Ok(Self {
            addr,
            mode: config.server.mode,
            app_state: Arc::new(AppState::new(config.mail.clone(), provider)),
            policy: OriginPolicy::from_origins(&config.effective_origins()),
        })
    }

    /// Get the server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Get the deployment mode.
    pub fn mode(&self) -> DeploymentMode {
        self.mode
    }

    /// Build the router without binding a socket.
    pub fn router(&self) -> Router {
        create_app(self.mode, self.app_state.clone(), &self.policy)
    }

    /// Run the web server.
    pub async fn run(self) -> std::result::Result<(), std::io::Error> {
        let router = self.router();

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;

        tracing::info!(
            mode = ?self.mode,
            provider = self.app_state.provider.name(),
            "Web server listening on http://{}",
            local_addr
        );

        axum::serve(listener, router).await
    }

    /// Run the server in the background and return the actual bound address.
    ///
    /// This is useful for testing when binding to port 0.
    pub async fn run_with_addr(self) -> std::result::Result<SocketAddr, std::io::Error> {
        let router = self.router();

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;

        tracing::info!(mode = ?self.mode, "Web server listening on http://{}", local_addr);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!("Web server error: {}", e);
            }
        });

        Ok(local_addr)
    }
}
