//! Resend-compatible HTTP email provider.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use super::{EmailProvider, OutboundEmail, ProviderError, SendReceipt};
use crate::config::MailConfig;
use crate::{RelayError, Result};

/// User agent string for provider calls.
const USER_AGENT: &str = "tourmail/0.1 (email relay)";

/// Request body of `POST /emails`.
#[derive(Debug, Serialize)]
struct SendEmailBody<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    html: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

/// Successful response body.
#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    #[serde(default)]
    id: Option<String>,
}

/// Error response body.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for a Resend-compatible `/emails` endpoint.
pub struct ResendClient {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl ResendClient {
    /// Create a client from mail configuration.
    pub fn new(config: &MailConfig) -> Result<Self> {
        let endpoint = emails_endpoint(&config.api_url)?;

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| RelayError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key.clone(),
        })
    }

    /// The URL messages are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Build `<api_url>/emails`, keeping any path prefix of `api_url`.
fn emails_endpoint(api_url: &str) -> Result<Url> {
    let mut base =
        Url::parse(api_url).map_err(|e| RelayError::Config(format!("invalid api_url: {e}")))?;

    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join("emails")
        .map_err(|e| RelayError::Config(format!("invalid api_url: {e}")))
}

#[async_trait]
impl EmailProvider for ResendClient {
    async fn send(&self, email: OutboundEmail) -> std::result::Result<SendReceipt, ProviderError> {
        let body = SendEmailBody {
            from: &email.from,
            to: &email.to,
            subject: &email.subject,
            html: &email.html,
            reply_to: email.reply_to.as_deref(),
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(format!("failed to reach email provider: {e}")))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ProviderError::Transport(format!("failed to read response: {e}")))?;

        if status.is_success() {
            let parsed: SendEmailResponse = serde_json::from_slice(&bytes).map_err(|e| {
                ProviderError::Transport(format!("malformed provider response: {e}"))
            })?;
            return Ok(SendReceipt { id: parsed.id });
        }

        let message = serde_json::from_slice::<ErrorResponse>(&bytes)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("HTTP error: {status}"));

        Err(ProviderError::Api {
            status: Some(status.as_u16()),
            message,
        })
    }

    fn name(&self) -> &'static str {
        "resend"
    }
}
