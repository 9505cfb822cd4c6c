//! Configuration module for the relay.
//!
//! Configuration is read once at startup from an optional TOML file and then
//! overridden by environment variables. The resulting [`Config`] is immutable
//! and handed to the web layer by value.

use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

use crate::{RelayError, Result};

/// Which HTTP surface the process exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentMode {
    /// Standalone server: `/api/send-email`, `/api/send-reply`, `/health`.
    #[default]
    Standalone,
    /// Serverless-function style: `/sendEmail`, `/sendReplyEmail`.
    Function,
}

impl FromStr for DeploymentMode {
    type Err = RelayError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "standalone" => Ok(DeploymentMode::Standalone),
            "function" => Ok(DeploymentMode::Function),
            other => Err(RelayError::Config(format!(
                "unknown deployment mode: {other}"
            ))),
        }
    }
}

impl DeploymentMode {
    /// Origins allowed when none are configured explicitly.
    pub fn default_origins(&self) -> Vec<String> {
        let origins: &[&str] = match self {
            DeploymentMode::Standalone => &[
                "http://localhost:5173",
                "http://localhost:3000",
                "http://127.0.0.1:5173",
            ],
            DeploymentMode::Function => &[
                "https://passeiosparaty.com.br",
                "https://www.passeiosparaty.com.br",
                "https://passeios-paraty.web.app",
                "https://passeios-paraty-staging.web.app",
            ],
        };
        origins.iter().map(|o| o.to_string()).collect()
    }
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Deployment surface to expose.
    #[serde(default)]
    pub mode: DeploymentMode,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            mode: DeploymentMode::default(),
        }
    }
}

/// Email provider and message configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MailConfig {
    /// Base URL of the provider API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Provider API key (required).
    #[serde(default)]
    pub api_key: String,
    /// Destination address for contact-form notifications (required).
    #[serde(default)]
    pub contact_email: String,
    /// Sender used for contact-form notifications.
    #[serde(default = "default_from_address")]
    pub from_address: String,
    /// Sender used for admin replies.
    #[serde(default = "default_reply_from_address")]
    pub reply_from_address: String,
    /// Timezone used for the timestamp embedded in notifications.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Connect timeout for provider calls in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// Total timeout for provider calls in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "https://api.resend.com".to_string()
}

fn default_from_address() -> String {
    "Site Passeios <onboarding@resend.dev>".to_string()
}

fn default_reply_from_address() -> String {
    "Passeios de Barco Paraty <onboarding@resend.dev>".to_string()
}

fn default_timezone() -> String {
    "America/Sao_Paulo".to_string()
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_timeout() -> u64 {
    30
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: String::new(),
            contact_email: String::new(),
            from_address: default_from_address(),
            reply_from_address: default_reply_from_address(),
            timezone: default_timezone(),
            connect_timeout_secs: default_connect_timeout(),
            timeout_secs: default_timeout(),
        }
    }
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CorsConfig {
    /// Allowed origins. Empty means "use the deployment mode defaults";
    /// `"*"` allows every origin.
    #[serde(default)]
    pub origins: Vec<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file. Empty logs to the console only.
    #[serde(default)]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: String::new(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Mail configuration.
    #[serde(default)]
    pub mail: MailConfig,
    /// CORS configuration.
    #[serde(default)]
    pub cors: CorsConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(RelayError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file if it exists, then apply
    /// environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = if path.as_ref().exists() {
            Self::load(path)?
        } else {
            Self::default()
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| RelayError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `RESEND_API_KEY`, `RESEND_API_URL`
    /// - `CONTACT_EMAIL`, `FROM_EMAIL`, `REPLY_FROM_EMAIL`
    /// - `ALLOWED_ORIGINS` (comma separated, `*` for any)
    /// - `PORT`, `RELAY_MODE`, `LOG_LEVEL`
    ///
    /// Empty values are ignored.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get("RESEND_API_KEY") {
            self.mail.api_key = v;
        }
        if let Some(v) = get("RESEND_API_URL") {
            self.mail.api_url = v;
        }
        if let Some(v) = get("CONTACT_EMAIL") {
            self.mail.contact_email = v;
        }
        if let Some(v) = get("FROM_EMAIL") {
            self.mail.from_address = v;
        }
        if let Some(v) = get("REPLY_FROM_EMAIL") {
            self.mail.reply_from_address = v;
        }
        if let Some(v) = get("ALLOWED_ORIGINS") {
            self.cors.origins = parse_origin_list(&v);
        }
        if let Some(v) = get("PORT") {
            self.server.port = v
                .trim()
                .parse()
                .map_err(|_| RelayError::Config(format!("invalid PORT: {v}")))?;
        }
        if let Some(v) = get("RELAY_MODE") {
            self.server.mode = v.parse()?;
        }
        if let Some(v) = get("LOG_LEVEL") {
            self.logging.level = v;
        }
        Ok(())
    }

    /// Origins that the CORS policy should allow.
    pub fn effective_origins(&self) -> Vec<String> {
        if self.cors.origins.is_empty() {
            self.server.mode.default_origins()
        } else {
            self.cors.origins.clone()
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if:
    /// - the provider API key is not set
    /// - the contact destination address is not set
    /// - the provider URL does not parse
    /// - the timezone is unknown
    /// - the port is 0
    pub fn validate(&self) -> Result<()> {
        if self.mail.api_key.trim().is_empty() {
            return Err(RelayError::Config(
                "mail.api_key is not set. \
                 Set it in config.toml or via RESEND_API_KEY environment variable."
                    .to_string(),
            ));
        }
        if self.mail.contact_email.trim().is_empty() {
            return Err(RelayError::Config(
                "mail.contact_email is not set. \
                 Set it in config.toml or via CONTACT_EMAIL environment variable."
                    .to_string(),
            ));
        }
        url::Url::parse(&self.mail.api_url)
            .map_err(|e| RelayError::Config(format!("invalid mail.api_url: {e}")))?;
        if self.mail.timezone.parse::<chrono_tz::Tz>().is_err() {
            return Err(RelayError::Config(format!(
                "unknown timezone: {}",
                self.mail.timezone
            )));
        }
        if self.server.port == 0 {
            return Err(RelayError::Config(
                "server port must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Split a comma separated origin list, dropping blanks.
pub fn parse_origin_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|o| o.trim())
        .filter(|o| !o.is_empty())
        .map(|o| o.to_string())
        .collect()
}
