//! Configuration loading from files on disk.

use std::collections::HashMap;
use std::io::Write;

use tempfile::{NamedTempFile, TempDir};

use tourmail::config::{Config, DeploymentMode};
use tourmail::RelayError;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_file() {
    let file = write_config(
        r#"
[server]
host = "0.0.0.0"
port = 8080
mode = "function"

[mail]
api_key = "re_file_key"
contact_email = "contato@passeiosparaty.com.br"
from_address = "Site <site@passeiosparaty.com.br>"
timezone = "America/Sao_Paulo"
timeout_secs = 20

[cors]
origins = ["https://passeiosparaty.com.br"]

[logging]
level = "debug"
file = ""
"#,
    );

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.mode, DeploymentMode::Function);
    assert_eq!(config.mail.api_key, "re_file_key");
    assert_eq!(config.mail.from_address, "Site <site@passeiosparaty.com.br>");
    assert_eq!(config.mail.timeout_secs, 20);
    assert_eq!(config.cors.origins, vec!["https://passeiosparaty.com.br"]);
    assert_eq!(config.logging.level, "debug");
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_partial_file_uses_defaults() {
    let file = write_config(
        r#"
[mail]
api_key = "re_file_key"
contact_email = "contato@passeiosparaty.com.br"
"#,
    );

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.server.port, 3001);
    assert_eq!(config.server.mode, DeploymentMode::Standalone);
    assert_eq!(config.mail.api_url, "https://api.resend.com");
    assert!(config.cors.origins.is_empty());
    assert!(config
        .effective_origins()
        .contains(&"http://localhost:5173".to_string()));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = Config::load(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(RelayError::Io(_))));
}

#[test]
fn test_load_invalid_toml() {
    let file = write_config("[server\nport = ");
    let result = Config::load(file.path());
    assert!(matches!(result, Err(RelayError::Config(_))));
}

#[test]
fn test_file_then_overrides() {
    let file = write_config(
        r#"
[server]
port = 8080

[mail]
api_key = "re_file_key"
contact_email = "file@passeiosparaty.com.br"
"#,
    );

    let env: HashMap<&str, &str> = [
        ("RESEND_API_KEY", "re_env_key"),
        ("ALLOWED_ORIGINS", "https://a.example, https://b.example"),
        ("CONTACT_EMAIL", ""),
    ]
    .into_iter()
    .collect();

    let mut config = Config::load(file.path()).unwrap();
    config
        .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
        .unwrap();

    assert_eq!(config.mail.api_key, "re_env_key");
    // Empty values leave the file setting in place.
    assert_eq!(config.mail.contact_email, "file@passeiosparaty.com.br");
    assert_eq!(config.server.port, 8080);
    assert_eq!(
        config.effective_origins(),
        vec!["https://a.example", "https://b.example"]
    );
}
