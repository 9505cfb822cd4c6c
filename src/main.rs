use std::process::ExitCode;

use tracing::{error, info};

use tourmail::{Config, WebServer};

/// Config file path, overridable with `TOURMAIL_CONFIG`.
const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() -> ExitCode {
    let config_path =
        std::env::var("TOURMAIL_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    // Load configuration (file is optional, environment wins)
    let config = match Config::load_with_env(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {config_path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging
    if let Err(e) = tourmail::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        tourmail::logging::init_console_only(&config.logging.level);
    }

    // Missing provider key or destination address is fatal
    if let Err(e) = config.validate() {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    let server = match WebServer::new(&config) {
        Ok(server) => server,
        Err(e) => {
            error!("Failed to create web server: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("tourmail - email relay");
    info!(
        mode = ?server.mode(),
        origins = ?config.effective_origins(),
        "Server configured on {}",
        server.addr()
    );

    if let Err(e) = server.run().await {
        error!("Web server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
