//! CLI command implementations

use std::path::Path;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::init_tracing;

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, host, port } => {
            let config = resolve_config(config.as_deref(), host, port)?;
            serve(config)
        }
    }
}

/// Load the config file (or defaults) and apply flag overrides
pub fn resolve_config(
    path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> CliResult<HttpServerConfig> {
    let mut config = match path {
        Some(path) => HttpServerConfig::load(path)?,
        None => HttpServerConfig::default(),
    };

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    config.validate()?;
    Ok(config)
}

/// Install the tracing subscriber described by `config`
///
/// Returns `false`, after warning, when a subscriber was already installed.
pub fn install_logging(config: &HttpServerConfig) -> bool {
    let installed = init_tracing(&config.log_level, config.log_json);
    if !installed {
        tracing::warn!("tracing subscriber already installed; log_level and log_json ignored");
    }
    installed
}

/// Start the HTTP server with a fresh in-memory store
///
/// Blocks until the server exits. All submissions are lost on exit.
pub fn serve(config: HttpServerConfig) -> CliResult<()> {
    install_logging(&config);

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}
