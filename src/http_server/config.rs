//! HTTP Server Configuration
//!
//! Configuration for the HTTP server: bind address, CORS origins and logging.
//! Loaded from an optional JSON file; every field has a default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 5000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty means any origin
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Default log filter when RUST_LOG is unset (default: "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON log lines instead of plain text
    #[serde(default)]
    pub log_json: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".to_string(), // Vite dev server
        "http://127.0.0.1:5173".to_string(),
    ]
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let config: HttpServerConfig = serde_json::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    /// Reject values the server cannot bind with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::Invalid("host must not be empty".to_string()));
        }

        if self.port == 0 {
            return Err(ConfigError::Invalid("port must be > 0".to_string()));
        }

        Ok(())
    }

    /// Get the socket address string; IPv6 hosts are bracketed
    pub fn socket_addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}
