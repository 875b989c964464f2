//! CLI argument definitions using clap
//!
//! Commands:
//! - portfolio-api serve [--config <path>] [--host <host>] [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Contact form and newsletter backend for a personal portfolio site
#[derive(Parser, Debug)]
#[command(name = "portfolio-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides the config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
