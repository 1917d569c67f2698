//! CLI command definitions for the `notely` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod token;

use clap::{Parser, Subcommand};

/// Notes API server.
#[derive(Parser)]
#[command(name = "notely", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of plain text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default log filter for the chosen verbosity. `RUST_LOG` overrides it.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "info",
            1 => "info,notely_api=debug,notely_core=debug,notely_infra=debug,tower_http=debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Interface to bind (overrides config.toml).
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config.toml and $PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Mint a new random API key and print it.
    Token,
}
