//! Command-line interface (CLI) argument parsing module.
//!
//! This module provides CLI argument parsing using `clap`.
//! It supports multiple commands: running the dashboard server, one-shot
//! latency probes, listing resolver targets, and exporting target lists.

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CLI argument parser using clap derive macro.
///
/// # Example
///
/// ```ignore
/// let cli = Cli::parse();
/// match cli.command {
///     Some(Commands::Serve { port, .. }) => { /* ... */ }
///     Some(Commands::Probe { targets, .. }) => { /* ... */ }
///     None => { /* default: serve */ }
/// }
/// ```
#[derive(Parser, Debug)]
#[command(
    name = "iplens",
    version,
    about = "IP intelligence and DNS-over-HTTPS latency dashboard",
    long_about = "A small web dashboard reporting visitor IP metadata and round-trip latency to public DNS-over-HTTPS resolvers",
    infer_subcommands = true
)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (only errors)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output format for terminal commands
    #[arg(long, global = true, default_value = "table")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format (default, human-readable)
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

impl OutputFormat {
    /// Get all available output format names.
    #[must_use]
    pub fn names() -> &'static [&'static str] {
        &["table", "json", "csv"]
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(format!(
                "Unknown format: {}. Valid options are: {:?}",
                s,
                Self::names()
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// Available commands for the iplens CLI.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the dashboard server.
    ///
    /// Serves the dashboard page plus the JSON API for IP metadata and
    /// resolver latency measurement.
    #[command(alias = "s")]
    Serve {
        /// HTTP port to listen on
        #[arg(short, long, env = "IPLENS_PORT", default_value_t = crate::config::DEFAULT_PORT)]
        port: u16,

        /// Address to bind to
        #[arg(short, long, env = "IPLENS_BIND", default_value = crate::config::DEFAULT_BIND)]
        bind: String,

        /// Resolver target list file (JSON format)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Base URL of the IP intelligence provider
        #[arg(long, env = "IPLENS_IP_API", default_value = crate::ipinfo::DEFAULT_PROVIDER)]
        ip_api: String,

        /// Per-probe timeout in seconds
        #[arg(short, long, env = "IPLENS_TIMEOUT_SECS", default_value = "5")]
        timeout: u64,
    },

    /// Measure resolver latency from the terminal.
    ///
    /// Probes every configured target once and prints the results.
    /// Results can be sorted by latency and displayed in various formats.
    #[command(alias = "p")]
    Probe {
        /// Resolver target list file (JSON format)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Custom targets (format: URL#Name)
        #[arg(long = "target")]
        targets: Vec<String>,

        /// Per-probe timeout in seconds
        #[arg(short, long, default_value = "5")]
        timeout: u64,

        /// Sort by latency (fastest first)
        #[arg(long = "sort")]
        sort_by_latency: bool,
    },

    /// List configured resolver targets.
    ///
    /// Prints the resolved target set from a custom file, the user
    /// config directory, or the built-in defaults.
    #[command(alias = "l")]
    List {
        /// Resolver target list file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Export the resolver target list.
    ///
    /// Writes the resolved target set to a JSON file.
    #[command(alias = "e")]
    Export {
        /// Output file path
        #[arg(short, long, default_value = "targets.json")]
        output: PathBuf,
    },
}

/// Parse CLI arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parse CLI arguments and return the verbose flag alongside.
#[must_use]
pub fn parse_verbose() -> (Cli, bool) {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    (cli, verbose)
}
