//! iplens - a small IP intelligence and DNS-over-HTTPS latency dashboard.
//!
//! This crate provides both a library API and a binary for:
//! - Reporting a visitor's public IP metadata (network, geolocation,
//!   security flags) by relaying an upstream intelligence provider
//! - Measuring round-trip latency to a set of named public
//!   DNS-over-HTTPS resolvers
//! - Serving a minimal web dashboard with live per-target status
//!
//! # Library Usage
//!
//! ```ignore
//! use iplens::{ConfigLoader, LatencyProber, IpInfoClient};
//!
//! // Measure resolver latency
//! let prober = LatencyProber::new()?;
//! let results = prober.measure_all(&ConfigLoader::builtin().targets).await;
//!
//! // Look up IP metadata
//! let client = IpInfoClient::new(iplens::ipinfo::DEFAULT_PROVIDER)?;
//! let report = client.lookup(ip).await?;
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # Run the dashboard server (default)
//! iplens
//! iplens serve --port 9000
//!
//! # One-shot latency probe from the terminal
//! iplens probe
//! iplens probe --sort
//! iplens probe --target "https://dns.google/resolve#Google"
//!
//! # List resolver targets
//! iplens list
//!
//! # Export the target list
//! iplens export --output mytargets.json
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod ipinfo;
pub mod probe;
pub mod server;

// Re-export commonly used types
pub use cli::{Cli, Commands, OutputFormat};
pub use config::{ConfigLoader, ServerConfig};
pub use error::{Error, Result};
pub use ipinfo::{IpInfoClient, IpReport};
pub use probe::{LatencyProber, ProbeResult, ProbeSummary, ProbeTarget, TargetList};
pub use server::{build_router, AppState};
