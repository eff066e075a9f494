//! Configuration module.
//!
//! This module provides server settings and the resolver target list
//! loader.

pub mod loader;

pub use loader::ConfigLoader;

use serde::{Deserialize, Serialize};

/// Default HTTP port for the dashboard server.
pub const DEFAULT_PORT: u16 = 8080;

/// Default bind address.
pub const DEFAULT_BIND: &str = "0.0.0.0";

/// Runtime settings for the dashboard server.
///
/// Values come from CLI flags, each of which also reads an `IPLENS_*`
/// environment variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind the listener to
    pub bind: String,
    /// HTTP port
    pub port: u16,
    /// Base URL of the IP intelligence provider
    pub ip_api: String,
    /// Per-probe deadline in seconds
    pub timeout_secs: u64,
}

impl ServerConfig {
    /// Socket address string for the listener.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
            ip_api: crate::ipinfo::DEFAULT_PROVIDER.to_string(),
            timeout_secs: 5,
        }
    }
}
