//! Shared application state.

use crate::config::ServerConfig;
use crate::error::Result;
use crate::ipinfo::IpInfoClient;
use crate::probe::{LatencyProber, ProbeTarget};
use std::time::Duration;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: ServerConfig,
    pub targets: Vec<ProbeTarget>,
    pub prober: LatencyProber,
    pub ipinfo: IpInfoClient,
}

impl AppState {
    /// Build the state from resolved settings and targets.
    ///
    /// # Errors
    ///
    /// Returns an error if either HTTP client cannot be initialized.
    pub fn new(config: ServerConfig, targets: Vec<ProbeTarget>) -> Result<Self> {
        let prober = LatencyProber::with_timeout(Duration::from_secs(config.timeout_secs))?;
        let ipinfo = IpInfoClient::new(&config.ip_api)?;
        Ok(Self {
            config,
            targets,
            prober,
            ipinfo,
        })
    }

    /// Look up a configured target by name, case-insensitively.
    #[must_use]
    pub fn find_target(&self, name: &str) -> Option<&ProbeTarget> {
        self.targets
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }
}
