//! Upstream IP-intelligence provider client.
//!
//! Forwards the visitor's apparent address to the provider and relays
//! the decoded record as an [`IpReport`]. One request per lookup, no
//! retry, no caching.

use crate::error::{Error, Result};
use crate::ipinfo::types::{IpReport, ProviderRecord};
use std::net::IpAddr;
use std::time::Duration;

/// Default provider base URL.
pub const DEFAULT_PROVIDER: &str = "https://api.ipapi.is";

/// Default deadline for a provider lookup in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// IP intelligence provider client.
///
/// # Example
///
/// ```ignore
/// let client = IpInfoClient::new(DEFAULT_PROVIDER)?;
/// let report = client.lookup("203.0.113.7".parse()?).await?;
/// ```
pub struct IpInfoClient {
    client: reqwest::Client,
    base_url: String,
}

impl IpInfoClient {
    /// Create a new client against the given provider base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;
        let base_url: String = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The provider base URL this client queries.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up metadata for an address and reshape it into an [`IpReport`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on transport failure, [`Error::Upstream`]
    /// when the provider answers with a non-success status or a body that
    /// does not decode.
    pub async fn lookup(&self, ip: IpAddr) -> Result<IpReport> {
        tracing::debug!("Looking up {ip} via {}", self.base_url);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", ip.to_string())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::upstream(format!("provider returned HTTP {status}")));
        }

        let record: ProviderRecord = response
            .json()
            .await
            .map_err(|e| Error::upstream(format!("undecodable provider body: {e}")))?;

        Ok(IpReport::from_provider(ip, record))
    }
}
