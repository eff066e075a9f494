//! Resolver latency measurement over HTTPS.
//!
//! This module provides functionality to measure round-trip latency to
//! DNS-over-HTTPS resolvers by issuing a fixed canned query against each
//! target's JSON API and timing the exchange.

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]

use crate::error::Result;
use crate::probe::types::{ProbeResult, ProbeSummary, ProbeTarget};
use reqwest::header::ACCEPT;
use std::time::{Duration, Instant};

/// Domain used for the canned query sent to every resolver.
const QUERY_NAME: &str = "example.com";

/// Record type of the canned query.
const QUERY_TYPE: &str = "A";

/// Media type requested from the resolver's JSON API.
const DNS_JSON: &str = "application/dns-json";

/// Default deadline for each probe in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Resolver latency prober.
///
/// Issues a timed HTTP GET carrying a fixed DNS query to each target and
/// normalizes the heterogeneous outcomes (success, refusal, timeout,
/// transport failure) into a uniform [`ProbeResult`].
///
/// # Example
///
/// ```ignore
/// let prober = LatencyProber::new()?;
/// let target = ProbeTarget::new("Cloudflare", "https://cloudflare-dns.com/dns-query");
/// let result = prober.measure(&target).await;
/// ```
pub struct LatencyProber {
    client: reqwest::Client,
    timeout: Duration,
}

impl LatencyProber {
    /// Create a new `LatencyProber` with the default deadline.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized
    /// (e.g., TLS backend failure).
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a new `LatencyProber` with a custom per-probe deadline.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, timeout })
    }

    /// The per-probe deadline currently in effect.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Measure latency to a single resolver target.
    ///
    /// Sends one canned query and wall-clocks the exchange. Every outcome
    /// is folded into a [`ProbeResult`]; this never returns an error:
    ///
    /// - HTTP 2xx: `ok` with latency and status.
    /// - Any other status: not `ok`, but the round trip completed, so the
    ///   latency and status are still recorded.
    /// - Deadline exceeded: not `ok`, error is the literal `"timeout"`.
    /// - Transport failure: not `ok`, error is the transport error text.
    pub async fn measure(&self, target: &ProbeTarget) -> ProbeResult {
        if target.endpoint().is_none() {
            return ProbeResult::failure(target.clone(), "invalid endpoint URL");
        }

        let request = self
            .client
            .get(&target.url)
            .query(&[("name", QUERY_NAME), ("type", QUERY_TYPE)])
            .header(ACCEPT, DNS_JSON);

        let start = Instant::now();
        match request.send().await {
            Ok(response) => {
                let elapsed = start.elapsed().as_secs_f64() * 1000.0;
                let status = response.status();
                if status.is_success() {
                    ProbeResult::ok_result(target.clone(), elapsed, status.as_u16())
                } else {
                    tracing::debug!("Probe refused by {}: HTTP {status}", target.name);
                    ProbeResult::http_failure(target.clone(), elapsed, status.as_u16())
                }
            }
            Err(e) if e.is_timeout() => {
                tracing::debug!("Probe timed out for {}", target.name);
                ProbeResult::failure(target.clone(), "timeout")
            }
            Err(e) => {
                tracing::debug!("Probe error for {}: {e}", target.name);
                ProbeResult::failure(target.clone(), e.to_string())
            }
        }
    }

    /// Measure all targets concurrently.
    ///
    /// The target set is a handful of endpoints, so every probe is fired
    /// at once and results come back in input order.
    pub async fn measure_all(&self, targets: &[ProbeTarget]) -> Vec<ProbeResult> {
        futures::future::join_all(targets.iter().map(|t| self.measure(t))).await
    }

    /// Calculate summary statistics from results.
    #[must_use]
    pub fn summarize(results: &[ProbeResult]) -> ProbeSummary {
        let mut summary = ProbeSummary::new();
        for result in results {
            summary.add_result(result);
        }
        summary
    }
}
