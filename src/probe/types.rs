//! Probe types and data structures.
//!
//! This module provides the core types used for resolver target
//! representation, latency measurement results, and aggregate summaries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// DNS-over-HTTPS resolver target.
///
/// Represents a single named upstream endpoint that answers DNS queries
/// over HTTPS with a JSON API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProbeTarget {
    /// Target name (e.g., "Cloudflare", "Google")
    pub name: String,
    /// HTTPS endpoint URL of the resolver's JSON query API
    pub url: String,
}

impl ProbeTarget {
    /// Create a new probe target.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let target = ProbeTarget::new("Cloudflare", "https://cloudflare-dns.com/dns-query");
    /// ```
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Parse the endpoint string into a [`Url`].
    ///
    /// Returns `Some(Url)` if parsing succeeds, `None` otherwise.
    #[must_use]
    pub fn endpoint(&self) -> Option<Url> {
        self.url.parse().ok()
    }

    /// Check if the endpoint is a valid HTTPS URL.
    #[must_use]
    pub fn is_https(&self) -> bool {
        self.endpoint().is_some_and(|u| u.scheme() == "https")
    }
}

/// Resolver target list container.
///
/// Represents a collection of probe targets, typically loaded from
/// a JSON configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetList {
    /// List of resolver targets
    #[serde(rename = "list")]
    pub targets: Vec<ProbeTarget>,
}

impl TargetList {
    /// Create a new empty target list.
    #[must_use]
    pub fn new() -> Self {
        Self { targets: vec![] }
    }

    /// Create a target list from a vector of targets.
    #[must_use]
    pub fn from_targets(targets: Vec<ProbeTarget>) -> Self {
        Self { targets }
    }

    /// Get the number of targets in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Check if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl Default for TargetList {
    fn default() -> Self {
        Self::new()
    }
}

/// Latency probe result.
///
/// The uniform outcome shape for a single timed request against one
/// resolver target. Both success and failure paths normalize into this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeResult {
    /// The target that was probed
    pub target: ProbeTarget,
    /// Whether the probe completed with an HTTP success status
    pub ok: bool,
    /// Wall-clock latency in milliseconds (None if the exchange never completed)
    pub latency_ms: Option<f64>,
    /// HTTP status code of the upstream response, when one was received
    pub http_status: Option<u16>,
    /// Error message if the probe failed
    pub error: Option<String>,
    /// When the probe was taken
    pub checked_at: DateTime<Utc>,
}

impl ProbeResult {
    /// Create a successful result.
    #[must_use]
    pub fn ok_result(target: ProbeTarget, latency_ms: f64, http_status: u16) -> Self {
        Self {
            target,
            ok: true,
            latency_ms: Some(latency_ms),
            http_status: Some(http_status),
            error: None,
            checked_at: Utc::now(),
        }
    }

    /// Create a result for a completed exchange with a non-success status.
    ///
    /// The latency is still meaningful here: the round trip finished,
    /// the resolver just refused the query.
    #[must_use]
    pub fn http_failure(target: ProbeTarget, latency_ms: f64, http_status: u16) -> Self {
        Self {
            target,
            ok: false,
            latency_ms: Some(latency_ms),
            http_status: Some(http_status),
            error: Some(format!("HTTP {http_status}")),
            checked_at: Utc::now(),
        }
    }

    /// Create a failed result with no completed exchange.
    pub fn failure(target: ProbeTarget, error: impl Into<String>) -> Self {
        Self {
            target,
            ok: false,
            latency_ms: None,
            http_status: None,
            error: Some(error.into()),
            checked_at: Utc::now(),
        }
    }

    /// Check if the result indicates a timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        !self.ok && matches!(self.error.as_deref(), Some("timeout"))
    }
}

/// Overall probe summary statistics.
///
/// Aggregated results from measuring multiple resolver targets.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProbeSummary {
    /// Total number of targets probed
    pub total: usize,
    /// Number of successful probes
    pub ok: usize,
    /// Number of failed probes
    pub failed: usize,
    /// Number of timeouts
    pub timeout: usize,
    /// Average latency in milliseconds over successful probes
    pub avg_latency: Option<f64>,
    /// Minimum latency in milliseconds
    pub min_latency: Option<f64>,
    /// Maximum latency in milliseconds
    pub max_latency: Option<f64>,
}

impl ProbeSummary {
    /// Create a new empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a probe result to the summary.
    pub fn add_result(&mut self, result: &ProbeResult) {
        self.total += 1;
        if result.ok {
            self.ok += 1;
            if let Some(latency) = result.latency_ms {
                self.avg_latency = Some(
                    self.avg_latency
                        .map(|a| a.mul_add((self.ok - 1) as f64, latency) / self.ok as f64)
                        .unwrap_or(latency),
                );
                self.min_latency =
                    Some(self.min_latency.map(|m| m.min(latency)).unwrap_or(latency));
                self.max_latency =
                    Some(self.max_latency.map(|m| m.max(latency)).unwrap_or(latency));
            }
        } else if result.is_timeout() {
            self.timeout += 1;
        } else {
            self.failed += 1;
        }
    }

    /// Calculate success rate as a percentage.
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.ok as f64 / self.total as f64) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_target_creation() {
        let target = ProbeTarget::new("Cloudflare", "https://cloudflare-dns.com/dns-query");
        assert_eq!(target.name, "Cloudflare");
        assert_eq!(target.url, "https://cloudflare-dns.com/dns-query");
        assert!(target.is_https());
    }

    #[test]
    fn test_probe_target_endpoint_parse() {
        let target = ProbeTarget::new("Google", "https://dns.google/resolve");
        let endpoint = target.endpoint();
        assert!(endpoint.is_some());
        assert_eq!(endpoint.unwrap().host_str(), Some("dns.google"));

        let bad = ProbeTarget::new("Broken", "not a url");
        assert!(bad.endpoint().is_none());
        assert!(!bad.is_https());

        let plain = ProbeTarget::new("Plain", "http://dns.example/query");
        assert!(plain.endpoint().is_some());
        assert!(!plain.is_https());
    }

    #[test]
    fn test_target_list() {
        let list = TargetList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        let targets = vec![
            ProbeTarget::new("Cloudflare", "https://cloudflare-dns.com/dns-query"),
            ProbeTarget::new("Google", "https://dns.google/resolve"),
        ];
        let list = TargetList::from_targets(targets);
        assert!(!list.is_empty());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_target_list_json_shape() {
        let json = r#"{"list":[{"name":"Quad9","url":"https://dns.quad9.net:5053/dns-query"}]}"#;
        let list: TargetList = serde_json::from_str(json).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.targets[0].name, "Quad9");
    }

    #[test]
    fn test_probe_result_constructors() {
        let target = ProbeTarget::new("Test", "https://dns.example/query");

        let ok = ProbeResult::ok_result(target.clone(), 12.5, 200);
        assert!(ok.ok);
        assert_eq!(ok.latency_ms, Some(12.5));
        assert_eq!(ok.http_status, Some(200));
        assert!(ok.error.is_none());

        let refused = ProbeResult::http_failure(target.clone(), 30.0, 503);
        assert!(!refused.ok);
        assert_eq!(refused.latency_ms, Some(30.0));
        assert_eq!(refused.error.as_deref(), Some("HTTP 503"));
        assert!(!refused.is_timeout());

        let timed_out = ProbeResult::failure(target, "timeout");
        assert!(!timed_out.ok);
        assert!(timed_out.latency_ms.is_none());
        assert!(timed_out.http_status.is_none());
        assert!(timed_out.is_timeout());
    }

    #[test]
    fn test_probe_summary() {
        let target = ProbeTarget::new("Test", "https://dns.example/query");
        let result1 = ProbeResult::ok_result(target.clone(), 10.0, 200);
        let result2 = ProbeResult::ok_result(target.clone(), 20.0, 200);
        let result3 = ProbeResult::failure(target.clone(), "timeout");
        let result4 = ProbeResult::http_failure(target, 15.0, 500);

        let mut summary = ProbeSummary::new();
        for result in [&result1, &result2, &result3, &result4] {
            summary.add_result(result);
        }

        assert_eq!(summary.total, 4);
        assert_eq!(summary.ok, 2);
        assert_eq!(summary.timeout, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.avg_latency, Some(15.0));
        assert_eq!(summary.min_latency, Some(10.0));
        assert_eq!(summary.max_latency, Some(20.0));
        assert!((summary.success_rate() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_probe_summary_empty() {
        let summary = ProbeSummary::new();
        assert_eq!(summary.total, 0);
        assert!(summary.avg_latency.is_none());
        assert!((summary.success_rate() - 0.0).abs() < f64::EPSILON);
    }
}
