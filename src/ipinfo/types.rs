//! IP intelligence types.
//!
//! Two shapes live here: the upstream provider's raw record, decoded
//! tolerantly, and the stable [`IpReport`] the dashboard consumes. The
//! provider is a black box; its field layout never leaks past this module.

use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Network (ASN) details of the visitor's address.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct NetworkInfo {
    /// Autonomous system number
    pub asn: Option<u32>,
    /// Organization operating the network
    pub org: Option<String>,
    /// Announced route covering the address
    pub route: Option<String>,
}

/// Geolocation details of the visitor's address.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GeoInfo {
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub continent: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
}

/// Security classification flags for the visitor's address.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SecurityFlags {
    pub vpn: bool,
    pub proxy: bool,
    pub tor: bool,
    pub datacenter: bool,
    pub abuser: bool,
}

/// IP metadata report served to the dashboard.
///
/// This is the reshaped document: every visitor lookup, whatever the
/// provider answered, normalizes into this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpReport {
    /// The address that was looked up
    pub ip: String,
    pub network: NetworkInfo,
    pub location: GeoInfo,
    pub security: SecurityFlags,
}

impl IpReport {
    /// Reshape a raw provider record into a report for `ip`.
    ///
    /// The provider's echoed address wins over the queried one when
    /// present (it reflects what the provider actually resolved).
    #[must_use]
    pub fn from_provider(ip: IpAddr, record: ProviderRecord) -> Self {
        let asn = record.asn.unwrap_or_default();
        let loc = record.location.unwrap_or_default();
        Self {
            ip: record.ip.unwrap_or_else(|| ip.to_string()),
            network: NetworkInfo {
                asn: asn.asn,
                org: asn.org,
                route: asn.route,
            },
            location: GeoInfo {
                city: loc.city,
                region: loc.state,
                country: loc.country,
                country_code: loc.country_code,
                continent: loc.continent,
                latitude: loc.latitude,
                longitude: loc.longitude,
                timezone: loc.timezone,
            },
            security: SecurityFlags {
                vpn: record.is_vpn,
                proxy: record.is_proxy,
                tor: record.is_tor,
                datacenter: record.is_datacenter,
                abuser: record.is_abuser,
            },
        }
    }
}

/// Raw record as returned by the upstream intelligence provider.
///
/// Every field is optional; the provider drops sections freely depending
/// on what it knows about an address.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderRecord {
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub asn: Option<ProviderAsn>,
    #[serde(default)]
    pub location: Option<ProviderLocation>,
    #[serde(default)]
    pub is_vpn: bool,
    #[serde(default)]
    pub is_proxy: bool,
    #[serde(default)]
    pub is_tor: bool,
    #[serde(default)]
    pub is_datacenter: bool,
    #[serde(default)]
    pub is_abuser: bool,
}

/// ASN block of the provider record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderAsn {
    #[serde(default)]
    pub asn: Option<u32>,
    #[serde(default)]
    pub org: Option<String>,
    #[serde(default)]
    pub route: Option<String>,
}

/// Location block of the provider record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderLocation {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub continent: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub timezone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reshape_full_record() {
        let json = r#"{
            "ip": "203.0.113.7",
            "asn": {"asn": 13335, "org": "Cloudflare, Inc.", "route": "203.0.113.0/24"},
            "location": {
                "city": "Amsterdam",
                "state": "North Holland",
                "country": "Netherlands",
                "country_code": "NL",
                "continent": "EU",
                "latitude": 52.37,
                "longitude": 4.89,
                "timezone": "Europe/Amsterdam"
            },
            "is_vpn": true,
            "is_datacenter": true
        }"#;
        let record: ProviderRecord = serde_json::from_str(json).unwrap();
        let report = IpReport::from_provider("203.0.113.7".parse().unwrap(), record);

        assert_eq!(report.ip, "203.0.113.7");
        assert_eq!(report.network.asn, Some(13335));
        assert_eq!(report.network.org.as_deref(), Some("Cloudflare, Inc."));
        assert_eq!(report.location.city.as_deref(), Some("Amsterdam"));
        assert_eq!(report.location.region.as_deref(), Some("North Holland"));
        assert_eq!(report.location.country_code.as_deref(), Some("NL"));
        assert!(report.security.vpn);
        assert!(report.security.datacenter);
        assert!(!report.security.tor);
    }

    #[test]
    fn test_reshape_sparse_record() {
        // Provider knows nothing about the address
        let record: ProviderRecord = serde_json::from_str("{}").unwrap();
        let report = IpReport::from_provider("198.51.100.9".parse().unwrap(), record);

        assert_eq!(report.ip, "198.51.100.9");
        assert_eq!(report.network, NetworkInfo::default());
        assert_eq!(report.location, GeoInfo::default());
        assert_eq!(report.security, SecurityFlags::default());
    }

    #[test]
    fn test_reshape_ignores_unknown_provider_fields() {
        let json = r#"{"ip": "192.0.2.1", "company": {"name": "x"}, "is_crawler": false}"#;
        let record: ProviderRecord = serde_json::from_str(json).unwrap();
        let report = IpReport::from_provider("192.0.2.1".parse().unwrap(), record);
        assert_eq!(report.ip, "192.0.2.1");
    }
}
