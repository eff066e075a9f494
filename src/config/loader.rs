//! Resolver target list loader.
//!
//! This module provides functionality to load resolver target lists
//! from JSON files, command-line arguments, or the built-in default set.

use crate::error::{Error, Result};
use crate::probe::types::{ProbeTarget, TargetList};
use std::path::Path;

/// Built-in default resolver set: name and JSON-API endpoint.
const BUILTIN_TARGETS: &[(&str, &str)] = &[
    ("Cloudflare", "https://cloudflare-dns.com/dns-query"),
    ("Google", "https://dns.google/resolve"),
    ("Quad9", "https://dns.quad9.net:5053/dns-query"),
    ("OpenDNS", "https://doh.opendns.com/dns-query"),
    ("Mullvad", "https://dns.mullvad.net/dns-query"),
];

/// Target list loader.
///
/// Provides various methods to load and merge resolver target lists
/// from different sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// The built-in default resolver set.
    #[must_use]
    pub fn builtin() -> TargetList {
        TargetList::from_targets(
            BUILTIN_TARGETS
                .iter()
                .map(|(name, url)| ProbeTarget::new(*name, *url))
                .collect(),
        )
    }

    /// Load a target list from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let list = ConfigLoader::load_from_file("targets.json")?;
    /// for target in &list.targets {
    ///     println!("{}: {}", target.name, target.url);
    /// }
    /// ```
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<TargetList> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let list: TargetList = serde_json::from_str(&content)?;
        Ok(list)
    }

    /// Load the user's target list from the config directory, falling
    /// back to the built-in set.
    ///
    /// The user file lives at `$CONFIG_DIR/iplens/targets.json`.
    #[must_use]
    pub fn load_or_builtin() -> TargetList {
        let user_path = Self::config_dir().join("targets.json");
        Self::load_from_file(&user_path).unwrap_or_else(|_| Self::builtin())
    }

    /// Get the config directory path.
    #[must_use]
    pub fn config_dir() -> std::path::PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("iplens")
    }

    /// Merge multiple target lists into one.
    ///
    /// Combines all targets from the input lists and removes duplicates
    /// by endpoint URL.
    #[must_use]
    pub fn merge(lists: Vec<TargetList>) -> TargetList {
        let mut targets = Vec::new();
        for list in lists {
            targets.extend(list.targets);
        }
        targets.sort_by(|a, b| a.url.cmp(&b.url));
        targets.dedup_by(|a, b| a.url == b.url);
        TargetList { targets }
    }

    /// Create a custom target list from command-line arguments.
    ///
    /// # Arguments
    ///
    /// * `specs` - Vector of strings in format "URL#Name"
    ///
    /// # Errors
    ///
    /// Returns an error if any endpoint is not a valid HTTPS URL.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let args = vec!["https://dns.google/resolve#Google".to_string()];
    /// let list = ConfigLoader::from_args(args)?;
    /// ```
    pub fn from_args(specs: Vec<String>) -> Result<TargetList> {
        let mut targets = Vec::new();
        for s in specs {
            let parts: Vec<&str> = s.splitn(2, '#').collect();
            let url = parts[0].trim().to_string();
            let name = parts
                .get(1)
                .map(|s| s.trim().to_string())
                .unwrap_or_else(|| url.clone());

            let target = ProbeTarget::new(name, url);
            if !target.is_https() {
                return Err(Error::Parse(format!(
                    "Invalid HTTPS endpoint: {}",
                    target.url
                )));
            }
            targets.push(target);
        }
        Ok(TargetList { targets })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_targets() {
        let list = ConfigLoader::builtin();
        assert!(!list.is_empty());
        assert!(list.targets.iter().all(ProbeTarget::is_https));
        assert!(list.targets.iter().any(|t| t.name == "Cloudflare"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"list":[{{"name":"Google","url":"https://dns.google/resolve"}}]}}"#
        )
        .unwrap();

        let list = ConfigLoader::load_from_file(file.path()).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.targets[0].name, "Google");
    }

    #[test]
    fn test_load_from_file_missing() {
        let result = ConfigLoader::load_from_file("/nonexistent/targets.json");
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_dedups_by_url() {
        let a = TargetList::from_targets(vec![
            ProbeTarget::new("Cloudflare", "https://cloudflare-dns.com/dns-query"),
            ProbeTarget::new("Google", "https://dns.google/resolve"),
        ]);
        let b = TargetList::from_targets(vec![ProbeTarget::new(
            "CF duplicate",
            "https://cloudflare-dns.com/dns-query",
        )]);

        let merged = ConfigLoader::merge(vec![a, b]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_config_from_args() {
        let args = vec![
            "https://dns.google/resolve#Google".to_string(),
            "https://cloudflare-dns.com/dns-query#Cloudflare".to_string(),
        ];
        let list = ConfigLoader::from_args(args).unwrap();
        assert_eq!(list.targets.len(), 2);
        assert_eq!(list.targets[0].name, "Google");
        assert_eq!(list.targets[1].name, "Cloudflare");
    }

    #[test]
    fn test_config_from_args_defaults_name_to_url() {
        let args = vec!["https://dns.quad9.net:5053/dns-query".to_string()];
        let list = ConfigLoader::from_args(args).unwrap();
        assert_eq!(list.targets[0].name, list.targets[0].url);
    }

    #[test]
    fn test_config_from_args_rejects_plain_http() {
        let args = vec!["http://dns.example/query#Test".to_string()];
        let result = ConfigLoader::from_args(args);
        assert!(result.is_err());
    }
}
