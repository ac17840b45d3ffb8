//! Scraper configuration
//!
//! Loaded from `courtfetch.toml` when present, otherwise defaults that
//! target the Delhi High Court case-status site.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{CourtFetchError, Result};

/// Configuration for one scraper instance and its browser session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Search page URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Run the browser in headless mode
    #[serde(default = "default_headless")]
    pub headless: bool,

    /// Navigation and submission timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// User agent presented to the site
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Fixed pause after submission before classification, in milliseconds.
    /// Blunt by design: the result page renders client-side and exposes no
    /// completion event.
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    /// Browser window width
    #[serde(default = "default_window_width")]
    pub window_width: u32,

    /// Browser window height
    #[serde(default = "default_window_height")]
    pub window_height: u32,
}

fn default_base_url() -> String {
    "https://delhihighcourt.nic.in/app/".to_string()
}

fn default_headless() -> bool {
    true
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string()
}

fn default_settle_delay_ms() -> u64 {
    3000
}

fn default_window_width() -> u32 {
    1920
}

fn default_window_height() -> u32 {
    1080
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            headless: default_headless(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
            settle_delay_ms: default_settle_delay_ms(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl ScraperConfig {
    /// Load configuration from a TOML file, or use defaults if it does
    /// not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)
                .map_err(|e| CourtFetchError::Config(format!("Failed to parse {}: {}", path.display(), e)))
        } else {
            Ok(Self::default())
        }
    }

    /// Scheme+host prefix of `base_url`, used to resolve relative
    /// document references: "https://host/app/" -> "https://host"
    pub fn origin(&self) -> String {
        let url = &self.base_url;
        if let Some(scheme_end) = url.find("://") {
            let rest = &url[scheme_end + 3..];
            match rest.find('/') {
                Some(slash) => url[..scheme_end + 3 + slash].to_string(),
                None => url.clone(),
            }
        } else {
            url.trim_end_matches('/').to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScraperConfig::default();
        assert!(config.headless);
        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.settle_delay_ms, 3000);
        assert!(config.base_url.starts_with("https://"));
    }

    #[test]
    fn test_origin_strips_path() {
        let config = ScraperConfig {
            base_url: "https://delhihighcourt.nic.in/app/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.origin(), "https://delhihighcourt.nic.in");
    }

    #[test]
    fn test_origin_without_path() {
        let config = ScraperConfig {
            base_url: "http://example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(config.origin(), "http://example.com");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScraperConfig::load_or_default(&dir.path().join("courtfetch.toml")).unwrap();
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("courtfetch.toml");
        std::fs::write(&path, "headless = false\ntimeout_seconds = 10\n").unwrap();

        let config = ScraperConfig::load_or_default(&path).unwrap();
        assert!(!config.headless);
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.settle_delay_ms, 3000);
    }
}
