//! Configuration file handling.
//!
//! Every key is optional; missing keys fall back to the built-in defaults.
//!
//! ```text
//! {
//!   "discover": { "pageCap": 2, "aboutPath": "/about", "concurrency": 2,
//!                 "fetch": { "timeoutMs": 5000 } },
//!   "patterns": { "serviceCap": 6 }
//! }
//! ```

use crate::error::{Result, SiteFactsError};
use crate::tools::aggregate::DEFAULT_PAGE_CAP;
use crate::tools::fetch::FetchOptions;
use crate::tools::patterns::PatternConfig;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub discover: DiscoverOptions,
    pub patterns: PatternConfig,
}

/// Knobs for a site discovery run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiscoverOptions {
    /// Pages fetched and aggregated per site.
    pub page_cap: usize,
    pub about_path: String,
    /// Concurrent page fetches.
    pub concurrency: usize,
    pub fetch: FetchOptions,
}

impl Default for DiscoverOptions {
    fn default() -> Self {
        Self {
            page_cap: DEFAULT_PAGE_CAP,
            about_path: "/about".into(),
            concurrency: 2,
            fetch: FetchOptions::default(),
        }
    }
}

impl Config {
    /// `<config_dir>/config.json`, if a config dir can be resolved.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "sitefacts", "sitefacts")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Effective configuration: the explicit file if given, else the default
    /// file when it exists, else built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let file = fs::File::open(path).map_err(|e| {
            SiteFactsError::Config(format!("cannot open {}: {e}", path.display()))
        })?;
        let config: Config = serde_json::from_reader(file).map_err(|e| {
            SiteFactsError::Config(format!("invalid config {}: {e}", path.display()))
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let opts = DiscoverOptions::default();
        assert_eq!(opts.page_cap, 2);
        assert_eq!(opts.about_path, "/about");
        assert_eq!(opts.concurrency, 2);
        assert_eq!(opts.fetch.timeout_ms, 5_000);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = std::env::temp_dir().join(format!("sitefacts-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        fs::write(
            &path,
            r#"{"discover": {"pageCap": 1, "fetch": {"timeoutMs": 800}}, "patterns": {"serviceCap": 4}}"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.discover.page_cap, 1);
        assert_eq!(config.discover.about_path, "/about");
        assert_eq!(config.discover.fetch.timeout_ms, 800);
        assert_eq!(config.discover.fetch.redirect_limit, 10);
        assert_eq!(config.patterns.service_cap, 4);
        assert_eq!(config.patterns.testimonial_cap, 5);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_or_malformed_file_is_config_error() {
        let missing = std::env::temp_dir().join("sitefacts-no-such-config.json");
        assert!(matches!(
            Config::load(Some(&missing)),
            Err(SiteFactsError::Config(_))
        ));

        let dir = std::env::temp_dir().join(format!("sitefacts-badconfig-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            Config::from_file(&path),
            Err(SiteFactsError::Config(_))
        ));
        fs::remove_dir_all(&dir).unwrap();
    }
}
