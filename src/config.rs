//! Configuration file loading and path resolution.
//!
//! Config file lookup:
//! 1. `--config` CLI flag
//! 2. MISTER_BOXART_CONFIG env var
//! 3. `<config_dir>/mister-boxart/config.toml`
//! 4. Built-in defaults (a missing file is not an error)
//!
//! CHANGELOG:
//! - 10/16/2026 - Added presence asset table
//! - 10/16/2026 - Initial implementation

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{BoxartError, Result};
use crate::matching::scorer::ScoringWeights;
use crate::platform::alias_map::DEFAULT_ALIAS_THRESHOLD;
use crate::platform::resolver::DEFAULT_PLATFORM_THRESHOLD;

pub const CONFIG_ENV: &str = "MISTER_BOXART_CONFIG";
pub const CACHE_ENV: &str = "MISTER_BOXART_CACHE";
const APP_DIR: &str = "mister-boxart";
const CACHE_FILE: &str = "boxart_cache.txt";

/// Acceptance thresholds for the match selector and platform resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchThresholds {
    /// Minimum score when the search was scoped to the hinted platform.
    pub scoped_threshold: i32,
    /// Minimum score when the search ran across every platform.
    pub unscoped_threshold: i32,
    /// Minimum similarity for a fuzzy platform-folder resolution (0-1).
    pub platform_threshold: f64,
    /// Minimum similarity for a curated name to enter the alias map (0-1).
    pub alias_threshold: f64,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            scoped_threshold: 80,
            unscoped_threshold: 90,
            platform_threshold: DEFAULT_PLATFORM_THRESHOLD,
            alias_threshold: DEFAULT_ALIAS_THRESHOLD,
        }
    }
}

/// Everything the engine needs besides the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchConfig {
    pub thresholds: MatchThresholds,
    pub weights: ScoringWeights,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenceConfig {
    /// Asset key used when no box art matches.
    pub fallback_image: String,
    /// System or core name → small-image asset key.
    pub assets: BTreeMap<String, String>,
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self {
            fallback_image: "mister".to_string(),
            assets: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog_path: Option<PathBuf>,
    pub matching: MatchThresholds,
    pub scoring: ScoringWeights,
    pub presence: PresenceConfig,
}

impl Config {
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            thresholds: self.matching.clone(),
            weights: self.scoring.clone(),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the first config file found, or fall back to defaults.
    ///
    /// An explicitly requested file must exist.
    pub fn resolve(cli_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = cli_path {
            return Self::load(path);
        }
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        let t = &self.matching;
        for (name, value) in [
            ("platform_threshold", t.platform_threshold),
            ("alias_threshold", t.alias_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(BoxartError::Config(format!(
                    "{} must be between 0 and 1, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Box art cache path.
    ///
    /// CLI flag, then MISTER_BOXART_CACHE, then `catalog_path`, then
    /// `<data_local_dir>/mister-boxart/boxart_cache.txt`.
    pub fn catalog_path(&self, cli_path: Option<&Path>) -> PathBuf {
        if let Some(path) = cli_path {
            return path.to_path_buf();
        }
        if let Ok(path) = std::env::var(CACHE_ENV) {
            return PathBuf::from(path);
        }
        if let Some(path) = &self.catalog_path {
            return path.clone();
        }
        default_cache_path()
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
}

pub fn default_cache_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CACHE_FILE)
}
