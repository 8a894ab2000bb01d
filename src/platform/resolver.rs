//! Platform hint canonicalization.
//!
//! Strategies are tried in order; the first hit wins:
//! 1. static map of MiSTer system names
//! 2. derived alias map
//! 3. case-insensitive folder name
//! 4. fuzzy folder match above the platform threshold
//!
//! CHANGELOG:
//! - 10/16/2026 - Added suggestions for unrecognized hints
//! - 10/16/2026 - Initial implementation

use serde::Serialize;
use strsim::jaro_winkler;
use tracing::info;

use super::alias_map::{best_folder, PlatformAliasMap};
use super::tables::static_folder;

/// Default minimum similarity for a fuzzy folder match.
pub const DEFAULT_PLATFORM_THRESHOLD: f64 = 0.80;

/// Which resolution strategy produced a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Static,
    Alias,
    FolderExact,
    Fuzzy,
}

impl Strategy {
    pub const ORDER: [Strategy; 4] = [
        Strategy::Static,
        Strategy::Alias,
        Strategy::FolderExact,
        Strategy::Fuzzy,
    ];
}

/// A resolved platform hint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub folder: String,
    pub strategy: Strategy,
    /// Similarity for fuzzy resolutions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Resolves platform hints against one cache's folder set.
#[derive(Debug, Clone)]
pub struct PlatformResolver {
    folders: Vec<String>,
    aliases: PlatformAliasMap,
    threshold: f64,
}

impl PlatformResolver {
    /// Build the resolver and its alias map from the cache's folders.
    pub fn build<'a, I>(folders: I, alias_threshold: f64, platform_threshold: f64) -> Self
    where
        I: IntoIterator<Item = &'a str>,
        I::IntoIter: Clone,
    {
        let folders = folders.into_iter();
        let aliases = PlatformAliasMap::build(folders.clone(), alias_threshold);
        Self {
            folders: folders.map(str::to_string).collect(),
            aliases,
            threshold: platform_threshold,
        }
    }

    pub fn aliases(&self) -> &PlatformAliasMap {
        &self.aliases
    }

    pub fn folders(&self) -> &[String] {
        &self.folders
    }

    /// Canonicalize `hint` to a cache folder, or `None` when unrecognized.
    pub fn resolve(&self, hint: &str) -> Option<Resolution> {
        let hint = hint.trim();
        if hint.is_empty() {
            return None;
        }
        let resolution = Strategy::ORDER
            .iter()
            .find_map(|strategy| self.try_strategy(*strategy, hint));
        if resolution.is_none() {
            info!(hint, "Platform hint not recognized; searching all platforms");
        }
        resolution
    }

    fn try_strategy(&self, strategy: Strategy, hint: &str) -> Option<Resolution> {
        let (folder, score) = match strategy {
            Strategy::Static => (static_folder(hint)?.to_string(), None),
            Strategy::Alias => (self.aliases.get(hint)?.to_string(), None),
            Strategy::FolderExact => {
                let lower = hint.to_lowercase();
                let folder = self.folders.iter().find(|f| f.to_lowercase() == lower)?;
                (folder.clone(), None)
            }
            Strategy::Fuzzy => {
                let (folder, score) =
                    best_folder(hint, self.folders.iter().map(String::as_str))?;
                if score < self.threshold {
                    return None;
                }
                (folder.to_string(), Some(score))
            }
        };
        Some(Resolution {
            folder,
            strategy,
            score,
        })
    }

    /// Up to `n` folders closest to `hint`, for "did you mean" output.
    pub fn suggest(&self, hint: &str, n: usize) -> Vec<(&str, f64)> {
        let hint_lower = hint.trim().to_lowercase();
        let mut scored: Vec<(&str, f64)> = self
            .folders
            .iter()
            .map(|f| (f.as_str(), jaro_winkler(&hint_lower, &f.to_lowercase())))
            .collect();
        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        scored.truncate(n);
        scored
    }
}
