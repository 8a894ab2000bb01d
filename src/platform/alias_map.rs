//! Derived alias map: human-friendly platform names → cache folders.
//!
//! Built once from the folders a loaded cache actually contains. Rebuild it
//! whenever the cache is reloaded.
//!
//! CHANGELOG:
//! - 10/16/2026 - Layered abbreviation overrides on top of curated matches
//! - 10/16/2026 - Initial implementation

use std::collections::BTreeMap;

use tracing::debug;

use super::tables::{ABBREVIATION_OVERRIDES, PRETTY_PLATFORM_NAMES};
use crate::matching::normalize::{alnum_tokens, normalize_key};
use crate::matching::similarity::{platform_similarity, sequence_ratio};

/// Default minimum similarity for a curated name to claim a folder.
pub const DEFAULT_ALIAS_THRESHOLD: f64 = 0.75;

/// Best-scoring folder for `name`, with its similarity.
///
/// Ties on similarity go to the higher raw sequence ratio, then to the first
/// folder in iteration order.
pub fn best_folder<'a, I>(name: &str, folders: I) -> Option<(&'a str, f64)>
where
    I: IntoIterator<Item = &'a str>,
{
    let name_joined = alnum_tokens(name).join(" ");
    let mut best: Option<(&'a str, f64, f64)> = None;
    for folder in folders {
        let similarity = platform_similarity(name, folder);
        let ratio = sequence_ratio(&name_joined, &alnum_tokens(folder).join(" "));
        let better = match best {
            None => true,
            Some((_, best_sim, best_ratio)) => {
                similarity > best_sim || (similarity == best_sim && ratio > best_ratio)
            }
        };
        if better {
            best = Some((folder, similarity, ratio));
        }
    }
    best.map(|(folder, similarity, _)| (folder, similarity))
}

/// Alias (normalized) → cache folder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlatformAliasMap {
    aliases: BTreeMap<String, String>,
}

impl PlatformAliasMap {
    /// Build from the cache's folder set.
    ///
    /// Every value is one of `folders`.
    pub fn build<'a, I>(folders: I, threshold: f64) -> Self
    where
        I: IntoIterator<Item = &'a str>,
        I::IntoIter: Clone,
    {
        let folders = folders.into_iter();
        let mut aliases = BTreeMap::new();
        let mut curated: BTreeMap<&str, &str> = BTreeMap::new();

        for pretty in PRETTY_PLATFORM_NAMES {
            match best_folder(pretty, folders.clone()) {
                Some((folder, score)) if score >= threshold => {
                    curated.insert(*pretty, folder);
                    aliases.insert(normalize_key(pretty), folder.to_string());
                }
                Some((folder, score)) => {
                    debug!(pretty, folder, score, "Curated platform name below threshold");
                }
                None => {}
            }
        }

        for (abbr, pretty) in ABBREVIATION_OVERRIDES {
            match curated.get(pretty) {
                Some(folder) => {
                    aliases.insert(normalize_key(abbr), folder.to_string());
                }
                None => debug!(abbr, pretty, "Dropping override for unresolved platform name"),
            }
        }

        Self { aliases }
    }

    /// Exact lookup on the normalized hint.
    pub fn get(&self, hint: &str) -> Option<&str> {
        self.aliases.get(&normalize_key(hint)).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
