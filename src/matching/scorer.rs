//! Candidate scoring: how well one catalog filename fits a query title.
//!
//! A base score from the key relationship (equal / prefix / substring /
//! fuzzy) is adjusted by the parenthetical qualifiers on the candidate, a
//! base-token gate, and a length-deviation penalty.
//!
//! CHANGELOG:
//! - 10/16/2026 - Extraneous-annotation penalty skips already-penalized tokens
//! - 10/16/2026 - Initial implementation

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::normalize::{base_tokens, normalize_key, paren_tokens};
use super::similarity::sequence_ratio;

/// Qualifiers marking variants that should essentially never win.
pub const BAD_QUALIFIERS: &[&str] = &[
    "demo",
    "kiosk",
    "beta",
    "prototype",
    "proto",
    "sample",
    "prerelease",
    "trial",
    "review",
    "event",
    "not for resale",
];

/// Revision/alternate markers: discouraged, not disqualifying.
pub const SOFT_QUALIFIERS: &[&str] = &["rev", "alt"];

pub const REGION_WORDS: &[&str] = &[
    "usa",
    "europe",
    "japan",
    "world",
    "asia",
    "korea",
    "australia",
    "canada",
    "brazil",
];

/// Point values used by the scorer. Every field defaults to the tuned value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub exact: i32,
    pub prefix: i32,
    pub substring: i32,
    /// Multiplier for the fuzzy ratio when no containment relation holds.
    pub fuzzy_scale: i32,
    pub region_bonus: i32,
    pub bad_qualifier_penalty: i32,
    pub soft_qualifier_penalty: i32,
    /// Per extraneous parenthetical token.
    pub extra_annotation_penalty: i32,
    pub base_token_penalty: i32,
    pub base_token_min_len: usize,
    /// Characters of excess stem length per penalty point.
    pub length_step: usize,
    pub length_max_penalty: i32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            exact: 100,
            prefix: 96,
            substring: 92,
            fuzzy_scale: 60,
            region_bonus: 5,
            bad_qualifier_penalty: 30,
            soft_qualifier_penalty: 5,
            extra_annotation_penalty: 3,
            base_token_penalty: 40,
            base_token_min_len: 4,
            length_step: 10,
            length_max_penalty: 5,
        }
    }
}

/// Everything about the query the scorer needs, computed once per lookup.
#[derive(Debug, Clone)]
pub struct QueryProfile {
    pub key: String,
    pub regions: BTreeSet<&'static str>,
    pub stem_len: usize,
    pub base_tokens: Vec<String>,
}

impl QueryProfile {
    pub fn new(title: &str, weights: &ScoringWeights) -> Self {
        let title = title.trim();
        Self {
            key: normalize_key(title),
            regions: regions_in(&paren_tokens(title)),
            stem_len: title.chars().count(),
            base_tokens: base_tokens(title, weights.base_token_min_len),
        }
    }
}

fn region_words_in(token: &str) -> impl Iterator<Item = &'static str> + '_ {
    REGION_WORDS.iter().copied().filter(move |r| token.contains(r))
}

fn regions_in(tokens: &[String]) -> BTreeSet<&'static str> {
    tokens.iter().flat_map(|t| region_words_in(t)).collect()
}

fn contains_any(token: &str, words: &[&str]) -> bool {
    words.iter().any(|w| token.contains(w))
}

/// Scores candidates against a `QueryProfile`. Pure and deterministic.
#[derive(Debug, Clone, Default)]
pub struct CandidateScorer {
    weights: ScoringWeights,
}

impl CandidateScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score one candidate, given its filename stem and cached key.
    pub fn score(&self, stem: &str, key: &str, query: &QueryProfile) -> i32 {
        let w = &self.weights;
        let mut score = self.base_score(key, &query.key);

        let tokens = paren_tokens(stem);
        let blob = tokens.join(" ");

        let candidate_regions = regions_in(&tokens);
        if !query.regions.is_disjoint(&candidate_regions) {
            score += w.region_bonus;
        }

        if contains_any(&blob, BAD_QUALIFIERS) {
            score -= w.bad_qualifier_penalty;
        }
        if contains_any(&blob, SOFT_QUALIFIERS) {
            score -= w.soft_qualifier_penalty;
        }

        let extraneous = tokens
            .iter()
            .filter(|t| region_words_in(t).next().is_none())
            .filter(|t| !contains_any(t, BAD_QUALIFIERS) && !contains_any(t, SOFT_QUALIFIERS))
            .count();
        score -= w.extra_annotation_penalty * extraneous as i32;

        if !query.base_tokens.is_empty()
            && !query.base_tokens.iter().any(|t| key.contains(t.as_str()))
        {
            score -= w.base_token_penalty;
        }

        score -= self.length_penalty(stem.chars().count(), query.stem_len);
        score
    }

    fn base_score(&self, key: &str, query_key: &str) -> i32 {
        let w = &self.weights;
        if key == query_key {
            w.exact
        } else if !key.is_empty()
            && !query_key.is_empty()
            && (key.starts_with(query_key) || query_key.starts_with(key))
        {
            w.prefix
        } else if !query_key.is_empty() && key.contains(query_key) {
            w.substring
        } else {
            (w.fuzzy_scale as f64 * sequence_ratio(query_key, key)).floor() as i32
        }
    }

    fn length_penalty(&self, stem_len: usize, query_len: usize) -> i32 {
        let w = &self.weights;
        if w.length_step == 0 {
            return 0;
        }
        let excess = stem_len.saturating_sub(query_len) / w.length_step;
        (excess.min(i32::MAX as usize) as i32).min(w.length_max_penalty)
    }
}
