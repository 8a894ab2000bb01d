//! Sequence similarity shared by the candidate scorer and platform resolver.
//!
//! `sequence_ratio` is the Ratcliff/Obershelp "gestalt" ratio from
//! difflib's `SequenceMatcher`: twice the number of characters in the
//! matching blocks, divided by the combined length.
//!
//! CHANGELOG:
//! - 10/16/2026 - Use difflib's SequenceMatcher for matching blocks
//! - 10/16/2026 - Added token-overlap bonus for platform names
//! - 10/16/2026 - Initial implementation

use difflib::sequencematcher::SequenceMatcher;

use super::normalize::alnum_tokens;

/// Each shared platform-name token adds this much to the ratio.
pub const TOKEN_OVERLAP_STEP: f64 = 0.05;

/// Upper bound for the token-overlap bonus.
pub const TOKEN_OVERLAP_CAP: f64 = 0.15;

/// Similarity ratio in `[0.0, 1.0]`. Two empty strings are identical.
///
/// Computed in `f64` from the matching blocks so score floors are stable.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let mut matcher: SequenceMatcher<char> = SequenceMatcher::new(&a[..], &b[..]);
    let matched: usize = matcher.get_matching_blocks().iter().map(|m| m.size).sum();
    2.0 * matched as f64 / total as f64
}

/// Similarity between two human-readable platform names.
///
/// Sequence ratio over the whitespace-joined alphanumeric tokens, plus a
/// capped bonus per exactly-shared token. Clamped to `1.0`.
pub fn platform_similarity(a: &str, b: &str) -> f64 {
    let a_tokens = alnum_tokens(a);
    let b_tokens = alnum_tokens(b);
    let ratio = sequence_ratio(&a_tokens.join(" "), &b_tokens.join(" "));

    let mut unique_a = a_tokens.clone();
    unique_a.sort();
    unique_a.dedup();
    let overlap = unique_a.iter().filter(|t| b_tokens.contains(t)).count();
    let bonus = (overlap as f64 * TOKEN_OVERLAP_STEP).min(TOKEN_OVERLAP_CAP);

    (ratio + bonus).min(1.0)
}
