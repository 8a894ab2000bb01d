//! Text normalization for titles, filenames, and platform names.
//!
//! CHANGELOG:
//! - 10/16/2026 - Added qualifier and base-token extraction
//! - 10/16/2026 - Initial implementation

use regex::Regex;
use std::sync::OnceLock;

/// Lowercase, alphanumeric-only projection of `text`.
///
/// Total: empty input yields an empty key.
pub fn normalize_key(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Filename without its extension.
///
/// Only a short alphanumeric suffix counts as an extension, so a bare title
/// like "Super Mario Bros. 3" keeps its trailing segment.
pub fn file_stem(filename: &str) -> &str {
    match filename.rsplit_once('.') {
        Some((stem, ext))
            if !stem.is_empty()
                && !ext.is_empty()
                && ext.len() <= 4
                && ext.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            stem
        }
        _ => filename,
    }
}

fn paren_regex() -> Option<&'static Regex> {
    static PAREN: OnceLock<Option<Regex>> = OnceLock::new();
    PAREN
        .get_or_init(|| Regex::new(r"\(([^)]*)\)").ok())
        .as_ref()
}

/// Lowercased, trimmed contents of every `( ... )` group in `stem`.
pub fn paren_tokens(stem: &str) -> Vec<String> {
    let Some(re) = paren_regex() else {
        return Vec::new();
    };
    re.captures_iter(stem)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().trim().to_lowercase())
        .collect()
}

/// Alphanumeric words outside any parenthetical group, lowercased, keeping
/// only those at least `min_len` characters long.
pub fn base_tokens(title: &str, min_len: usize) -> Vec<String> {
    let stripped = match paren_regex() {
        Some(re) => re.replace_all(title, " ").into_owned(),
        None => title.to_string(),
    };
    alnum_tokens(&stripped)
        .into_iter()
        .filter(|t| t.chars().count() >= min_len)
        .collect()
}

/// Split into lowercase alphanumeric runs.
pub fn alnum_tokens(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_key_strips_case_and_punctuation() {
        assert_eq!(
            normalize_key("Street Fighter II"),
            normalize_key("STREET-FIGHTER_II")
        );
        assert_eq!(normalize_key("Street Fighter II"), "streetfighterii");
    }

    #[test]
    fn test_normalize_key_is_idempotent() {
        for input in ["Chrono Trigger (USA)", "", "  ", "Pokémon: Red!", "F-Zero X"] {
            let once = normalize_key(input);
            assert_eq!(normalize_key(&once), once, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_normalize_key_empty() {
        assert_eq!(normalize_key(""), "");
        assert_eq!(normalize_key("!!! ---"), "");
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("Chrono Trigger (USA).png"), "Chrono Trigger (USA)");
        assert_eq!(file_stem("Super Mario Bros. 3"), "Super Mario Bros. 3");
        assert_eq!(file_stem("Super Mario Bros. 3.png"), "Super Mario Bros. 3");
        assert_eq!(file_stem("noext"), "noext");
        assert_eq!(file_stem(".png"), ".png");
    }

    #[test]
    fn test_paren_tokens() {
        let toks = paren_tokens("Super Metroid (Japan, USA) (Rev 1)");
        assert_eq!(toks, vec!["japan, usa".to_string(), "rev 1".to_string()]);
        assert!(paren_tokens("Tetris").is_empty());
    }

    #[test]
    fn test_base_tokens_skip_parentheticals_and_short_words() {
        let toks = base_tokens("Mega Man X (USA)", 4);
        assert_eq!(toks, vec!["mega".to_string()]);
        let toks = base_tokens("The Legend of Zelda", 4);
        assert_eq!(toks, vec!["legend".to_string(), "zelda".to_string()]);
    }
}
