use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;
use unicode_normalization::UnicodeNormalization;

use crate::vocabulary::is_ignored;

static WORD_RE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"\b\w+\b").ok());

fn nfkc_lower(text: &str) -> String {
    text.nfkc().collect::<String>().to_lowercase()
}

/// Split text into lowercase word tokens.
///
/// Never-fails contract: if the word pattern is unavailable the splitter
/// degrades to a manual character scan instead of surfacing an error.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = nfkc_lower(text);

    match WORD_RE.as_ref() {
        Some(re) => re
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect(),
        None => {
            warn!("word pattern unavailable, using fallback splitter");
            fallback_split(&lowered)
        }
    }
}

fn fallback_split(lowered: &str) -> Vec<String> {
    lowered
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Filter tokens down to plausible keywords: longer than two characters,
/// purely alphabetic, and not in the stop-word/ignore-word set.
pub fn clean_tokens(tokens: &[String]) -> Vec<String> {
    tokens
        .iter()
        .filter(|token| {
            token.len() > 2
                && token.chars().all(|c| c.is_alphabetic())
                && !is_ignored(token)
        })
        .cloned()
        .collect()
}
