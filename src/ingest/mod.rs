// src/ingest/mod.rs
pub mod providers;
pub mod types;

use std::collections::HashSet;

use once_cell::sync::OnceCell;
use regex::Regex;

use crate::ingest::types::NewsItem;

/// Low-information words dropped from headline keys (whole-word matches).
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "nor", "so", "yet", "as", "at", "by", "for", "from",
    "in", "into", "of", "on", "onto", "over", "to", "with",
];

/// Reduce a headline to its comparison key: lowercase, every run of
/// non-alphanumeric characters (hyphens, dashes, pipes, bullets, other
/// punctuation) collapses to one space, stop-words go, whitespace collapses.
pub fn title_key(title: &str) -> String {
    static RE_SEP: OnceCell<Regex> = OnceCell::new();
    let re_sep = RE_SEP.get_or_init(|| Regex::new(r"[^\p{L}\p{N}]+").unwrap());

    let lowered = title.to_lowercase();
    let spaced = re_sep.replace_all(&lowered, " ");
    spaced
        .split_whitespace()
        .filter(|w| !STOP_WORDS.contains(w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Drop items with blank titles/urls and collapse near-duplicate headlines.
/// First occurrence wins; relative order of survivors is preserved. Seen keys
/// live only for the duration of the call.
pub fn dedupe(items: Vec<NewsItem>) -> Vec<NewsItem> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut kept = Vec::with_capacity(items.len());
    for item in items {
        if item.title.trim().is_empty() || item.url.trim().is_empty() {
            continue;
        }
        // A pure-punctuation title keys to "" and still claims that key, so
        // later all-punctuation titles are dropped as its duplicates.
        if seen.insert(title_key(&item.title)) {
            kept.push(item);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_collapses_separators_and_case() {
        assert_eq!(title_key("Dow | Futures — Up!"), "dow futures up");
        assert_eq!(title_key("  Fed   cuts  rates  "), "fed cuts rates");
    }

    #[test]
    fn key_drops_stop_words_as_whole_words_only() {
        assert_eq!(title_key("The Fed and the Markets"), "fed markets");
        // "theory" keeps its leading "the"
        assert_eq!(title_key("Theory of Rates"), "theory rates");
    }

    #[test]
    fn pure_punctuation_keys_to_empty() {
        assert_eq!(title_key("?!* --"), "");
    }
}
