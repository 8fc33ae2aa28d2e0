// src/digest.rs
use crate::ingest::types::NewsItem;

/// Ordered subject -> items mapping. Subjects keep insertion order, items
/// keep feed order (newest first, as received). Built fresh each run.
#[derive(Debug, Clone, Default)]
pub struct DigestMap {
    entries: Vec<(String, Vec<NewsItem>)>,
}

impl DigestMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the item list for `key`. A replaced key keeps its
    /// original position.
    pub fn insert(&mut self, key: impl Into<String>, items: Vec<NewsItem>) {
        let key = key.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = items;
        } else {
            self.entries.push((key, items));
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[NewsItem])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.entries.iter().map(|(_, v)| v.len()).sum()
    }
}

/// Serialize the digest into the dense block handed to the summarizer: the
/// subject key alone on its own line, then up to `per_subject_cap` lines of
/// `- date | title | url` in stored order. No blank lines between subjects,
/// to keep the token count down. `|` inside a title is passed through
/// verbatim; the consumer tolerates the ambiguity.
pub fn encode_compact(map: &DigestMap, per_subject_cap: usize) -> String {
    let mut lines = Vec::new();
    for (key, items) in map.iter() {
        lines.push(key.to_string());
        for item in items.iter().take(per_subject_cap) {
            lines.push(format!(
                "- {} | {} | {}",
                item.published_at, item.title, item.url
            ));
        }
    }
    lines.join("\n")
}
