// src/ingest/types.rs
use crate::error::FetchError;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct NewsItem {
    pub title: String,
    pub url: String,
    pub published_at: String, // short display token, e.g. "08/05 14:30"
}

#[async_trait::async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch up to `max_items` recent items for a search query.
    async fn fetch(&self, query: &str, max_items: usize) -> Result<Vec<NewsItem>, FetchError>;
    fn name(&self) -> &'static str;
}
