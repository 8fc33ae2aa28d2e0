// src/ingest/providers/google_news.rs
use std::time::Duration;

use async_trait::async_trait;
use chrono::TimeZone;
use quick_xml::de::from_str;
use serde::Deserialize;

use crate::error::FetchError;
use crate::ingest::types::{FeedSource, NewsItem};

const FEED_URL: &str = "https://news.google.com/rss/search";

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    item: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
    link: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
}

fn parse_rfc2822_to_unix(ts: &str) -> i64 {
    chrono::DateTime::parse_from_rfc2822(ts)
        .map(|dt| dt.timestamp())
        .unwrap_or(0)
}

/// Feed titles arrive HTML-flavored; decode entities and strip tags.
fn clean_title(raw: &str) -> String {
    static RE_TAGS: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
    let re_tags = RE_TAGS.get_or_init(|| regex::Regex::new(r"(?is)</?[^>]+>").unwrap());

    let decoded = html_escape::decode_html_entities(raw).to_string();
    let stripped = re_tags.replace_all(&decoded, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Google News search RSS, one query per fetch.
pub struct GoogleNewsSource {
    http: reqwest::Client,
    tz: chrono_tz::Tz,
}

impl GoogleNewsSource {
    pub fn new(tz: chrono_tz::Tz) -> Self {
        let http = reqwest::Client::builder()
            .user_agent("ticker-digest/0.1")
            .connect_timeout(Duration::from_secs(4))
            .timeout(Duration::from_secs(10))
            .build()
            .expect("reqwest client");
        Self { http, tz }
    }

    fn short_date(&self, unix: i64) -> String {
        match chrono::Utc.timestamp_opt(unix.max(0), 0) {
            chrono::LocalResult::Single(dt) => {
                dt.with_timezone(&self.tz).format("%m/%d %H:%M").to_string()
            }
            _ => String::new(),
        }
    }

    /// Parse one RSS document into items. Separated from the HTTP call so
    /// fixture XML can drive it in tests.
    pub fn parse_feed(&self, xml: &str, max_items: usize) -> Result<Vec<NewsItem>, FetchError> {
        let rss: Rss = from_str(xml)?;
        let mut out = Vec::new();
        for it in rss.channel.item {
            if out.len() == max_items {
                break;
            }
            let title = clean_title(it.title.as_deref().unwrap_or_default());
            let url = it.link.unwrap_or_default();
            if title.is_empty() || url.trim().is_empty() {
                continue;
            }
            let unix = it.pub_date.as_deref().map(parse_rfc2822_to_unix).unwrap_or(0);
            out.push(NewsItem {
                title,
                url,
                published_at: self.short_date(unix),
            });
        }
        Ok(out)
    }
}

#[async_trait]
impl FeedSource for GoogleNewsSource {
    async fn fetch(&self, query: &str, max_items: usize) -> Result<Vec<NewsItem>, FetchError> {
        let resp = self
            .http
            .get(FEED_URL)
            .query(&[("q", query), ("hl", "en-US"), ("gl", "US"), ("ceid", "US:en")])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let xml = resp.text().await?;
        self.parse_feed(&xml, max_items)
    }

    fn name(&self) -> &'static str {
        "google-news"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_title_decodes_and_strips() {
        let s = "<b>Apple</b> shares&nbsp;rise &amp; hit record";
        assert_eq!(clean_title(s), "Apple shares rise & hit record");
    }

    #[test]
    fn rfc2822_gmt_dates_parse() {
        assert_eq!(parse_rfc2822_to_unix("Thu, 01 Jan 1970 00:01:00 GMT"), 60);
        assert_eq!(parse_rfc2822_to_unix("not a date"), 0);
    }
}
