// tests/ingest_dedup.rs
use ticker_digest::ingest::types::NewsItem;
use ticker_digest::ingest::{dedupe, title_key};

fn item(title: &str, url: &str) -> NewsItem {
    NewsItem {
        title: title.into(),
        url: url.into(),
        published_at: "08/05 09:00".into(),
    }
}

#[test]
fn near_duplicate_headlines_collapse_to_first() {
    let raw = vec![
        item("Amazon Q3 Earnings Beat", "https://news.example/amzn-1"),
        item("Amazon — Q3 Earnings Beat!", "https://news.example/amzn-2"),
        item("Google Unveils New Chip", "https://news.example/goog-1"),
    ];
    let kept = dedupe(raw);
    assert_eq!(kept.len(), 2);
    assert_eq!(kept[0].url, "https://news.example/amzn-1");
    assert_eq!(kept[1].title, "Google Unveils New Chip");
}

#[test]
fn dedupe_is_idempotent() {
    let raw = vec![
        item("Fed holds rates steady", "https://news.example/1"),
        item("The Fed Holds Rates Steady", "https://news.example/2"),
        item("Oil climbs on supply fears", "https://news.example/3"),
        item("", "https://news.example/4"),
    ];
    let once = dedupe(raw);
    let twice = dedupe(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn survivors_keep_relative_order() {
    let raw = vec![
        item("C first", "https://news.example/c"),
        item("A second", "https://news.example/a"),
        item("C - first", "https://news.example/c2"),
        item("B third", "https://news.example/b"),
    ];
    let kept = dedupe(raw);
    let titles: Vec<&str> = kept.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["C first", "A second", "B third"]);
}

#[test]
fn blank_title_or_url_items_are_dropped() {
    let raw = vec![
        item("  ", "https://news.example/1"),
        item("Kept headline", "   "),
        item("Kept headline", "https://news.example/2"),
    ];
    let kept = dedupe(raw);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].url, "https://news.example/2");
}

#[test]
fn punctuation_only_titles_share_the_empty_key() {
    // Both normalize to "" and collapse onto the first; a deliberate
    // simplification of the normalizer, not a defect.
    assert_eq!(title_key("???"), "");
    let raw = vec![
        item("???", "https://news.example/1"),
        item("!!! ---", "https://news.example/2"),
        item("Real headline", "https://news.example/3"),
    ];
    let kept = dedupe(raw);
    assert_eq!(kept.len(), 2);
    assert_eq!(kept[0].url, "https://news.example/1");
}

#[test]
fn stop_words_do_not_distinguish_headlines() {
    assert_eq!(
        title_key("Apple and the App Store"),
        title_key("Apple App Store")
    );
    assert_eq!(
        title_key("Nvidia: earnings | preview"),
        title_key("NVIDIA earnings preview")
    );
}
