// tests/digest_encode.rs
use ticker_digest::digest::{encode_compact, DigestMap};
use ticker_digest::ingest::types::NewsItem;

fn item(n: usize) -> NewsItem {
    NewsItem {
        title: format!("Headline {n}"),
        url: format!("https://news.example/{n}"),
        published_at: "08/05 09:00".into(),
    }
}

#[test]
fn line_format_is_date_title_url() {
    let mut map = DigestMap::new();
    map.insert("AAPL", vec![item(1)]);
    assert_eq!(
        encode_compact(&map, 4),
        "AAPL\n- 08/05 09:00 | Headline 1 | https://news.example/1"
    );
}

#[test]
fn cap_limits_item_lines_per_subject() {
    let mut map = DigestMap::new();
    map.insert("TSLA", (0..10).map(item).collect());
    let block = encode_compact(&map, 4);
    let lines: Vec<&str> = block.lines().collect();
    assert_eq!(lines.len(), 5); // header + 4 items
    assert_eq!(lines[0], "TSLA");
    // items come out in stored order
    assert!(lines[1].contains("Headline 0"));
    assert!(lines[4].contains("Headline 3"));
}

#[test]
fn subjects_are_contiguous_in_insertion_order() {
    let mut map = DigestMap::new();
    map.insert("MSFT", vec![item(1), item(2)]);
    map.insert("AMZN", vec![item(3)]);
    let block = encode_compact(&map, 4);
    assert!(!block.contains("\n\n"), "no blank lines between subjects");
    let headers: Vec<&str> = block.lines().filter(|l| !l.starts_with('-')).collect();
    assert_eq!(headers, vec!["MSFT", "AMZN"]);
}

#[test]
fn encoding_is_deterministic() {
    let mut map = DigestMap::new();
    map.insert("NVDA", (0..6).map(item).collect());
    map.insert("GOOGL", vec![item(9)]);
    assert_eq!(encode_compact(&map, 3), encode_compact(&map, 3));
}

#[test]
fn pipe_in_title_passes_through_verbatim() {
    let mut map = DigestMap::new();
    map.insert(
        "AAPL",
        vec![NewsItem {
            title: "Apple | services revenue".into(),
            url: "https://news.example/x".into(),
            published_at: "08/05 09:00".into(),
        }],
    );
    let block = encode_compact(&map, 4);
    assert!(block.contains("| Apple | services revenue |"));
}

#[test]
fn reinserting_a_key_replaces_in_place() {
    let mut map = DigestMap::new();
    map.insert("AAPL", vec![item(1)]);
    map.insert("MSFT", vec![item(2)]);
    map.insert("AAPL", vec![item(3)]);
    let block = encode_compact(&map, 4);
    let headers: Vec<&str> = block.lines().filter(|l| !l.starts_with('-')).collect();
    assert_eq!(headers, vec!["AAPL", "MSFT"]);
    assert!(block.contains("Headline 3"));
    assert!(!block.contains("Headline 1"));
}
