// src/pipeline.rs
use chrono::Utc;
use tracing::info;

use crate::chunk::split_message;
use crate::config::{Recipient, Settings};
use crate::digest::{encode_compact, DigestMap};
use crate::error::DigestError;
use crate::ingest;
use crate::ingest::types::FeedSource;
use crate::notify::PushTransport;
use crate::summarize::Summarizer;

/// Terminal accounting for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub subjects: usize,
    pub items: usize,
    pub chunks_sent: usize,
}

/// One full digest pass: fetch every subject in configured order, dedupe and
/// cap, encode, summarize once, prepend the dated header, chunk, deliver the
/// chunks strictly in sequence. Any stage error aborts the remainder of the
/// run; chunks already delivered stay delivered.
pub async fn run_digest(
    settings: &Settings,
    feed: &dyn FeedSource,
    summarizer: &dyn Summarizer,
    transport: &dyn PushTransport,
    recipient: &Recipient,
) -> Result<RunReport, DigestError> {
    let mut map = DigestMap::new();
    for subject in &settings.subjects {
        let raw = feed
            .fetch(&subject.query, settings.fetch_count)
            .await
            .map_err(|source| DigestError::Fetch {
                subject: subject.key.clone(),
                source,
            })?;
        let fetched = raw.len();
        let mut kept = ingest::dedupe(raw);
        kept.truncate(settings.per_subject_cap);
        info!(
            subject = %subject.key,
            source = feed.name(),
            fetched,
            kept = kept.len(),
            "subject collected"
        );
        map.insert(subject.key.clone(), kept);
    }

    let compact = encode_compact(&map, settings.per_subject_cap);
    info!(
        subjects = map.len(),
        items = map.item_count(),
        bytes = compact.len(),
        "digest encoded"
    );

    let summary = summarizer.summarize(&compact).await?;
    info!(summarizer = summarizer.name(), chars = summary.chars().count(), "summary received");

    let stamp = Utc::now().with_timezone(&settings.timezone);
    let payload = format!(
        "Market digest {}\n{}",
        stamp.format("%Y-%m-%d %H:%M %Z"),
        summary
    );

    let chunks = split_message(&payload, settings.max_chunk_len);
    let total = chunks.len();
    for (i, chunk) in chunks.iter().enumerate() {
        transport
            .push(recipient, chunk)
            .await
            .map_err(|source| DigestError::Delivery {
                chunk: i + 1,
                total,
                source,
            })?;
        info!(chunk = i + 1, total, chars = chunk.chars().count(), "chunk delivered");
    }

    Ok(RunReport {
        subjects: map.len(),
        items: map.item_count(),
        chunks_sent: total,
    })
}
