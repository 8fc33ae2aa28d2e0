//! Stock-news digest — binary entrypoint.
//! Runs one digest pass and exits; recurring schedules belong to cron or the
//! hosting platform, not to this process.

use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ticker_digest::config::{recipient_from_env, require_env, Settings};
use ticker_digest::ingest::providers::google_news::GoogleNewsSource;
use ticker_digest::notify::line::LinePush;
use ticker_digest::pipeline::run_digest;
use ticker_digest::summarize::OpenAiSummarizer;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ticker_digest=info,warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();
    init_tracing();

    let settings = Settings::from_env()?;
    let recipient = recipient_from_env()?;

    let feed = GoogleNewsSource::new(settings.timezone);
    let summarizer = OpenAiSummarizer::new(
        require_env("OPENAI_API_KEY")?,
        settings.summary_max_tokens,
    );
    let transport = LinePush::new(require_env("LINE_CHANNEL_ACCESS_TOKEN")?);

    let report = run_digest(&settings, &feed, &summarizer, &transport, &recipient).await?;
    info!(
        subjects = report.subjects,
        items = report.items,
        chunks = report.chunks_sent,
        "digest delivered"
    );
    Ok(())
}
