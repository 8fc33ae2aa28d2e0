// src/summarize.rs
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::SummarizationError;

#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Turn the encoded digest block into bounded summary text.
    async fn summarize(&self, compact: &str) -> Result<String, SummarizationError>;
    fn name(&self) -> &'static str;
}

const OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

const SYSTEM_PROMPT: &str = "You are a market news editor. For each ticker block in the input, \
write up to three short bullet points covering its headlines. Keep every bullet under 120 \
characters, plain text, no emojis. Start each ticker section with its symbol on its own line.";

/// Chat-completions client. Model comes from OPENAI_MODEL when set.
pub struct OpenAiSummarizer {
    http: reqwest::Client,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl OpenAiSummarizer {
    pub fn new(api_key: String, max_tokens: u32) -> Self {
        let http = reqwest::Client::builder()
            .user_agent("ticker-digest/0.1")
            .connect_timeout(Duration::from_secs(4))
            .timeout(Duration::from_secs(30))
            .build()
            .expect("reqwest client");
        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self {
            http,
            api_key,
            model,
            max_tokens,
        }
    }
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    async fn summarize(&self, compact: &str) -> Result<String, SummarizationError> {
        #[derive(Serialize)]
        struct Msg<'a> {
            role: &'a str,
            content: &'a str,
        }
        #[derive(Serialize)]
        struct Req<'a> {
            model: &'a str,
            messages: Vec<Msg<'a>>,
            temperature: f32,
            max_tokens: u32,
        }
        #[derive(Deserialize)]
        struct Resp {
            choices: Vec<Choice>,
        }
        #[derive(Deserialize)]
        struct Choice {
            message: ChoiceMsg,
        }
        #[derive(Deserialize)]
        struct ChoiceMsg {
            content: String,
        }

        let req = Req {
            model: &self.model,
            messages: vec![
                Msg {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                Msg {
                    role: "user",
                    content: compact,
                },
            ],
            temperature: 0.2,
            max_tokens: self.max_tokens,
        };

        let resp = self
            .http
            .post(OPENAI_URL)
            .bearer_auth(&self.api_key)
            .json(&req)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SummarizationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: Resp = resp.json().await?;
        let content = body
            .choices
            .first()
            .map(|c| c.message.content.trim())
            .unwrap_or_default();
        if content.is_empty() {
            return Err(SummarizationError::Empty);
        }
        Ok(content.to_string())
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}
