use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use super::PushTransport;
use crate::config::Recipient;
use crate::error::DeliveryError;

const PUSH_URL: &str = "https://api.line.me/v2/bot/message/push";

/// LINE Messaging API push client. No internal retry; a rejected chunk is
/// surfaced to the caller as-is.
pub struct LinePush {
    client: Client,
    channel_token: String,
    endpoint: String,
}

impl LinePush {
    pub fn new(channel_token: String) -> Self {
        Self {
            client: Client::builder()
                .connect_timeout(Duration::from_secs(4))
                .timeout(Duration::from_secs(10))
                .build()
                .expect("reqwest client"),
            channel_token,
            endpoint: PUSH_URL.to_string(),
        }
    }

    /// Point at a different endpoint (tests, mock servers).
    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = url.into();
        self
    }
}

#[derive(Serialize)]
struct TextMessage<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    text: &'a str,
}

#[derive(Serialize)]
struct PushBody<'a> {
    to: &'a str,
    messages: Vec<TextMessage<'a>>,
}

#[async_trait]
impl PushTransport for LinePush {
    async fn push(&self, recipient: &Recipient, text: &str) -> Result<(), DeliveryError> {
        let body = PushBody {
            to: recipient.id(),
            messages: vec![TextMessage { kind: "text", text }],
        };

        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.channel_token)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}
