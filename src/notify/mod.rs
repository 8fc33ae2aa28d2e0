pub mod line;

use async_trait::async_trait;

use crate::config::Recipient;
use crate::error::DeliveryError;

/// Push transport: one text message per call, acknowledged synchronously.
#[async_trait]
pub trait PushTransport: Send + Sync {
    async fn push(&self, recipient: &Recipient, text: &str) -> Result<(), DeliveryError>;
}
