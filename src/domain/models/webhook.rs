use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use super::IncomingReply;
use super::OutgoingMessage;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WebhookResponse {
    /// Decoded replies from a successful exchange, in display order.
    Replies(Vec<IncomingReply>),
    /// The server answered with a non-success status code.
    Status(u16),
}

#[async_trait]
pub trait Webhook {
    /// Used at startup to verify the remote agent is reachable.
    async fn health_check(&self) -> Result<()>;

    /// Sends a single message and waits for the agent's replies. Errors are
    /// reserved for transport level failures such as a refused connection or
    /// a body that isn't JSON.
    async fn post(&self, message: &OutgoingMessage) -> Result<WebhookResponse>;
}

pub type WebhookBox = Arc<dyn Webhook + Send + Sync>;
