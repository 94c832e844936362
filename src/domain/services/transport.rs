#[cfg(test)]
#[path = "transport_test.rs"]
mod tests;

use anyhow::Result;

use super::dispatch;
use super::BusyIndicator;
use super::Renderer;
use crate::domain::models::OutgoingMessage;
use crate::domain::models::Role;
use crate::domain::models::SessionId;
use crate::domain::models::WebhookBox;
use crate::domain::models::WebhookResponse;

pub const CONNECTION_ERROR_TEXT: &str = "Sorry, I'm having trouble connecting to the server.";
pub const EMPTY_RESPONSE_TEXT: &str = "I didn't get a specific response. Can you try rephrasing?";
pub const SEND_ERROR_TEXT: &str = "Sorry, there was an error sending your message.";

#[derive(Clone)]
pub struct Transport {
    busy: BusyIndicator,
    renderer: Renderer,
    sender: SessionId,
    webhook: WebhookBox,
}

impl Transport {
    pub fn new(webhook: WebhookBox, sender: SessionId, renderer: Renderer) -> Transport {
        return Transport {
            busy: BusyIndicator::new(renderer.view().clone()),
            renderer,
            sender,
            webhook,
        };
    }

    pub fn renderer(&self) -> &Renderer {
        return &self.renderer;
    }

    /// Sends one message and renders whatever comes back. Webhook failures are
    /// turned into bot messages, errors returned here come from the view.
    pub async fn send(&self, text: &str) -> Result<()> {
        let busy_guard = self.busy.begin()?;
        let res = self
            .webhook
            .post(&OutgoingMessage::new(&self.sender, text))
            .await;
        drop(busy_guard);

        match res {
            Ok(WebhookResponse::Status(status)) => {
                tracing::error!(status, "Webhook returned an error status");
                self.renderer
                    .display(CONNECTION_ERROR_TEXT, Role::Bot, None)?;
            }
            Ok(WebhookResponse::Replies(replies)) => {
                if replies.is_empty() {
                    tracing::info!("Received empty response from webhook");
                    self.renderer
                        .display(EMPTY_RESPONSE_TEXT, Role::Bot, None)?;
                    return Ok(());
                }

                tracing::debug!(count = replies.len(), "Dispatching replies");
                dispatch(&self.renderer, replies)?;
            }
            Err(err) => {
                tracing::error!(error = ?err, "Error sending message to webhook");
                self.renderer.display(SEND_ERROR_TEXT, Role::Bot, None)?;
            }
        }

        return Ok(());
    }
}
