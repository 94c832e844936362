#[cfg(test)]
#[path = "rasa_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::IncomingReply;
use crate::domain::models::OutgoingMessage;
use crate::domain::models::Webhook;
use crate::domain::models::WebhookResponse;

/// Rasa's REST input channel, or anything speaking the same protocol.
pub struct Rasa {
    client: reqwest::Client,
    url: String,
    timeout: String,
}

impl Default for Rasa {
    fn default() -> Rasa {
        return Rasa {
            client: reqwest::Client::new(),
            url: Config::get(ConfigKey::WebhookURL),
            timeout: Config::get(ConfigKey::HealthCheckTimeout),
        };
    }
}

impl Rasa {
    fn health_check_url(&self) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.url)?;
        url.set_path("/");
        url.set_query(None);
        return Ok(url);
    }
}

#[async_trait]
impl Webhook for Rasa {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        let res = self
            .client
            .get(self.health_check_url()?)
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await;

        let res = match res {
            Ok(res) => res,
            Err(err) => {
                tracing::error!(error = ?err, url = %self.url, "Webhook is not reachable");
                bail!("Webhook at {} is not reachable", self.url);
            }
        };

        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), "Webhook health check failed");
            bail!("Webhook health check failed");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn post(&self, message: &OutgoingMessage) -> Result<WebhookResponse> {
        tracing::debug!(body = ?message, "Webhook request");
        let res = self.client.post(&self.url).json(message).send().await?;

        let status = res.status();
        if !status.is_success() {
            tracing::error!(
                status = status.as_u16(),
                reason = status.canonical_reason().unwrap_or_default(),
                "Webhook returned an error"
            );
            return Ok(WebhookResponse::Status(status.as_u16()));
        }

        let body = res.json::<serde_json::Value>().await?;
        tracing::debug!(body = ?body, "Webhook response");

        return Ok(WebhookResponse::Replies(IncomingReply::parse_many(body)?));
    }
}
