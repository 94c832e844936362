#[cfg(test)]
#[path = "reply_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::SessionId;

/// Body posted to the webhook for every outgoing message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub sender: SessionId,
    pub message: String,
}

impl OutgoingMessage {
    pub fn new(sender: &SessionId, message: &str) -> OutgoingMessage {
        return OutgoingMessage {
            sender: sender.clone(),
            message: message.to_string(),
        };
    }
}

/// A quick reply. Activating it echoes `title` as the user and sends
/// `payload` to the webhook.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub payload: String,
}

impl Button {
    pub fn new(title: &str, payload: &str) -> Button {
        return Button {
            title: title.to_string(),
            payload: payload.to_string(),
        };
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IncomingReply {
    pub text: Option<String>,
    pub image: Option<String>,
    pub buttons: Option<Vec<Button>>,
}

/// How a single reply ends up in the transcript. Exactly one applies to any
/// reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplyStrategy {
    Image { text: String, url: String },
    Buttons { text: String, buttons: Vec<Button> },
    Text(String),
    Drop,
}

fn non_empty(value: Option<String>) -> Option<String> {
    return value.filter(|e| return !e.is_empty());
}

/// Reads a field the way a chat UI would print it. Numbers and booleans are
/// shown as written, anything else counts as absent.
fn scalar(value: Option<&serde_json::Value>) -> Option<String> {
    match value? {
        serde_json::Value::String(text) => return Some(text.to_string()),
        serde_json::Value::Number(number) => return Some(number.to_string()),
        serde_json::Value::Bool(flag) => return Some(flag.to_string()),
        _ => return None,
    }
}

fn buttons(value: Option<&serde_json::Value>) -> Option<Vec<Button>> {
    let buttons = value?
        .as_array()?
        .iter()
        .filter_map(|button| {
            let button = button.as_object()?;
            return Some(Button {
                title: scalar(button.get("title")).unwrap_or_default(),
                payload: scalar(button.get("payload")).unwrap_or_default(),
            });
        })
        .collect::<Vec<Button>>();

    if buttons.is_empty() {
        return None;
    }

    return Some(buttons);
}

impl IncomingReply {
    /// Picks the rendering strategy. An image wins over buttons, buttons win
    /// over plain text.
    pub fn strategy(self) -> ReplyStrategy {
        let text = non_empty(self.text);

        if let Some(url) = non_empty(self.image) {
            return ReplyStrategy::Image {
                text: text.unwrap_or_default(),
                url,
            };
        }

        if let Some(buttons) = self.buttons.filter(|e| return !e.is_empty()) {
            return ReplyStrategy::Buttons {
                text: text.unwrap_or_default(),
                buttons,
            };
        }

        if let Some(text) = text {
            return ReplyStrategy::Text(text);
        }

        return ReplyStrategy::Drop;
    }

    /// Decodes a single reply field by field, so a field of the wrong type
    /// only loses itself. Non-object values decode to an empty reply.
    pub fn from_value(value: &serde_json::Value) -> IncomingReply {
        let reply = match value.as_object() {
            Some(reply) => reply,
            None => {
                tracing::debug!(reply = ?value, "Reply is not an object");
                return IncomingReply::default();
            }
        };

        return IncomingReply {
            text: scalar(reply.get("text")),
            image: reply
                .get("image")
                .and_then(|image| return image.as_str())
                .map(|image| return image.to_string()),
            buttons: buttons(reply.get("buttons")),
        };
    }

    /// Decodes a webhook response body. An array yields one reply per
    /// element, elements that aren't reply objects decode to an empty reply
    /// which renders nothing but still counts as a response. A non-empty
    /// string is rejected as malformed, any other value yields no replies.
    pub fn parse_many(body: serde_json::Value) -> Result<Vec<IncomingReply>> {
        let values = match body {
            serde_json::Value::Array(values) => values,
            serde_json::Value::String(text) if !text.is_empty() => {
                bail!("Webhook response is a string, expected a list of replies");
            }
            other => {
                tracing::debug!(body = ?other, "Webhook response is not an array");
                return Ok(vec![]);
            }
        };

        return Ok(values.iter().map(IncomingReply::from_value).collect());
    }
}
