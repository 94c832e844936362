use anyhow::Result;
use mockito::Matcher;
use serde_json::json;
use test_utils::replies_fixture;

use super::Rasa;
use crate::domain::models::Button;
use crate::domain::models::OutgoingMessage;
use crate::domain::models::SessionId;
use crate::domain::models::Webhook;
use crate::domain::models::WebhookResponse;

impl Rasa {
    pub fn with_url(url: String) -> Rasa {
        return Rasa {
            client: reqwest::Client::new(),
            url,
            timeout: "200".to_string(),
        };
    }
}

fn message(text: &str) -> OutgoingMessage {
    return OutgoingMessage::new(
        &SessionId::new("0f8e2a4c-1b3d-4e5f-9a7b-0123456789ab"),
        text,
    );
}

#[tokio::test]
async fn it_successfully_health_checks() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/")
        .with_status(200)
        .with_body("Hello from Rasa: 3.6.0")
        .create_async()
        .await;

    let webhook = Rasa::with_url(format!("{}/webhooks/rest/webhook", server.url()));
    let res = webhook.health_check().await;

    assert!(res.is_ok());
    mock.assert_async().await;
}

#[tokio::test]
async fn it_fails_health_checks() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/")
        .with_status(500)
        .create_async()
        .await;

    let webhook = Rasa::with_url(format!("{}/webhooks/rest/webhook", server.url()));
    let res = webhook.health_check().await;

    assert!(res.is_err());
    mock.assert_async().await;
}

#[tokio::test]
async fn it_posts_the_message_envelope() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/webhooks/rest/webhook")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "sender": "0f8e2a4c-1b3d-4e5f-9a7b-0123456789ab",
            "message": "hello",
        })))
        .with_status(200)
        .with_body(r#"[{"recipient_id": "abc", "text": "Hi there!"}]"#)
        .create_async()
        .await;

    let webhook = Rasa::with_url(format!("{}/webhooks/rest/webhook", server.url()));
    let res = webhook.post(&message("hello")).await?;

    mock.assert_async().await;
    match res {
        WebhookResponse::Replies(replies) => {
            assert_eq!(replies.len(), 1);
            assert_eq!(replies[0].text, Some("Hi there!".to_string()));
        }
        WebhookResponse::Status(status) => panic!("Unexpected status {status}"),
    }

    return Ok(());
}

#[tokio::test]
async fn it_decodes_every_reply_shape() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_body(replies_fixture())
        .create_async()
        .await;

    let webhook = Rasa::with_url(server.url());
    let res = webhook.post(&message("show me a cat")).await?;

    mock.assert_async().await;
    let replies = match res {
        WebhookResponse::Replies(replies) => replies,
        WebhookResponse::Status(status) => panic!("Unexpected status {status}"),
    };

    assert_eq!(replies.len(), 4);
    assert_eq!(
        replies[2].buttons,
        Some(vec![
            Button::new("Yes", "/affirm"),
            Button::new("No", "/deny")
        ])
    );

    return Ok(());
}

#[tokio::test]
async fn it_returns_error_statuses() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let webhook = Rasa::with_url(server.url());
    let res = webhook.post(&message("hello")).await?;

    mock.assert_async().await;
    assert_eq!(res, WebhookResponse::Status(500));

    return Ok(());
}

#[tokio::test]
async fn it_treats_null_bodies_as_no_replies() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_body("null")
        .create_async()
        .await;

    let webhook = Rasa::with_url(server.url());
    let res = webhook.post(&message("hello")).await?;

    assert_eq!(res, WebhookResponse::Replies(vec![]));
    return Ok(());
}

#[tokio::test]
async fn it_fails_on_malformed_json() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_body("[{\"text\": ")
        .create_async()
        .await;

    let webhook = Rasa::with_url(server.url());
    let res = webhook.post(&message("hello")).await;

    assert!(res.is_err());
}

#[tokio::test]
async fn it_fails_when_unreachable() {
    // Nothing listens on the discard port.
    let webhook = Rasa::with_url("http://127.0.0.1:9/webhooks/rest/webhook".to_string());
    let res = webhook.post(&message("hello")).await;

    assert!(res.is_err());
}
