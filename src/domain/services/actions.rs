#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use super::Transport;
use crate::domain::models::Action;
use crate::domain::models::Button;
use crate::domain::models::Role;

pub fn help_text() -> String {
    let text = r#"
HOTKEYS:
- Enter - Send your message, or press the selected reply button.
- Tab - Select the next reply button.
- Shift+Tab - Select the previous reply button.
- Esc - Clear the selected reply button.
- Up arrow - Scroll up
- Down arrow - Scroll down
- CTRL+U - Page up
- CTRL+D - Page down
- CTRL+C - Exit.
        "#;

    return text.trim().to_string();
}

fn spawn_send(transport: &Transport, text: String) {
    let worker_transport = transport.clone();
    tokio::spawn(async move {
        if let Err(err) = worker_transport.send(&text).await {
            tracing::error!(error = ?err, "Failed to render webhook response");
        }
    });
}

fn submit_message(transport: &Transport, text: &str) -> Result<()> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(());
    }

    transport.renderer().display(text, Role::User, None)?;
    spawn_send(transport, text.to_string());

    return Ok(());
}

fn press_button(transport: &Transport, button: Button) -> Result<()> {
    transport
        .renderer()
        .display(&button.title, Role::User, None)?;

    if button.payload.is_empty() {
        tracing::warn!(title = %button.title, "Button has no payload, nothing to send");
        return Ok(());
    }

    spawn_send(transport, button.payload);

    return Ok(());
}

pub struct ActionsService {}

impl ActionsService {
    /// Runs until every action sender is dropped. Each outgoing message is
    /// sent on its own task, so a slow webhook never blocks new input and
    /// replies render in the order they arrive.
    pub async fn start(transport: Transport, rx: &mut mpsc::UnboundedReceiver<Action>) -> Result<()> {
        while let Some(action) = rx.recv().await {
            tracing::debug!(action = ?action, "Action");
            match action {
                Action::SubmitMessage(text) => {
                    submit_message(&transport, &text)?;
                }
                Action::PressButton(button) => {
                    press_button(&transport, button)?;
                }
            }
        }

        return Ok(());
    }
}
