#[cfg(test)]
#[path = "dispatcher_test.rs"]
mod tests;

use anyhow::Result;

use super::Renderer;
use crate::domain::models::IncomingReply;
use crate::domain::models::ReplyStrategy;
use crate::domain::models::RichContent;
use crate::domain::models::Role;

/// Renders each reply in order. Button activation is handled by the UI
/// sending `Action::PressButton` back to the actions service.
pub fn dispatch(renderer: &Renderer, replies: Vec<IncomingReply>) -> Result<()> {
    for reply in replies {
        match reply.strategy() {
            ReplyStrategy::Image { text, url } => {
                renderer.display(&text, Role::Bot, Some(RichContent::image(&url)))?;
            }
            ReplyStrategy::Buttons { text, buttons } => {
                renderer.display(&text, Role::Bot, Some(RichContent::Buttons(buttons)))?;
            }
            ReplyStrategy::Text(text) => {
                renderer.display(&text, Role::Bot, None)?;
            }
            ReplyStrategy::Drop => (),
        }
    }

    return Ok(());
}
