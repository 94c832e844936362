#[cfg(test)]
#[path = "renderer_test.rs"]
mod tests;

use anyhow::Result;

use crate::domain::models::ChatViewBox;
use crate::domain::models::RichContent;
use crate::domain::models::Role;
use crate::domain::models::TranscriptEntry;

#[derive(Clone)]
pub struct Renderer {
    view: ChatViewBox,
}

impl Renderer {
    pub fn new(view: ChatViewBox) -> Renderer {
        return Renderer { view };
    }

    pub fn view(&self) -> &ChatViewBox {
        return &self.view;
    }

    /// Appends one entry to the transcript and scrolls to it. Empty entries
    /// are logged and skipped.
    pub fn display(&self, text: &str, role: Role, content: Option<RichContent>) -> Result<()> {
        let entry = match TranscriptEntry::new(role, text, content) {
            Some(entry) => entry,
            None => {
                tracing::warn!(role = %role, "Attempted to display an empty message");
                return Ok(());
            }
        };

        self.view.append_entry(entry)?;
        self.view.scroll_to_end()?;

        return Ok(());
    }
}
