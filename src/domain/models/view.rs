use std::sync::Arc;

use anyhow::Result;

use super::TranscriptEntry;

/// Everything the chat core needs from whatever is drawing the conversation.
pub trait ChatView {
    /// Appends an entry after the newest one, directly ahead of the busy
    /// indicator.
    fn append_entry(&self, entry: TranscriptEntry) -> Result<()>;

    fn set_busy(&self, busy: bool) -> Result<()>;

    fn scroll_to_end(&self) -> Result<()>;
}

pub type ChatViewBox = Arc<dyn ChatView + Send + Sync>;
