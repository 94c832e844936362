#[cfg(test)]
#[path = "terminal_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::ChatView;
use crate::domain::models::Event;
use crate::domain::models::TranscriptEntry;

/// Forwards view updates to the terminal UI loop.
pub struct TerminalView {
    tx: mpsc::UnboundedSender<Event>,
}

impl TerminalView {
    pub fn new(tx: mpsc::UnboundedSender<Event>) -> TerminalView {
        return TerminalView { tx };
    }
}

impl ChatView for TerminalView {
    fn append_entry(&self, entry: TranscriptEntry) -> Result<()> {
        self.tx.send(Event::EntryAppended(entry))?;
        return Ok(());
    }

    fn set_busy(&self, busy: bool) -> Result<()> {
        self.tx.send(Event::BusyChanged(busy))?;
        return Ok(());
    }

    fn scroll_to_end(&self) -> Result<()> {
        self.tx.send(Event::ScrollToEnd())?;
        return Ok(());
    }
}
