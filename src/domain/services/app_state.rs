#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use anyhow::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use super::Scroll;
use super::TranscriptList;
use crate::domain::models::Action;
use crate::domain::models::Button;
use crate::domain::models::TranscriptEntry;

pub struct AppState {
    pub busy: bool,
    pub entries: Vec<TranscriptEntry>,
    pub focused_button: Option<usize>,
    pub last_known_height: u16,
    pub last_known_width: u16,
    pub scroll: Scroll,
    pub transcript: TranscriptList,
}

impl Default for AppState {
    fn default() -> AppState {
        return AppState {
            busy: false,
            entries: vec![],
            focused_button: None,
            last_known_height: 0,
            last_known_width: 0,
            scroll: Scroll::default(),
            transcript: TranscriptList::default(),
        };
    }
}

impl AppState {
    pub fn add_entry(&mut self, entry: TranscriptEntry) {
        self.entries.push(entry);
        self.sync_dependants();
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
        self.sync_dependants();
    }

    pub fn scroll_to_end(&mut self) {
        self.scroll.last();
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    /// Every button in the transcript, oldest first. Buttons stay usable
    /// after newer messages arrive.
    pub fn buttons(&self) -> Vec<&Button> {
        return self
            .entries
            .iter()
            .flat_map(|entry| return entry.buttons())
            .collect();
    }

    pub fn focused(&self) -> Option<Button> {
        let idx = self.focused_button?;
        return self.buttons().get(idx).map(|button| return (*button).clone());
    }

    pub fn focus_next(&mut self) {
        let count = self.buttons().len();
        if count == 0 {
            return;
        }

        self.focused_button = match self.focused_button {
            Some(idx) => Some((idx + 1) % count),
            // Start from the newest button, it's the one most likely wanted.
            None => Some(count - 1),
        };
        self.sync_dependants();
    }

    pub fn focus_prev(&mut self) {
        let count = self.buttons().len();
        if count == 0 {
            return;
        }

        self.focused_button = match self.focused_button {
            Some(0) => Some(count - 1),
            Some(idx) => Some(idx - 1),
            None => Some(count - 1),
        };
        self.sync_dependants();
    }

    pub fn clear_focus(&mut self) {
        self.focused_button = None;
        self.sync_dependants();
    }

    /// Handles Enter. A focused button is pressed, otherwise the input is
    /// submitted. Returns true when the input box should be cleared.
    pub fn handle_enter(&mut self, input: &str, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        if let Some(button) = self.focused() {
            self.clear_focus();
            tx.send(Action::PressButton(button))?;
            return Ok(false);
        }

        if input.trim().is_empty() {
            return Ok(false);
        }

        tx.send(Action::SubmitMessage(input.to_string()))?;
        return Ok(true);
    }

    fn sync_dependants(&mut self) {
        self.transcript.set_entries(
            &self.entries,
            self.last_known_width,
            self.focused_button,
            self.busy,
        );

        self.scroll
            .set_state(self.transcript.len() as u16, self.last_known_height);
    }
}
