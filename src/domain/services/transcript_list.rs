#[cfg(test)]
#[path = "transcript_list_test.rs"]
mod tests;

use std::collections::HashMap;

use ratatui::prelude::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::Bubble;
use crate::domain::models::Role;
use crate::domain::models::TranscriptEntry;

/// Turns the transcript into terminal lines. Entries never change once
/// appended, so rendered bubbles are cached by index. Bubbles with buttons
/// are redrawn every time as focus moves between them.
pub struct TranscriptList {
    cache: HashMap<usize, Vec<Line<'static>>>,
    line_width: u16,
    lines: Vec<Line<'static>>,
}

impl Default for TranscriptList {
    fn default() -> TranscriptList {
        return TranscriptList {
            cache: HashMap::new(),
            line_width: 0,
            lines: vec![],
        };
    }
}

impl TranscriptList {
    pub fn set_entries(
        &mut self,
        entries: &[TranscriptEntry],
        line_width: u16,
        focused_button: Option<usize>,
        busy: bool,
    ) {
        if self.line_width != line_width {
            self.cache.clear();
            self.line_width = line_width;
        }

        let mut button_offset = 0;
        let mut lines: Vec<Line<'static>> = vec![];
        for (idx, entry) in entries.iter().enumerate() {
            let buttons_count = entry.buttons().len();
            if buttons_count > 0 {
                lines.extend(Bubble::new(entry, line_width, button_offset, focused_button).as_lines());
                button_offset += buttons_count;
                continue;
            }

            let bubble_lines = self.cache.entry(idx).or_insert_with(|| {
                return Bubble::new(entry, line_width, button_offset, None).as_lines();
            });
            lines.extend(bubble_lines.iter().cloned());
        }

        if busy {
            lines.push(Line::from(Span::styled(
                format!("{} is typing...", Role::Bot.display_name()),
                Style::default().add_modifier(Modifier::ITALIC | Modifier::DIM),
            )));
        }

        self.lines = lines;
    }

    pub fn len(&self) -> usize {
        return self.lines.len();
    }

    pub fn render(&self, frame: &mut Frame, rect: Rect, scroll: u16) {
        frame.render_widget(
            Paragraph::new(self.lines.clone())
                .block(Block::default())
                .scroll((scroll, 0)),
            rect,
        );
    }
}
