#[cfg(test)]
#[path = "bubble_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use crate::domain::models::RichContent;
use crate::domain::models::Role;
use crate::domain::models::TranscriptEntry;

#[derive(Debug, PartialEq, Eq)]
pub enum BubbleAlignment {
    Left,
    Right,
}

pub struct Bubble<'a> {
    entry: &'a TranscriptEntry,
    alignment: BubbleAlignment,
    window_max_width: usize,
    /// Number of buttons rendered by earlier entries, used to number this
    /// entry's buttons.
    button_offset: usize,
    focused_button: Option<usize>,
}

struct BubbleLine {
    text: String,
    style: Style,
}

impl<'a> Bubble<'a> {
    pub fn new(
        entry: &'a TranscriptEntry,
        window_max_width: u16,
        button_offset: usize,
        focused_button: Option<usize>,
    ) -> Bubble<'a> {
        let mut alignment = BubbleAlignment::Left;
        if entry.role == Role::User {
            alignment = BubbleAlignment::Right;
        }

        return Bubble {
            entry,
            alignment,
            window_max_width: window_max_width as usize,
            button_offset,
            focused_button,
        };
    }

    fn content_lines(&self) -> Vec<BubbleLine> {
        // Add a minimum 4% of padding on the side.
        let min_bubble_padding_length = (self.window_max_width as f32 * 0.04).ceil() as usize;
        // left border + left padding + (text) + right padding + right border.
        let line_border_width = 4 + min_bubble_padding_length;

        let mut lines = self
            .entry
            .as_string_lines(self.window_max_width.saturating_sub(line_border_width))
            .into_iter()
            .map(|text| {
                return BubbleLine {
                    text,
                    style: Style::default(),
                };
            })
            .collect::<Vec<BubbleLine>>();

        match &self.entry.content {
            Some(RichContent::Image { src, .. }) => {
                lines.push(BubbleLine {
                    text: format!("[image] {src}"),
                    style: Style::default().add_modifier(Modifier::ITALIC),
                });
            }
            Some(RichContent::Buttons(buttons)) => {
                if !lines.is_empty() {
                    lines.push(BubbleLine {
                        text: " ".to_string(),
                        style: Style::default(),
                    });
                }

                for (idx, button) in buttons.iter().enumerate() {
                    let button_idx = self.button_offset + idx;
                    let mut style = Style::default().fg(Color::Cyan);
                    if self.focused_button == Some(button_idx) {
                        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                    }

                    lines.push(BubbleLine {
                        text: format!("({}) {}", button_idx + 1, button.title),
                        style,
                    });
                }
            }
            None => (),
        }

        return lines;
    }

    pub fn as_lines(&self) -> Vec<Line<'static>> {
        let username = self.entry.role.display_name();
        let content_lines = self.content_lines();

        let max_line_length = content_lines
            .iter()
            .map(|line| return line.text.chars().count())
            .chain([username.chars().count()])
            .max()
            .unwrap_or_default();

        // Borders and inner padding on both sides.
        let bubble_width = max_line_length + 4;
        let bubble_padding = " ".repeat(self.window_max_width.saturating_sub(bubble_width));

        let inner_bar = "─".repeat((max_line_length + 2).saturating_sub(username.chars().count()));
        let top_bar = format!("╭{username}{inner_bar}╮");
        let bottom_bar = format!("╰{}╯", "─".repeat(max_line_length + 2));

        let mut lines = vec![self.pad(vec![self.border_span(top_bar)], &bubble_padding)];
        for line in content_lines {
            let fill = " ".repeat(max_line_length - line.text.chars().count());
            let spans = vec![
                self.border_span("│ ".to_string()),
                Span::styled(line.text, line.style),
                Span::from(fill),
                self.border_span(" │".to_string()),
            ];
            lines.push(self.pad(spans, &bubble_padding));
        }
        lines.push(self.pad(vec![self.border_span(bottom_bar)], &bubble_padding));

        return lines;
    }

    fn pad(&self, mut spans: Vec<Span<'static>>, padding: &str) -> Line<'static> {
        if self.alignment == BubbleAlignment::Left {
            spans.push(Span::from(padding.to_string()));
            return Line::from(spans);
        }

        let mut res = vec![Span::from(padding.to_string())];
        res.extend(spans);
        return Line::from(res);
    }

    fn border_span(&self, text: String) -> Span<'static> {
        if self.entry.role == Role::Bot {
            return Span::styled(
                text,
                Style {
                    fg: Some(Color::Rgb(138, 85, 63)), // Brown
                    ..Style::default()
                },
            );
        }

        return Span::from(text);
    }
}
