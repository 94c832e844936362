#[cfg(test)]
#[path = "entry_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Button;
use super::Role;

pub const IMAGE_ALT_TEXT: &str = "Bot image response";

/// Non-text payload attached to a transcript entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RichContent {
    Image { src: String, alt: String },
    Buttons(Vec<Button>),
}

impl RichContent {
    pub fn image(src: &str) -> RichContent {
        return RichContent::Image {
            src: src.to_string(),
            alt: IMAGE_ALT_TEXT.to_string(),
        };
    }

    pub fn buttons(&self) -> &[Button] {
        match self {
            RichContent::Buttons(buttons) => return buttons,
            RichContent::Image { .. } => return &[],
        }
    }
}

/// One rendered unit of the conversation. Always carries text, rich content,
/// or both.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub role: Role,
    pub text: Option<String>,
    pub content: Option<RichContent>,
}

impl TranscriptEntry {
    /// Returns `None` when there is nothing to show.
    pub fn new(role: Role, text: &str, content: Option<RichContent>) -> Option<TranscriptEntry> {
        if text.is_empty() && content.is_none() {
            return None;
        }

        let mut entry_text = None;
        if !text.is_empty() {
            entry_text = Some(text.replace('\t', "  "));
        }

        return Some(TranscriptEntry {
            role,
            text: entry_text,
            content,
        });
    }

    pub fn buttons(&self) -> &[Button] {
        if let Some(content) = &self.content {
            return content.buttons();
        }

        return &[];
    }

    /// Word wraps the entry text to fit `line_max_width`.
    pub fn as_string_lines(&self, line_max_width: usize) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();
        let text = match &self.text {
            Some(text) => text,
            None => return lines,
        };

        for full_line in text.split('\n') {
            if full_line.trim().is_empty() {
                lines.push(" ".to_string());
                continue;
            }

            let mut char_count = 0;
            let mut current_lines: Vec<&str> = vec![];

            for word in full_line.split(' ') {
                let word_len = word.chars().count();
                if word_len + char_count + 1 > line_max_width && !current_lines.is_empty() {
                    lines.push(current_lines.join(" ").trim_end().to_string());
                    current_lines = vec![word];
                    char_count = word_len + 1;
                } else {
                    current_lines.push(word);
                    char_count += word_len + 1;
                }
            }
            if !current_lines.is_empty() {
                lines.push(current_lines.join(" ").trim_end().to_string());
            }
        }

        return lines;
    }
}
