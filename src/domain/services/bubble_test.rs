use ratatui::style::Modifier;

use super::Bubble;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Button;
use crate::domain::models::RichContent;
use crate::domain::models::Role;
use crate::domain::models::TranscriptEntry;

fn create_lines(entry: &TranscriptEntry, offset: usize, focused: Option<usize>) -> Vec<String> {
    Config::set(ConfigKey::Username, "testuser");
    Config::set(ConfigKey::BotName, "Bot");

    return Bubble::new(entry, 30, offset, focused)
        .as_lines()
        .iter()
        .map(|line| {
            return line
                .spans
                .iter()
                .map(|span| {
                    return span.content.to_string();
                })
                .collect::<Vec<String>>()
                .join("");
        })
        .collect();
}

#[test]
fn it_renders_bot_bubbles_left() {
    let entry = TranscriptEntry::new(Role::Bot, "Hi there!", None).unwrap();
    let padding = " ".repeat(17);

    assert_eq!(
        create_lines(&entry, 0, None),
        vec![
            format!("╭Bot────────╮{padding}"),
            format!("│ Hi there! │{padding}"),
            format!("╰───────────╯{padding}"),
        ]
    );
}

#[test]
fn it_renders_user_bubbles_right() {
    let entry = TranscriptEntry::new(Role::User, "hello", None).unwrap();
    let padding = " ".repeat(18);

    assert_eq!(
        create_lines(&entry, 0, None),
        vec![
            format!("{padding}╭testuser──╮"),
            format!("{padding}│ hello    │"),
            format!("{padding}╰──────────╯"),
        ]
    );
}

#[test]
fn it_renders_images() {
    let entry = TranscriptEntry::new(Role::Bot, "", Some(RichContent::image("http://x.io/a.png")))
        .unwrap();
    let lines = create_lines(&entry, 0, None);

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1].trim_end(), "│ [image] http://x.io/a.png │");
}

#[test]
fn it_numbers_buttons_from_the_offset() {
    let entry = TranscriptEntry::new(
        Role::Bot,
        "Continue?",
        Some(RichContent::Buttons(vec![
            Button::new("Yes", "/affirm"),
            Button::new("No", "/deny"),
        ])),
    )
    .unwrap();
    let lines = create_lines(&entry, 2, None)
        .iter()
        .map(|line| return line.trim_end().to_string())
        .collect::<Vec<String>>();

    assert_eq!(
        lines,
        vec![
            "╭Bot────────╮",
            "│ Continue? │",
            "│           │",
            "│ (3) Yes   │",
            "│ (4) No    │",
            "╰───────────╯",
        ]
    );
}

#[test]
fn it_highlights_the_focused_button() {
    let entry = TranscriptEntry::new(
        Role::Bot,
        "",
        Some(RichContent::Buttons(vec![
            Button::new("Yes", "/affirm"),
            Button::new("No", "/deny"),
        ])),
    )
    .unwrap();

    Config::set(ConfigKey::BotName, "Bot");
    let lines = Bubble::new(&entry, 30, 0, Some(1)).as_lines();

    // Top bar, two buttons, bottom bar.
    assert_eq!(lines.len(), 4);
    let yes = &lines[1].spans[1];
    let no = &lines[2].spans[1];
    assert_eq!(yes.content, "(1) Yes");
    assert!(!yes.style.add_modifier.contains(Modifier::REVERSED));
    assert_eq!(no.content, "(2) No");
    assert!(no.style.add_modifier.contains(Modifier::REVERSED));
}
