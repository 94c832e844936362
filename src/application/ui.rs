use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::TextArea;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    tx: mpsc::UnboundedSender<Action>,
    mut events: EventsService,
) -> Result<()> {
    let mut textarea = TextArea::default();

    #[cfg(feature = "dev")]
    {
        textarea.insert_str("hello");
    }

    loop {
        terminal.draw(|frame| {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![Constraint::Min(1), Constraint::Max(4)])
                .split(frame.size());

            if layout[0].width != app_state.last_known_width
                || layout[0].height != app_state.last_known_height
            {
                app_state.set_rect(layout[0]);
            }

            app_state
                .transcript
                .render(frame, layout[0], app_state.scroll.position);
            frame.render_widget(textarea.widget(), layout[1]);
        })?;

        match events.next().await? {
            Event::EntryAppended(entry) => {
                app_state.add_entry(entry);
            }
            Event::BusyChanged(busy) => {
                app_state.set_busy(busy);
            }
            Event::ScrollToEnd() => {
                app_state.scroll_to_end();
            }
            Event::KeyboardCharInput(input) => {
                textarea.input(input);
            }
            Event::KeyboardPaste(text) => {
                textarea.insert_str(text);
            }
            Event::KeyboardCTRLC() => {
                break;
            }
            Event::KeyboardEnter() => {
                let input_str = textarea.lines().join("\n");
                if app_state.handle_enter(&input_str, &tx)? {
                    textarea = TextArea::default();
                }
            }
            Event::KeyboardTab() => {
                app_state.focus_next();
            }
            Event::KeyboardBackTab() => {
                app_state.focus_prev();
            }
            Event::KeyboardEsc() => {
                app_state.clear_focus();
            }
            Event::UIScrollDown() => {
                app_state.scroll.down();
            }
            Event::UIScrollUp() => {
                app_state.scroll.up();
            }
            Event::UIScrollPageDown() => {
                app_state.scroll.down_page();
            }
            Event::UIScrollPageUp() => {
                app_state.scroll.up_page();
            }
            Event::UITick() => (),
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    // Best effort, the terminal may never have been set up.
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;
    let mut app_state = AppState::default();

    let res = start_loop(&mut terminal, &mut app_state, tx, EventsService::new(rx)).await;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    return res;
}
