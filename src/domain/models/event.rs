use tui_textarea::Input;

use super::TranscriptEntry;

pub enum Event {
    EntryAppended(TranscriptEntry),
    BusyChanged(bool),
    ScrollToEnd(),
    KeyboardBackTab(),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardEnter(),
    KeyboardEsc(),
    KeyboardPaste(String),
    KeyboardTab(),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UITick(),
}
