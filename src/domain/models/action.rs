use super::Button;

/// Commands sent from the UI to the actions service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    PressButton(Button),
    SubmitMessage(String),
}
