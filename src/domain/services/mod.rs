pub mod actions;
mod app_state;
mod bubble;
mod busy;
mod dispatcher;
pub mod events;
mod renderer;
mod scroll;
mod session_identity;
mod transcript_list;
mod transport;

pub use app_state::*;
pub use bubble::*;
pub use busy::*;
pub use dispatcher::*;
pub use renderer::*;
pub use scroll::*;
pub use session_identity::*;
pub use transcript_list::*;
pub use transport::*;
