mod action;
mod entry;
mod event;
mod reply;
mod role;
mod session;
mod storage;
mod textarea;
mod view;
mod webhook;

pub use action::*;
pub use entry::*;
pub use event::*;
pub use reply::*;
pub use role::*;
pub use session::*;
pub use storage::*;
pub use textarea::*;
pub use view::*;
pub use webhook::*;
