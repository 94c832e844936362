#[cfg(test)]
mod memory;
mod terminal;

#[cfg(test)]
pub use memory::*;
pub use terminal::*;
