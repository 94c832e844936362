mod local;

pub use local::*;
