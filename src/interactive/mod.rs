//! Interactive play: command parsing and the session loop

pub mod commands;
pub mod session;

pub use commands::{Command, CommandError};
pub use session::Session;
