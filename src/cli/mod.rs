//! Interactive terminal front-end.

pub mod args;
pub mod command;
pub mod repl;

pub use args::Args;
pub use command::{Command, CommandError};
pub use repl::Repl;
