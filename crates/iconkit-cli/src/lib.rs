//! iconkit command-line front end.

pub mod commands;
pub mod repl;

pub use commands::{execute, parse_line, CommandOutput, IconCommand};
