//! CLI module graph.

pub mod command;
pub mod run;

pub use command::{Cli, LogLevel};
