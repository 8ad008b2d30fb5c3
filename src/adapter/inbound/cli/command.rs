//! Command-line interface definitions.
//!
//! The CLI has a single option: the log verbosity. Everything else comes
//! from the optional `betbot.toml` in the working directory.

use clap::{Parser, ValueEnum};

/// Cross-bookmaker odds comparison
#[derive(Parser, Debug)]
#[command(name = "betbot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log verbosity
    #[arg(long, value_enum, ignore_case = true, default_value = "WARNING")]
    pub log_level: LogLevel,
}

/// Log verbosity levels accepted on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    #[value(name = "DEBUG")]
    Debug,
    #[value(name = "INFO")]
    Info,
    #[default]
    #[value(name = "WARNING")]
    Warning,
    #[value(name = "ERROR")]
    Error,
    /// Same as ERROR: tracing has no level above it.
    #[value(name = "CRITICAL")]
    Critical,
}

impl LogLevel {
    /// Tracing filter directive for this level.
    #[must_use]
    pub const fn as_filter(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error | Self::Critical => "error",
        }
    }
}
