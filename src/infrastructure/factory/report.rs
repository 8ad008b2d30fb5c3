//! Report factory.

use crate::adapter::outbound::report::{JsonReport, TableReport};
use crate::infrastructure::config::settings::{Config, OutputFormat};
use crate::port::Report;

/// Build the stdout report for the configured output format.
#[must_use]
pub fn build_report(config: &Config) -> Box<dyn Report> {
    match config.output.format {
        OutputFormat::Pretty => Box::new(TableReport::new(std::io::stdout())),
        OutputFormat::Json => Box::new(JsonReport::new(std::io::stdout())),
    }
}
