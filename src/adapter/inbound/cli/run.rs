//! Handler for a single aggregation pass.

use std::path::Path;

use tracing::info;

use super::command::Cli;
use crate::application::PassSummary;
use crate::error::Result;
use crate::infrastructure::config::settings::{Config, DEFAULT_CONFIG_PATH};
use crate::infrastructure::factory::{build_report, build_sites_manager};

/// Load configuration, set up logging and run one pass.
///
/// # Errors
///
/// Only configuration errors are returned; site and report failures are
/// logged and the pass completes.
pub async fn execute(cli: &Cli) -> Result<PassSummary> {
    execute_with_config(cli, Path::new(DEFAULT_CONFIG_PATH)).await
}

/// Same as [`execute`] with an explicit configuration path.
pub async fn execute_with_config(cli: &Cli, config_path: &Path) -> Result<PassSummary> {
    let config = Config::load_or_default(config_path)?;
    config.logging.init(cli.log_level.as_filter());
    info!(config = %config_path.display(), "betbot starting");

    let manager = build_sites_manager(&config);
    let mut report = build_report(&config);
    let sports = config.selected_sports();

    let summary = manager.run(sports.as_deref(), report.as_mut()).await;
    info!(
        leagues = summary.leagues,
        matches = summary.matches,
        "betbot finished"
    );
    Ok(summary)
}
