//! Sites manager factory.
//!
//! Builds the [`SitesManager`] with every site enabled in configuration,
//! sharing one HTTP client setup.

use tracing::{info, warn};

use crate::adapter::outbound::site::{Bwin, HttpFetcher, Sisal};
use crate::application::SitesManager;
use crate::infrastructure::config::settings::Config;

/// Build the sites manager from configuration.
///
/// Sites are registered in a fixed order (sisal, bwin), which is also the
/// order their odds are merged in.
#[must_use]
pub fn build_sites_manager(config: &Config) -> SitesManager {
    let http = HttpFetcher::from_config(&config.http);
    let mut manager = SitesManager::with_threshold(config.matching.threshold);

    if config.sites.sisal.enabled {
        manager.register(Box::new(Sisal::new(http.clone(), &config.sites.sisal)));
    }
    if config.sites.bwin.enabled {
        manager.register(Box::new(Bwin::new(http, &config.sites.bwin)));
    }

    if manager.is_empty() {
        warn!("All sites are disabled");
    } else {
        info!(sites = ?manager.site_names(), "Sites registered");
    }
    manager
}
