//! Aggregation pass over every registered site.
//!
//! The manager owns the sites and the union of the leagues they cover. A
//! pass walks sports and leagues in key order, fetches every site's quotes
//! for the league concurrently, merges them into a fresh [`Event`] in
//! registration order and hands the event to a [`Report`].

use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;

use futures_util::future::join_all;
use tracing::{debug, info, warn};

use crate::domain::{Event, League, Sport, DEFAULT_MATCH_THRESHOLD};
use crate::port::{Report, Site};

/// Outcome of one aggregation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassSummary {
    /// Leagues checked.
    pub leagues: usize,
    /// Canonical matches found across all leagues.
    pub matches: usize,
    /// Leagues the report failed to emit.
    pub report_failures: usize,
}

/// Registered sites and the sports/leagues they cover.
pub struct SitesManager {
    sites: Vec<Box<dyn Site>>,
    registry: BTreeMap<Sport, BTreeSet<League>>,
    threshold: f64,
}

impl Default for SitesManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SitesManager {
    /// Create a manager with no sites.
    #[must_use]
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_MATCH_THRESHOLD)
    }

    /// Create a manager whose events use a custom match threshold.
    #[must_use]
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            sites: Vec::new(),
            registry: BTreeMap::new(),
            threshold,
        }
    }

    /// Register a site and add the leagues it covers to the registry.
    ///
    /// Sites are merged in registration order.
    pub fn register(&mut self, site: Box<dyn Site>) {
        for sport in site.sports() {
            let leagues = site.supports(&sport);
            debug!(site = site.name(), %sport, leagues = leagues.len(), "Registering site leagues");
            self.registry.entry(sport).or_default().extend(leagues);
        }
        self.sites.push(site);
    }

    /// Number of registered sites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Names of the registered sites, in registration order.
    #[must_use]
    pub fn site_names(&self) -> Vec<&'static str> {
        self.sites.iter().map(|s| s.name()).collect()
    }

    /// Every sport some site covers, in key order.
    #[must_use]
    pub fn sports(&self) -> Vec<Sport> {
        self.registry.keys().cloned().collect()
    }

    /// Union of the leagues sites cover for a sport, in key order.
    #[must_use]
    pub fn leagues(&self, sport: &Sport) -> Vec<League> {
        self.registry
            .get(sport)
            .map(|leagues| leagues.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Fetch every site's quotes for one league and merge them.
    ///
    /// Fetches run concurrently; merging happens afterwards in registration
    /// order so the result does not depend on which site answers first.
    pub async fn check_league(&self, sport: &Sport, league: &League) -> Event {
        let start = Instant::now();
        let fetches = self
            .sites
            .iter()
            .map(|site| site.league_quotes(sport, league));
        let results = join_all(fetches).await;

        let mut event = Event::with_threshold(sport.clone(), league.clone(), self.threshold);
        for (site, quotes) in self.sites.iter().zip(results) {
            if quotes.is_empty() {
                continue;
            }
            event.add_site_quotes(site.name(), quotes);
        }

        info!(
            %sport,
            %league,
            matches = event.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "League checked"
        );
        event
    }

    /// Run one pass and emit each league's event to `report`.
    ///
    /// `sports` restricts the pass; `None` checks every registered sport.
    /// Site failures only empty that site's contribution; report failures
    /// are logged and counted.
    pub async fn run(&self, sports: Option<&[Sport]>, report: &mut dyn Report) -> PassSummary {
        let mut summary = PassSummary::default();

        if self.sites.is_empty() {
            warn!("No sites registered, nothing to check");
            return summary;
        }

        let sports = match sports {
            Some(selected) => selected.to_vec(),
            None => self.sports(),
        };

        for sport in &sports {
            let leagues = self.leagues(sport);
            if leagues.is_empty() {
                warn!(%sport, "No registered site covers this sport");
                continue;
            }

            for league in &leagues {
                let event = self.check_league(sport, league).await;
                summary.leagues += 1;
                summary.matches += event.len();

                if let Err(e) = report.emit(&event) {
                    warn!(%sport, %league, error = %e, "Failed to report league");
                    summary.report_failures += 1;
                }
            }
        }

        info!(
            sites = self.sites.len(),
            leagues = summary.leagues,
            matches = summary.matches,
            "Pass complete"
        );
        summary
    }
}
