//! Site port: fetching one bookmaker's odds for a (sport, league).
//!
//! Every bookmaker has its own endpoint, identifiers and payload format.
//! Implementations hide all of that behind [`Site::fetch_quotes`] and carry a
//! static [`SiteCatalog`] mapping sport and league keys to the identifiers
//! the bookmaker uses.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::{League, LeagueQuotes, Sport};
use crate::error::SiteError;

/// Site-specific identifiers for one (sport, league).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteTarget {
    /// The bookmaker's sport identifier.
    pub sport_id: u32,
    /// The bookmaker's league/region identifier.
    pub league_id: u32,
}

#[derive(Debug, Clone, Default)]
struct SportEntry {
    id: u32,
    leagues: BTreeMap<League, u32>,
}

/// Static table of the sports and leagues a site covers.
///
/// # Example
///
/// ```
/// use betbot::domain::{League, Sport};
/// use betbot::port::SiteCatalog;
///
/// let catalog = SiteCatalog::new().with_sport("soccer", 1, &[("poland", 183)]);
/// let target = catalog.lookup(&Sport::from("soccer"), &League::from("poland"));
/// assert_eq!(target.map(|t| t.league_id), Some(183));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SiteCatalog {
    sports: BTreeMap<Sport, SportEntry>,
}

impl SiteCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sport with its site identifier and `(league key, league id)` pairs.
    #[must_use]
    pub fn with_sport(mut self, sport: &str, id: u32, leagues: &[(&str, u32)]) -> Self {
        let entry = self.sports.entry(Sport::from(sport)).or_default();
        entry.id = id;
        entry
            .leagues
            .extend(leagues.iter().map(|(key, id)| (League::from(*key), *id)));
        self
    }

    /// Sports this catalog covers.
    #[must_use]
    pub fn sports(&self) -> Vec<Sport> {
        self.sports.keys().cloned().collect()
    }

    /// League keys covered for a sport (empty when the sport is unknown).
    #[must_use]
    pub fn leagues(&self, sport: &Sport) -> BTreeSet<League> {
        self.sports
            .get(sport)
            .map(|entry| entry.leagues.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Site identifiers for a (sport, league), if covered.
    #[must_use]
    pub fn lookup(&self, sport: &Sport, league: &League) -> Option<SiteTarget> {
        let entry = self.sports.get(sport)?;
        let league_id = entry.leagues.get(league)?;
        Some(SiteTarget {
            sport_id: entry.id,
            league_id: *league_id,
        })
    }
}

/// A bookmaker that can report odds for the leagues in its catalog.
///
/// # Implementation Notes
///
/// - Team names are reported exactly as the bookmaker shows them.
/// - Odds must follow the same positional order as every other site
///   (home / draw / away for three-way markets).
/// - One outbound request per [`Site::fetch_quotes`] call; retries and
///   timeouts are the implementation's business.
#[async_trait]
pub trait Site: Send + Sync {
    /// Site name, used as the key of its odds in merged matches.
    fn name(&self) -> &'static str;

    /// Sports and leagues this site covers.
    fn catalog(&self) -> &SiteCatalog;

    /// Fetch and parse the listing for a covered league.
    async fn fetch_quotes(&self, target: SiteTarget) -> Result<LeagueQuotes, SiteError>;

    /// Sports this site declares support for.
    fn sports(&self) -> Vec<Sport> {
        self.catalog().sports()
    }

    /// League keys this site declares support for within a sport.
    fn supports(&self, sport: &Sport) -> BTreeSet<League> {
        self.catalog().leagues(sport)
    }

    /// Quotes for a (sport, league), never failing.
    ///
    /// Returns an empty mapping when the league is not in the catalog or when
    /// fetching or parsing fails; failures are logged.
    async fn league_quotes(&self, sport: &Sport, league: &League) -> LeagueQuotes {
        let Some(target) = self.catalog().lookup(sport, league) else {
            debug!(site = self.name(), %sport, %league, "League not covered");
            return LeagueQuotes::new();
        };

        info!(site = self.name(), %sport, %league, "Checking quotes");
        match self.fetch_quotes(target).await {
            Ok(quotes) => {
                debug!(site = self.name(), %sport, %league, quotes = quotes.len(), "Quotes fetched");
                quotes
            }
            Err(e) => {
                warn!(site = self.name(), %sport, %league, error = %e, "Failed to fetch quotes");
                LeagueQuotes::new()
            }
        }
    }
}
