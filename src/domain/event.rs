//! Match correlation for one (sport, league).
//!
//! An [`Event`] collects the observations every site reported for a league
//! and decides which of them describe the same real match. Team names are
//! never compared: sites spell, abbreviate and order them differently. Two
//! observations are the same match when their implied probabilities are
//! close, i.e. their [`Quote::distance`] is below the event threshold.
//!
//! # Example
//!
//! ```
//! use betbot::domain::{Event, LeagueQuotes, Quote, TeamPair};
//!
//! let mut event = Event::new("soccer", "poland");
//!
//! let a: LeagueQuotes = [(TeamPair::new("Legia", "Lech"), Quote::from([1.90, 3.40, 4.20]))]
//!     .into_iter()
//!     .collect();
//! let b: LeagueQuotes = [(
//!     TeamPair::new("Lech Poznan", "Legia Warszawa"),
//!     Quote::from([1.95, 3.30, 4.10]),
//! )]
//! .into_iter()
//! .collect();
//!
//! event.add_site_quotes("sisal", a);
//! event.add_site_quotes("bwin", b);
//!
//! assert_eq!(event.len(), 1);
//! ```

use serde::Serialize;
use tracing::{debug, trace};

use super::id::{League, MatchId, Sport};
use super::quote::{LeagueQuotes, Quote, TeamPair};

/// Distance below which two quotes are treated as the same match.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.05;

/// One real match with the odds each site reported for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalMatch {
    id: MatchId,
    #[serde(serialize_with = "serialize_quotes")]
    quotes: Vec<(String, Quote)>,
}

impl CanonicalMatch {
    fn new(id: MatchId) -> Self {
        Self {
            id,
            quotes: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &MatchId {
        &self.id
    }

    /// Odds reported by a site for this match.
    #[must_use]
    pub fn quote(&self, site: &str) -> Option<&Quote> {
        self.quotes.iter().find(|(s, _)| s == site).map(|(_, q)| q)
    }

    /// Site quotes in the order sites were first recorded.
    pub fn quotes(&self) -> impl Iterator<Item = (&str, &Quote)> {
        self.quotes.iter().map(|(s, q)| (s.as_str(), q))
    }

    /// Number of sites quoting this match.
    #[must_use]
    pub fn site_count(&self) -> usize {
        self.quotes.len()
    }

    fn record(&mut self, site: &str, quote: Quote) {
        match self.quotes.iter_mut().find(|(s, _)| s == site) {
            Some(entry) => entry.1 = quote,
            None => self.quotes.push((site.to_string(), quote)),
        }
    }

    fn closest_within(&self, candidate: &Quote, threshold: f64) -> bool {
        self.quotes
            .iter()
            .any(|(_, recorded)| candidate.distance(recorded) < threshold)
    }
}

fn serialize_quotes<S>(quotes: &[(String, Quote)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeMap;

    let mut map = serializer.serialize_map(Some(quotes.len()))?;
    for (site, quote) in quotes {
        map.serialize_entry(site, quote)?;
    }
    map.end()
}

/// Merged cross-site odds for one (sport, league), valid for a single pass.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    sport: Sport,
    league: League,
    #[serde(skip)]
    threshold: f64,
    matches: Vec<CanonicalMatch>,
}

impl Event {
    /// Create an empty event using [`DEFAULT_MATCH_THRESHOLD`].
    pub fn new(sport: impl Into<Sport>, league: impl Into<League>) -> Self {
        Self::with_threshold(sport, league, DEFAULT_MATCH_THRESHOLD)
    }

    /// Create an empty event with a custom match threshold.
    pub fn with_threshold(
        sport: impl Into<Sport>,
        league: impl Into<League>,
        threshold: f64,
    ) -> Self {
        Self {
            sport: sport.into(),
            league: league.into(),
            threshold,
            matches: Vec::new(),
        }
    }

    #[must_use]
    pub fn sport(&self) -> &Sport {
        &self.sport
    }

    #[must_use]
    pub fn league(&self) -> &League {
        &self.league
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Number of canonical matches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &MatchId) -> Option<&CanonicalMatch> {
        self.matches.iter().find(|m| m.id == *id)
    }

    /// Matches in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &CanonicalMatch> {
        self.matches.iter()
    }

    /// Resolve an observation to a canonical match, creating one if no
    /// recorded quote is close enough.
    ///
    /// Existing matches and their sites are scanned in insertion order and
    /// the first one under the threshold wins.
    pub fn resolve(&mut self, teams: &TeamPair, quote: &Quote) -> MatchId {
        if let Some(found) = self
            .matches
            .iter()
            .find(|m| m.closest_within(quote, self.threshold))
        {
            trace!(teams = %teams, match_id = %found.id, "Resolved to existing match");
            return found.id.clone();
        }

        let id = self.unused_id(MatchId::from_teams(teams.home(), teams.away()));
        debug!(teams = %teams, match_id = %id, "New match");
        self.matches.push(CanonicalMatch::new(id.clone()));
        id
    }

    /// Merge one site's quotes for this league into the event.
    ///
    /// Feeding the same site twice overwrites its earlier odds.
    pub fn add_site_quotes(&mut self, site: &str, quotes: LeagueQuotes) {
        let reported = quotes.len();
        for (teams, quote) in quotes {
            let id = self.resolve(&teams, &quote);
            if let Some(entry) = self.matches.iter_mut().find(|m| m.id == id) {
                entry.record(site, quote);
            }
        }
        debug!(
            site,
            sport = %self.sport,
            league = %self.league,
            reported,
            matches = self.matches.len(),
            "Merged site quotes"
        );
    }

    fn unused_id(&self, base: MatchId) -> MatchId {
        if self.get(&base).is_none() {
            return base;
        }
        (2..)
            .map(|n| base.with_ordinal(n))
            .find(|id| self.get(id).is_none())
            .unwrap_or(base)
    }
}
