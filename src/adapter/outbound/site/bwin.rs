//! Bwin betting-offer feed.
//!
//! The feed is JSON: a list of fixtures, each with its participants and the
//! games (markets) offered on it. The three-way result market is the first
//! game with exactly three results, ordered home / draw / away.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::http::HttpFetcher;
use super::settings::BwinConfig;
use crate::domain::{LeagueQuotes, Quote, TeamPair};
use crate::error::SiteError;
use crate::port::{Site, SiteCatalog, SiteTarget};

const OUTCOMES: usize = 3;

#[derive(Debug, Deserialize)]
pub(crate) struct FixturesResponse {
    #[serde(default)]
    fixtures: Vec<Fixture>,
}

#[derive(Debug, Deserialize)]
struct Fixture {
    #[serde(default)]
    participants: Vec<Participant>,
    #[serde(default)]
    games: Vec<Game>,
}

#[derive(Debug, Deserialize)]
struct Participant {
    name: LocalizedName,
}

#[derive(Debug, Deserialize)]
struct LocalizedName {
    value: String,
}

#[derive(Debug, Deserialize)]
struct Game {
    #[serde(default)]
    results: Vec<GameResult>,
}

#[derive(Debug, Deserialize)]
struct GameResult {
    odds: f64,
}

impl Fixture {
    fn teams(&self) -> Option<TeamPair> {
        match self.participants.as_slice() {
            [home, away, ..] => Some(TeamPair::new(&*home.name.value, &*away.name.value)),
            _ => None,
        }
    }

    fn three_way(&self) -> Option<Quote> {
        self.games
            .iter()
            .find(|g| g.results.len() == OUTCOMES)
            .map(|g| Quote::new(g.results.iter().map(|r| r.odds).collect::<Vec<_>>()))
    }
}

pub struct Bwin {
    http: HttpFetcher,
    base_url: String,
    access_id: Option<String>,
    catalog: SiteCatalog,
}

impl Bwin {
    #[must_use]
    pub fn new(http: HttpFetcher, config: &BwinConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
            access_id: config.access_id.clone(),
            catalog: Self::default_catalog(),
        }
    }

    /// Sports and leagues Bwin lists, with Bwin's identifiers.
    #[must_use]
    pub fn default_catalog() -> SiteCatalog {
        SiteCatalog::new().with_sport("soccer", 4, &[("poland", 22)])
    }

    fn fixtures_url(&self, target: SiteTarget) -> Result<Url, SiteError> {
        let mut url = Url::parse(&self.base_url)?.join("cds-api/bettingoffer/fixtures")?;
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("sportIds", &target.sport_id.to_string())
                .append_pair("regionIds", &target.league_id.to_string());
            if let Some(access_id) = &self.access_id {
                query.append_pair("x-bwin-accessid", access_id);
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl Site for Bwin {
    fn name(&self) -> &'static str {
        "bwin"
    }

    fn catalog(&self) -> &SiteCatalog {
        &self.catalog
    }

    async fn fetch_quotes(&self, target: SiteTarget) -> Result<LeagueQuotes, SiteError> {
        let url = self.fixtures_url(target)?;
        let response: FixturesResponse = self.http.get_json(&url).await?;
        Ok(parse_fixtures(response))
    }
}

/// Turn a fixtures payload into quotes, skipping fixtures without two
/// participants or without a three-way market.
pub(crate) fn parse_fixtures(response: FixturesResponse) -> LeagueQuotes {
    let mut quotes = LeagueQuotes::new();
    for fixture in &response.fixtures {
        let (Some(teams), Some(quote)) = (fixture.teams(), fixture.three_way()) else {
            debug!(
                participants = fixture.participants.len(),
                games = fixture.games.len(),
                "Skipping fixture without a three-way market"
            );
            continue;
        };
        quotes.insert(teams, quote);
    }
    quotes
}
