//! Sisal mobile (WAP) listing.
//!
//! The listing is an HTML page. Every match has a header inside
//! `table.event-header` (`<span class="fs15px b">Home - Away</span>`) and
//! its three-way odds follow as `span.odds-convert` elements with a decimal
//! comma. Odds are consumed in groups of three in document order.

use async_trait::async_trait;
use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

use super::http::HttpFetcher;
use super::settings::SisalConfig;
use crate::domain::{LeagueQuotes, Quote, TeamPair};
use crate::error::SiteError;
use crate::port::{Site, SiteCatalog, SiteTarget};

const MATCH_SELECTOR: &str = "table.event-header span.fs15px.b";
const ODDS_SELECTOR: &str = "span.odds-convert";
const OUTCOMES: usize = 3;

pub struct Sisal {
    http: HttpFetcher,
    base_url: String,
    catalog: SiteCatalog,
}

impl Sisal {
    #[must_use]
    pub fn new(http: HttpFetcher, config: &SisalConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
            catalog: Self::default_catalog(),
        }
    }

    /// Sports and leagues Sisal lists, with Sisal's identifiers.
    #[must_use]
    pub fn default_catalog() -> SiteCatalog {
        SiteCatalog::new().with_sport("soccer", 1, &[("poland", 183)])
    }

    fn listing_url(&self, target: SiteTarget) -> Result<Url, SiteError> {
        let mut url = Url::parse(&self.base_url)?.join("events_wap.t")?;
        url.query_pairs_mut().append_pair(
            "league",
            &format!("{}_{}", target.sport_id, target.league_id),
        );
        Ok(url)
    }
}

#[async_trait]
impl Site for Sisal {
    fn name(&self) -> &'static str {
        "sisal"
    }

    fn catalog(&self) -> &SiteCatalog {
        &self.catalog
    }

    async fn fetch_quotes(&self, target: SiteTarget) -> Result<LeagueQuotes, SiteError> {
        let url = self.listing_url(target)?;
        let body = self.http.get_text(&url).await?;
        parse_listing(&body)
    }
}

fn selector(css: &str) -> Result<Selector, SiteError> {
    Selector::parse(css).map_err(|e| SiteError::Parse(format!("invalid selector {css}: {e:?}")))
}

fn parse_odd(text: &str) -> Option<f64> {
    text.trim().replace(',', ".").parse().ok()
}

/// Parse a Sisal listing page into quotes.
///
/// Headers that do not split into two teams, incomplete odds groups and
/// unparsable odds skip that match only.
pub fn parse_listing(html: &str) -> Result<LeagueQuotes, SiteError> {
    let document = Html::parse_document(html);
    let match_selector = selector(MATCH_SELECTOR)?;
    let odds_selector = selector(ODDS_SELECTOR)?;

    let headers: Vec<String> = document
        .select(&match_selector)
        .map(|el| el.text().collect::<String>())
        .collect();
    let odds: Vec<String> = document
        .select(&odds_selector)
        .map(|el| el.text().collect::<String>())
        .collect();

    let mut quotes = LeagueQuotes::new();
    for (header, group) in headers.iter().zip(odds.chunks(OUTCOMES)) {
        let Some((home, away)) = header.split_once(" - ") else {
            debug!(header = %header.trim(), "Skipping header without two teams");
            continue;
        };
        if group.len() < OUTCOMES {
            debug!(header = %header.trim(), odds = group.len(), "Skipping incomplete odds");
            continue;
        }
        let parsed: Option<Vec<f64>> = group.iter().map(|o| parse_odd(o)).collect();
        let Some(parsed) = parsed else {
            debug!(header = %header.trim(), "Skipping unparsable odds");
            continue;
        };
        quotes.insert(TeamPair::new(home, away), Quote::new(parsed));
    }

    Ok(quotes)
}
