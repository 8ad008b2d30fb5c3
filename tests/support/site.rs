//! Scripted sites for driving the manager without a network.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use betbot::domain::{LeagueQuotes, Quote, TeamPair};
use betbot::error::SiteError;
use betbot::port::{Site, SiteCatalog, SiteTarget};

/// Site returning canned quotes per league id, optionally failing some.
pub struct ScriptedSite {
    name: &'static str,
    catalog: SiteCatalog,
    quotes: HashMap<u32, LeagueQuotes>,
    failing: HashSet<u32>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedSite {
    pub fn new(name: &'static str, catalog: SiteCatalog) -> Self {
        Self {
            name,
            catalog,
            quotes: HashMap::new(),
            failing: HashSet::new(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_quotes(mut self, league_id: u32, entries: &[(&str, &str, [f64; 3])]) -> Self {
        let quotes = entries
            .iter()
            .map(|(home, away, odds)| (TeamPair::new(*home, *away), Quote::from(*odds)))
            .collect();
        self.quotes.insert(league_id, quotes);
        self
    }

    pub fn failing_on(mut self, league_id: u32) -> Self {
        self.failing.insert(league_id);
        self
    }

    /// Counter of `fetch_quotes` calls, shared with the test.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl Site for ScriptedSite {
    fn name(&self) -> &'static str {
        self.name
    }

    fn catalog(&self) -> &SiteCatalog {
        &self.catalog
    }

    async fn fetch_quotes(&self, target: SiteTarget) -> Result<LeagueQuotes, SiteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(&target.league_id) {
            return Err(SiteError::Parse(format!(
                "expected markup missing for league {}",
                target.league_id
            )));
        }
        Ok(self.quotes.get(&target.league_id).cloned().unwrap_or_default())
    }
}

/// Catalog covering soccer/poland (id 1) and soccer/italy (id 2).
pub fn soccer_catalog() -> SiteCatalog {
    SiteCatalog::new().with_sport("soccer", 10, &[("poland", 1), ("italy", 2)])
}
