//! Observations reported by a single site: team pairs and their odds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Team names exactly as one site reported them, home side first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamPair {
    home: String,
    away: String,
}

impl TeamPair {
    /// Create a new team pair. Surrounding whitespace is trimmed.
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            home: home.into().trim().to_string(),
            away: away.into().trim().to_string(),
        }
    }

    /// Home team name.
    #[must_use]
    pub fn home(&self) -> &str {
        &self.home
    }

    /// Away team name.
    #[must_use]
    pub fn away(&self) -> &str {
        &self.away
    }
}

impl fmt::Display for TeamPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.home, self.away)
    }
}

/// Decimal odds for every outcome of one market, in positional order
/// (home / draw / away for a three-way market).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quote(Vec<f64>);

impl Quote {
    /// Create a quote from decimal odds.
    pub fn new(odds: impl Into<Vec<f64>>) -> Self {
        Self(odds.into())
    }

    /// The odds, one per outcome.
    #[must_use]
    pub fn odds(&self) -> &[f64] {
        &self.0
    }

    /// Number of outcomes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of absolute differences of implied probabilities per outcome.
    ///
    /// Returns `f64::INFINITY` when the quotes have different lengths or any
    /// odd on either side is zero, negative or not finite.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        quote_distance(&self.0, &other.0)
    }
}

impl From<Vec<f64>> for Quote {
    fn from(odds: Vec<f64>) -> Self {
        Self(odds)
    }
}

impl<const N: usize> From<[f64; N]> for Quote {
    fn from(odds: [f64; N]) -> Self {
        Self(odds.to_vec())
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|o| format!("{o:.2}")).collect();
        write!(f, "{}", parts.join(" / "))
    }
}

fn implied_probability(odds: f64) -> Option<f64> {
    (odds.is_finite() && odds > 0.0).then(|| 1.0 / odds)
}

/// Distance between two odds slices on the implied-probability scale.
#[must_use]
pub fn quote_distance(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return f64::INFINITY;
    }
    a.iter()
        .zip(b)
        .map(|(&x, &y)| match (implied_probability(x), implied_probability(y)) {
            (Some(px), Some(py)) => (px - py).abs(),
            _ => f64::INFINITY,
        })
        .sum()
}

/// Everything one site reported for one league, in the order it was
/// reported. Reporting the same team pair twice keeps the later odds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeagueQuotes {
    entries: Vec<(TeamPair, Quote)>,
}

impl LeagueQuotes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record odds for a team pair, replacing any earlier odds for it.
    pub fn insert(&mut self, teams: TeamPair, quote: Quote) {
        match self.entries.iter_mut().find(|(t, _)| *t == teams) {
            Some(entry) => entry.1 = quote,
            None => self.entries.push((teams, quote)),
        }
    }

    /// Odds recorded for a team pair.
    #[must_use]
    pub fn get(&self, teams: &TeamPair) -> Option<&Quote> {
        self.entries
            .iter()
            .find(|(t, _)| t == teams)
            .map(|(_, q)| q)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TeamPair, &Quote)> {
        self.entries.iter().map(|(t, q)| (t, q))
    }
}

impl FromIterator<(TeamPair, Quote)> for LeagueQuotes {
    fn from_iter<I: IntoIterator<Item = (TeamPair, Quote)>>(iter: I) -> Self {
        let mut quotes = Self::new();
        for (teams, quote) in iter {
            quotes.insert(teams, quote);
        }
        quotes
    }
}

impl IntoIterator for LeagueQuotes {
    type Item = (TeamPair, Quote);
    type IntoIter = std::vec::IntoIter<(TeamPair, Quote)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric() {
        let a = Quote::from([1.90, 3.40, 4.20]);
        let b = Quote::from([1.95, 3.30, 4.10]);
        assert_eq!(a.distance(&b), b.distance(&a));
    }

    #[test]
    fn distance_to_self_is_zero() {
        let a = Quote::from([2.10, 3.25, 3.60]);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn distance_of_close_quotes() {
        let a = Quote::from([1.90, 3.40, 4.20]);
        let b = Quote::from([1.95, 3.30, 4.10]);
        let d = a.distance(&b);
        assert!(d > 0.027 && d < 0.029, "distance was {d}");
    }

    #[test]
    fn non_positive_odds_never_match() {
        let a = Quote::from([0.0, 3.40, 4.20]);
        let b = Quote::from([1.95, 3.30, 4.10]);
        assert_eq!(a.distance(&b), f64::INFINITY);
        assert_eq!(b.distance(&a), f64::INFINITY);
        assert_eq!(a.distance(&a), f64::INFINITY);

        let negative = Quote::from([-1.5, 3.40, 4.20]);
        assert_eq!(negative.distance(&b), f64::INFINITY);
    }

    #[test]
    fn nan_odds_never_match() {
        let a = Quote::from([f64::NAN, 3.40, 4.20]);
        let b = Quote::from([1.95, 3.30, 4.10]);
        assert_eq!(a.distance(&b), f64::INFINITY);
    }

    #[test]
    fn mismatched_lengths_never_match() {
        let two_way = Quote::from([1.50, 2.60]);
        let three_way = Quote::from([1.50, 2.60, 9.00]);
        assert_eq!(two_way.distance(&three_way), f64::INFINITY);
    }

    #[test]
    fn empty_quotes_are_identical() {
        assert_eq!(quote_distance(&[], &[]), 0.0);
    }

    #[test]
    fn league_quotes_overwrite_same_pair() {
        let mut quotes = LeagueQuotes::new();
        let teams = TeamPair::new("Legia", "Lech");
        quotes.insert(teams.clone(), Quote::from([1.90, 3.40, 4.20]));
        quotes.insert(TeamPair::new("Wisla", "Piast"), Quote::from([2.0, 3.0, 4.0]));
        quotes.insert(teams.clone(), Quote::from([1.80, 3.50, 4.50]));

        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes.get(&teams), Some(&Quote::from([1.80, 3.50, 4.50])));
        let order: Vec<_> = quotes.iter().map(|(t, _)| t.home().to_string()).collect();
        assert_eq!(order, vec!["Legia", "Wisla"]);
    }

    #[test]
    fn team_pair_trims_whitespace() {
        let teams = TeamPair::new("  Legia ", "Lech\n");
        assert_eq!(teams.home(), "Legia");
        assert_eq!(teams.away(), "Lech");
        assert_eq!(teams.to_string(), "Legia - Lech");
    }

    #[test]
    fn quote_display() {
        assert_eq!(Quote::from([1.9, 3.4, 4.2]).to_string(), "1.90 / 3.40 / 4.20");
    }
}
