//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sport key, e.g. `soccer`.
///
/// Opaque to the core: adapters match it against their own catalogs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Sport(String);

impl Sport {
    /// Create a new `Sport` from a string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the sport key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Sport {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Sport {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// League key within a sport, e.g. `poland`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct League(String);

impl League {
    /// Create a new `League` from a string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the league key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for League {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for League {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Identifier of a canonical match inside one event.
///
/// Derived once from the team names of the first observation and never
/// renamed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchId(String);

impl MatchId {
    /// Separator placed between the two team names.
    pub const SEPARATOR: &'static str = " VS ";

    /// Build the identifier for a pair of team names.
    #[must_use]
    pub fn from_teams(home: &str, away: &str) -> Self {
        Self(format!(
            "{}{}{}",
            home.to_lowercase(),
            Self::SEPARATOR,
            away.to_lowercase()
        ))
    }

    /// Get the match ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derive a sibling identifier carrying an ordinal suffix (`#2`, `#3`, ...).
    #[must_use]
    pub(crate) fn with_ordinal(&self, ordinal: usize) -> Self {
        Self(format!("{}#{ordinal}", self.0))
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MatchId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
