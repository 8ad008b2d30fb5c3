//! Site-agnostic domain logic: identifiers, quotes and match correlation.

pub mod event;
pub mod id;
pub mod quote;

pub use event::{CanonicalMatch, Event, DEFAULT_MATCH_THRESHOLD};
pub use id::{League, MatchId, Sport};
pub use quote::{quote_distance, LeagueQuotes, Quote, TeamPair};
