//! Betbot - cross-bookmaker odds aggregation.
//!
//! Fetches the odds several bookmakers quote for the same leagues and merges
//! them into one record per real match, so prices can be compared across
//! sites.
//!
//! # Architecture
//!
//! - **`domain`** - Identifiers, quotes and the [`domain::Event`] correlator
//!   that decides which observations are the same match by comparing implied
//!   probabilities, never team names
//! - **`port`** - The [`port::Site`] and [`port::Report`] traits
//! - **`application`** - [`application::SitesManager`], which drives one pass
//!   over every sport and league the registered sites cover
//! - **`adapter`** - Bookmaker sites (Sisal, Bwin), stdout reports and the CLI
//! - **`infrastructure`** - Configuration and wiring
//!
//! # Example
//!
//! ```no_run
//! use betbot::application::SitesManager;
//! use betbot::port::CollectingReport;
//!
//! # async fn example(manager: SitesManager) {
//! let mut report = CollectingReport::new();
//! let summary = manager.run(None, &mut report).await;
//! println!("{} leagues, {} matches", summary.leagues, summary.matches);
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
