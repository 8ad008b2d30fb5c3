//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   ┌─────────┐      ┌─────────────────────┐      ┌──────────┐
//!   │  Site   │ ───▶ │ SitesManager/Event  │ ───▶ │  Report  │
//!   │ Adapter │      │    (application)    │      │ Adapter  │
//!   └─────────┘      └─────────────────────┘      └──────────┘
//! ```
//!
//! - [`Site`] - one bookmaker's odds for a (sport, league)
//! - [`Report`] - where merged league tables go

pub mod outbound;

pub use outbound::report::{CollectingReport, Report};
pub use outbound::site::{Site, SiteCatalog, SiteTarget};
