//! Bookmaker site adapters.

mod bwin;
mod http;
mod sisal;

pub mod settings;

pub use bwin::Bwin;
pub use http::HttpFetcher;
pub use settings::{BwinConfig, HttpConfig, SisalConfig, SitesConfig};
pub use sisal::{parse_listing as parse_sisal_listing, Sisal};
