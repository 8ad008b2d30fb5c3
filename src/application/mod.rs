//! Application services (use cases).

pub mod manager;

pub use manager::{PassSummary, SitesManager};
