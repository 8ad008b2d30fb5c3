//! Outbound adapters (driven side).

pub mod report;
pub mod site;
