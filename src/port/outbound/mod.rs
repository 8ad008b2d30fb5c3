//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the bookmaker sites a pass reads from and the
//! sink merged leagues are written to.

pub mod report;
pub mod site;
