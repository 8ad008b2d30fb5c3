//! Factory modules for building infrastructure components.
//!
//! - [`site`] - Sites manager construction
//! - [`report`] - Output report construction

pub mod report;
pub mod site;

pub use report::build_report;
pub use site::build_sites_manager;
