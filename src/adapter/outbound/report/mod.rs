//! Report adapters writing merged leagues to an output stream.

mod json;
mod table;

pub use json::JsonReport;
pub use table::TableReport;
