//! Infrastructure layer.
//!
//! Configuration loading and the wiring that turns configuration into a
//! ready-to-run [`SitesManager`](crate::application::SitesManager).
//!
//! - [`config`] - Configuration loading and validation
//! - [`factory`] - Component factory functions

pub mod config;
pub mod factory;
