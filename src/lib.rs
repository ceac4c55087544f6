//! Restful Booker lifecycle checker
//!
//! This library drives a public booking API through its full lifecycle
//! (authenticate, create, retrieve, delete) and verifies every response
//! against a JSON fixture.

pub mod api;
pub mod cli;
pub mod commands;
pub mod common;
pub mod scenario;

// Re-export commonly used types for tests
pub use common::config::Settings;
pub use common::{Error, Result};
pub use scenario::{run_lifecycle, ScenarioResult};
