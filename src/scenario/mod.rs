//! Lifecycle scenario
//!
//! Loads the booking fixture and runs the four-step lifecycle against the
//! remote API, threading the auth token and booking id from each response
//! into the next request.

pub mod fixture;
pub mod runner;

pub use fixture::{load_fixture, DEFAULT_FIXTURE_PATH};
pub use runner::{run_lifecycle, ScenarioResult};
