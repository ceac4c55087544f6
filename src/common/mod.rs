//! Common utilities shared across the CLI

pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};

/// Serializes tests that mutate process-wide environment variables
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
