//! Configuration from the environment
//!
//! All settings come from environment variables, optionally seeded from a
//! `.env` file. The `.env` file wins over already-exported variables so a
//! checked-out project always runs against the credentials it ships with.

use std::env;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use super::{Error, Result};

/// Default API base URL
const DEFAULT_BASE_URL: &str = "https://restful-booker.herokuapp.com";

/// Default per-request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Runtime settings for a lifecycle run
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL of the remote API
    pub base_url: String,

    /// Username sent to the auth endpoint
    pub username: String,

    /// Password sent to the auth endpoint
    pub password: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Settings {
    /// Load settings from the environment
    ///
    /// Reads `.env` first (overriding exported variables), then resolves:
    /// - `BOOKER_BASE_URL` (default: the public Restful Booker instance)
    /// - `BOOKER_USERNAME`, falling back to `USERNAME`
    /// - `BOOKER_PASSWORD`, falling back to `PASSWORD`
    /// - `BOOKER_TIMEOUT_SECS` (default: 10)
    ///
    /// Missing credentials are a hard error: the run must abort before any
    /// request goes out.
    pub fn load() -> Result<Self> {
        // Ignore a missing .env; exported variables are enough.
        let _ = dotenvy::dotenv_override();

        let base_url = env::var("BOOKER_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let username = env::var("BOOKER_USERNAME")
            .or_else(|_| env::var("USERNAME"))
            .map_err(|_| Error::MissingEnv("BOOKER_USERNAME".to_string()))?;

        let password = env::var("BOOKER_PASSWORD")
            .or_else(|_| env::var("PASSWORD"))
            .map_err(|_| Error::MissingEnv("BOOKER_PASSWORD".to_string()))?;

        let timeout_secs = match env::var("BOOKER_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|_| {
                Error::Config(format!("Invalid BOOKER_TIMEOUT_SECS value: '{}'", raw))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            username,
            password,
            timeout_secs,
        })
    }

    /// Per-request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The `Authorization: Basic` credential derived from username/password
    ///
    /// The remote API accepts the same credential pair for `/auth` and for
    /// basic-auth on delete, so configuration carries it once.
    pub fn basic_auth(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password);
        format!("Basic {}", BASE64.encode(raw.as_bytes()))
    }
}
