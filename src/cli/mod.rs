//! CLI command handling
//!
//! Dispatches CLI commands and maps a failed lifecycle run to a non-zero
//! exit through the error path.

use std::path::PathBuf;

use colored::Colorize;

use crate::commands::Commands;
use crate::common::config::Settings;
use crate::common::{Error, Result};
use crate::scenario::{load_fixture, run_lifecycle, DEFAULT_FIXTURE_PATH};

/// Dispatch a CLI command
pub async fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            fixture,
            base_url,
            timeout,
            verbose,
        } => {
            let mut settings = Settings::load()?;

            if let Some(url) = base_url {
                settings.base_url = url.trim_end_matches('/').to_string();
            }
            if let Some(secs) = timeout {
                settings.timeout_secs = secs;
            }

            let fixture_path =
                fixture.unwrap_or_else(|| PathBuf::from(DEFAULT_FIXTURE_PATH));
            let booking = load_fixture(&fixture_path)?;

            let result = run_lifecycle(&settings, &booking, verbose).await?;

            if result.passed {
                Ok(())
            } else {
                Err(Error::ScenarioFailed {
                    step: result.steps_run,
                    message: result
                        .error
                        .unwrap_or_else(|| "unknown failure".to_string()),
                })
            }
        }

        Commands::Check { fixture } => {
            let settings = Settings::load()?;
            let fixture_path =
                fixture.unwrap_or_else(|| PathBuf::from(DEFAULT_FIXTURE_PATH));
            let booking = load_fixture(&fixture_path)?;

            println!(
                "{} configuration OK ({} @ {}, timeout {}s)",
                "✓".green(),
                settings.username,
                settings.base_url,
                settings.timeout_secs
            );
            println!(
                "{} fixture OK ({} {}, {} to {})",
                "✓".green(),
                booking.firstname,
                booking.lastname,
                booking.bookingdates.checkin,
                booking.bookingdates.checkout
            );

            Ok(())
        }
    }
}
