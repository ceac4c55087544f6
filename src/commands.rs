//! CLI command definitions
//!
//! Defines the clap commands for the booker CLI.

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the booking lifecycle against the remote API
    Run {
        /// Path to the booking fixture JSON file (default: booking_data.json)
        #[arg(long)]
        fixture: Option<PathBuf>,

        /// Override the API base URL (default: BOOKER_BASE_URL)
        #[arg(long)]
        base_url: Option<String>,

        /// Override the per-request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Verbose output
        #[arg(long, short)]
        verbose: bool,
    },

    /// Validate configuration and fixture without touching the network
    Check {
        /// Path to the booking fixture JSON file (default: booking_data.json)
        #[arg(long)]
        fixture: Option<PathBuf>,
    },
}
