//! Booker CLI - an end-to-end checker for the Restful Booker API
//!
//! Runs the booking lifecycle (authenticate, create, retrieve, delete)
//! against the remote API and exits non-zero on the first unmet
//! expectation.

use booker::{cli, commands::Commands, common};
use clap::Parser;

#[derive(Parser)]
#[command(name = "booker", about = "End-to-end lifecycle checker for the Restful Booker API")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    common::logging::init();

    let cli = Cli::parse();

    if let Err(e) = cli::dispatch(cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
