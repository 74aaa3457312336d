//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_watch` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use domain_watch::initialization::init_logger_with;
use domain_watch::{run_scan, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env (RDAP_BASE_URL etc.), if present
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_scan(config).await {
        Ok(report) => {
            println!(
                "Checked {} domain{} in {:.1}s: {} registered, {} with website, {} new event{}",
                report.domains_checked,
                if report.domains_checked == 1 { "" } else { "s" },
                report.elapsed_seconds,
                report.registered,
                report.websites,
                report.new_events,
                if report.new_events == 1 { "" } else { "s" },
            );
            println!(
                "Snapshot: {} | History: {}",
                report.snapshot_path.display(),
                report.history_path.display()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("domain_watch error: {:#}", e);
            process::exit(1);
        }
    }
}
