//! domain_watch library: domain registration and website monitoring
//!
//! This library probes a fixed list of domain names for registration status
//! (via an RDAP registry lookup) and website reachability (https with http
//! fallback), persists the aggregated result as a JSON snapshot, and keeps
//! a pruned history of status transitions across runs.
//!
//! # Example
//!
//! ```no_run
//! use domain_watch::{run_scan, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     domains_file: std::path::PathBuf::from("domains.txt"),
//!     ..Default::default()
//! };
//!
//! let report = run_scan(config).await?;
//! println!("{} domains checked, {} history events", report.domains_checked, report.new_events);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or call library functions within an async context.

#![warn(missing_docs)]

mod classify;
pub mod config;
mod error_handling;
mod history;
pub mod initialization;
mod models;
mod probe;
mod scan;
mod storage;

// Re-export public API
pub use classify::{HeuristicClassifier, SiteClassifier};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{InitializationError, StoreError};
pub use history::reconcile;
pub use models::{
    DomainRecord, HistoryEvent, HistoryLog, LastState, Protocol, ScanSnapshot, Status,
    WebsiteProbe,
};
pub use probe::{probe_registration, probe_website};
pub use run::{run_scan, ScanReport};
pub use scan::Scanner;
pub use storage::{read_history, read_snapshot, write_history, write_snapshot};

// Internal run module (wires scanning, reconciliation, and persistence)
mod run {
    use std::path::{Path, PathBuf};

    use anyhow::{Context, Result};
    use chrono::Utc;
    use log::info;
    use tokio::io::{AsyncBufReadExt, BufReader};

    use crate::classify::HeuristicClassifier;
    use crate::config::Config;
    use crate::history::reconcile;
    use crate::initialization::init_client;
    use crate::scan::Scanner;
    use crate::storage;

    /// Results of a completed scan run.
    #[derive(Debug, Clone)]
    pub struct ScanReport {
        /// Number of domains probed.
        pub domains_checked: usize,
        /// How many of them are registered.
        pub registered: usize,
        /// How many have a reachable website.
        pub websites: usize,
        /// History events appended by this run.
        pub new_events: usize,
        /// Elapsed wall-clock time in seconds.
        pub elapsed_seconds: f64,
        /// Where the snapshot document was written.
        pub snapshot_path: PathBuf,
        /// Where the history document was written.
        pub history_path: PathBuf,
    }

    /// Reads the domain list: one domain per line, trimmed; blank lines and
    /// `#` comments are skipped.
    async fn load_domains(path: &Path) -> Result<Vec<String>> {
        let file = tokio::fs::File::open(path)
            .await
            .with_context(|| format!("Failed to open domain list {}", path.display()))?;

        let mut domains = Vec::new();
        let mut lines = BufReader::new(file).lines();
        while let Some(line) = lines.next_line().await.context("Failed to read domain list")? {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            domains.push(trimmed.to_string());
        }
        Ok(domains)
    }

    /// Runs one full scan: probe every configured domain, reconcile the
    /// result against the stored history, and persist both documents.
    ///
    /// Per-domain probe failures are absorbed by the probers and never fail
    /// the run; an unreadable domain list or an unwritable output path does.
    ///
    /// # Errors
    ///
    /// Returns an error if the domain list cannot be read, the HTTP client
    /// cannot be built, or either output document cannot be written.
    pub async fn run_scan(config: Config) -> Result<ScanReport> {
        let domains = load_domains(&config.domains_file).await?;
        info!(
            "Loaded {} domains from {}",
            domains.len(),
            config.domains_file.display()
        );

        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let mut scanner = Scanner::new(client, &config.rdap_base);
        if config.classify {
            scanner = scanner.with_classifier(Box::new(HeuristicClassifier::new()));
        }

        let start = std::time::Instant::now();
        let snapshot = scanner.run(&domains).await;

        let prior = storage::read_history(&config.history_path).await;
        let (history, new_events) = reconcile(&snapshot, prior, Utc::now());

        storage::write_snapshot(&config.snapshot_path, &snapshot)
            .await
            .context("Failed to write snapshot document")?;
        storage::write_history(&config.history_path, &history)
            .await
            .context("Failed to write history document")?;

        if new_events > 0 {
            info!("Recorded {new_events} status change(s)");
        }

        let registered = snapshot.domains.iter().filter(|r| r.registered).count();
        let websites = snapshot
            .domains
            .iter()
            .filter(|r| r.website.present)
            .count();

        Ok(ScanReport {
            domains_checked: snapshot.domains.len(),
            registered,
            websites,
            new_events,
            elapsed_seconds: start.elapsed().as_secs_f64(),
            snapshot_path: config.snapshot_path,
            history_path: config.history_path,
        })
    }
}
