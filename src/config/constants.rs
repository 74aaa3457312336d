//! Configuration constants.
//!
//! This module defines the operational parameters of the probing pipeline:
//! timeouts, pacing, backoff, and retention.

use std::time::Duration;

/// Per-request timeout for RDAP registration lookups.
pub const REGISTRATION_TIMEOUT: Duration = Duration::from_secs(5);

/// Per-attempt timeout for website reachability probes.
///
/// Each scheme attempt (https, then http) gets its own budget, so a domain
/// whose https endpoint blackholes still answers on http within one pass.
pub const WEBSITE_TIMEOUT: Duration = Duration::from_secs(8);

/// Pause inserted between consecutive domains during a scan.
///
/// The scan is strictly sequential; this delay keeps the outbound request
/// rate courteous toward the registry and the probed hosts. Removing it
/// provokes upstream throttling (429s) on larger domain lists.
pub const PACING_DELAY: Duration = Duration::from_millis(150);

/// Lower bound of the backoff slept after a 429 from the registry.
pub const RATE_LIMIT_BACKOFF_MIN_MS: u64 = 1000;
/// Upper bound of the backoff slept after a 429 from the registry.
pub const RATE_LIMIT_BACKOFF_MAX_MS: u64 = 2000;

/// How long history events are retained, relative to the current run.
pub const HISTORY_RETENTION_DAYS: i64 = 365;

/// RDAP endpoint used when neither `--rdap-base` nor `RDAP_BASE_URL` is set.
pub const DEFAULT_RDAP_BASE: &str = "https://rdap.nic.ch";

/// Default output path for the current-state snapshot document.
pub const DEFAULT_SNAPSHOT_PATH: &str = "./data/snapshot.json";
/// Default output path for the history document.
pub const DEFAULT_HISTORY_PATH: &str = "./data/history.json";

/// Default User-Agent for all outbound requests.
///
/// Identifies the scanner honestly; registries tend to rate-limit anonymous
/// clients harder than named ones.
pub const DEFAULT_USER_AGENT: &str = concat!("domain_watch/", env!("CARGO_PKG_VERSION"));
