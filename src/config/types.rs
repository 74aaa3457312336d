//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_HISTORY_PATH, DEFAULT_RDAP_BASE, DEFAULT_SNAPSHOT_PATH, DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Scan configuration, parsed from the command line or constructed
/// programmatically.
///
/// # Examples
///
/// ```no_run
/// use domain_watch::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     domains_file: PathBuf::from("domains.txt"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(name = "domain_watch", version, about)]
pub struct Config {
    /// File with one domain name per line (blank lines and # comments skipped)
    pub domains_file: PathBuf,

    /// Where the current-state snapshot document is written
    #[arg(long, default_value = DEFAULT_SNAPSHOT_PATH)]
    pub snapshot_path: PathBuf,

    /// Where the history document is read from and written to
    #[arg(long, default_value = DEFAULT_HISTORY_PATH)]
    pub history_path: PathBuf,

    /// RDAP base URL for registration lookups
    #[arg(long, env = "RDAP_BASE_URL", default_value = DEFAULT_RDAP_BASE)]
    pub rdap_base: String,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Demote placeholder pages (registrar parking etc.) to "no website"
    /// using the built-in heuristic classifier
    #[arg(long)]
    pub classify: bool,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domains_file: PathBuf::from("domains.txt"),
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
            history_path: PathBuf::from(DEFAULT_HISTORY_PATH),
            rdap_base: DEFAULT_RDAP_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            classify: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
