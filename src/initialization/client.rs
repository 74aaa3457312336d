//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Connect timeout applied to all outbound requests; per-request total
/// timeouts are set at the call sites (probers use their own budgets).
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Builds the shared HTTP client used by both probers.
///
/// One client for the whole run keeps connection pooling effective when the
/// same registry host is queried for every domain.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .connect_timeout(CONNECT_TIMEOUT)
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}
