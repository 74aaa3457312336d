//! Registration lookup against an RDAP registry endpoint.
//!
//! A registration probe is a HEAD request to `<rdap_base>/domain/<name>`.
//! The registry answers with an HTTP status; the mapping onto the
//! registration question is the policy table in
//! [`classify_registration_status`]. One bounded retry after a 429 is the
//! only retry this prober performs.

use std::time::Duration;

use log::{debug, warn};
use rand::Rng;
use reqwest::{Client, StatusCode};
use strum_macros::EnumIter as EnumIterMacro;
use url::Url;

use crate::config::{
    RATE_LIMIT_BACKOFF_MAX_MS, RATE_LIMIT_BACKOFF_MIN_MS, REGISTRATION_TIMEOUT,
};

/// How a single RDAP response maps onto the registration question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterMacro)]
pub enum RegistrationOutcome {
    /// The registry has a record for the domain.
    Registered,
    /// The registry answered that no such domain exists.
    Unregistered,
    /// The registry throttled us; worth one backoff and retry.
    RateLimited,
    /// Anything else: unexpected status, timeout, network failure. Resolves
    /// to "not registered" (fail-closed).
    Indeterminate,
}

/// The policy table: RDAP status code -> outcome.
///
/// 401 counts as registered: some registries protect existing records
/// behind authentication, but the record demonstrably exists.
pub(crate) fn classify_registration_status(status: StatusCode) -> RegistrationOutcome {
    match status.as_u16() {
        200 | 401 => RegistrationOutcome::Registered,
        404 => RegistrationOutcome::Unregistered,
        429 => RegistrationOutcome::RateLimited,
        _ => RegistrationOutcome::Indeterminate,
    }
}

/// Builds `<rdap_base>/domain/<name>` with the domain percent-encoded as a
/// path segment. Handles bases with or without a trailing slash.
pub(crate) fn rdap_domain_url(rdap_base: &str, domain: &str) -> Option<Url> {
    let mut url = Url::parse(rdap_base).ok()?;
    url.path_segments_mut()
        .ok()?
        .pop_if_empty()
        .push("domain")
        .push(domain);
    Some(url)
}

async fn head_registry(client: &Client, url: Url, domain: &str) -> RegistrationOutcome {
    match client
        .head(url)
        .timeout(REGISTRATION_TIMEOUT)
        .send()
        .await
    {
        Ok(response) => {
            let outcome = classify_registration_status(response.status());
            debug!(
                "RDAP {} -> {} ({:?})",
                domain,
                response.status(),
                outcome
            );
            outcome
        }
        Err(e) => {
            debug!("RDAP request for {domain} failed: {e}");
            RegistrationOutcome::Indeterminate
        }
    }
}

/// Determines whether `domain` is registered.
///
/// Never errors: timeouts, network failures, and unexpected statuses all
/// resolve to `false`. A 429 is retried exactly once after a 1-2s backoff;
/// only a clean registered/not-found answer on the retry counts, everything
/// else is `false`.
pub async fn probe_registration(client: &Client, rdap_base: &str, domain: &str) -> bool {
    let Some(url) = rdap_domain_url(rdap_base, domain) else {
        warn!("Invalid RDAP base URL {rdap_base:?}, treating {domain} as unregistered");
        return false;
    };

    match head_registry(client, url.clone(), domain).await {
        RegistrationOutcome::Registered => true,
        RegistrationOutcome::Unregistered | RegistrationOutcome::Indeterminate => false,
        RegistrationOutcome::RateLimited => {
            let backoff_ms = rand::rng()
                .random_range(RATE_LIMIT_BACKOFF_MIN_MS..=RATE_LIMIT_BACKOFF_MAX_MS);
            debug!("RDAP rate-limited for {domain}, retrying once after {backoff_ms}ms");
            tokio::time::sleep(Duration::from_millis(backoff_ms)).await;

            matches!(
                head_registry(client, url, domain).await,
                RegistrationOutcome::Registered
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_policy_table_registered_statuses() {
        assert_eq!(
            classify_registration_status(StatusCode::OK),
            RegistrationOutcome::Registered
        );
        assert_eq!(
            classify_registration_status(StatusCode::UNAUTHORIZED),
            RegistrationOutcome::Registered
        );
    }

    #[test]
    fn test_policy_table_unregistered() {
        assert_eq!(
            classify_registration_status(StatusCode::NOT_FOUND),
            RegistrationOutcome::Unregistered
        );
    }

    #[test]
    fn test_policy_table_rate_limited() {
        assert_eq!(
            classify_registration_status(StatusCode::TOO_MANY_REQUESTS),
            RegistrationOutcome::RateLimited
        );
    }

    #[test]
    fn test_policy_table_everything_else_is_indeterminate() {
        // Statuses a registry could plausibly emit that all fail closed
        for code in [301u16, 400, 403, 405, 418, 451, 500, 502, 503, 504] {
            let status = StatusCode::from_u16(code).unwrap();
            assert_eq!(
                classify_registration_status(status),
                RegistrationOutcome::Indeterminate,
                "status {code} should be indeterminate"
            );
        }
    }

    #[test]
    fn test_policy_table_is_exhaustive() {
        // Every outcome variant is reachable from some status code, so the
        // table has no dead rows
        let reachable: Vec<RegistrationOutcome> = [200u16, 404, 429, 500]
            .iter()
            .map(|&c| classify_registration_status(StatusCode::from_u16(c).unwrap()))
            .collect();
        for outcome in RegistrationOutcome::iter() {
            assert!(
                reachable.contains(&outcome),
                "{outcome:?} unreachable from the policy table"
            );
        }
    }

    #[test]
    fn test_rdap_domain_url_join() {
        let url = rdap_domain_url("https://rdap.nic.ch", "pff27.ch").unwrap();
        assert_eq!(url.as_str(), "https://rdap.nic.ch/domain/pff27.ch");
    }

    #[test]
    fn test_rdap_domain_url_trailing_slash() {
        let url = rdap_domain_url("https://rdap.nic.ch/", "pff27.ch").unwrap();
        assert_eq!(url.as_str(), "https://rdap.nic.ch/domain/pff27.ch");
    }

    #[test]
    fn test_rdap_domain_url_with_base_path() {
        let url = rdap_domain_url("https://registry.example/rdap", "a.ch").unwrap();
        assert_eq!(url.as_str(), "https://registry.example/rdap/domain/a.ch");
    }

    #[test]
    fn test_rdap_domain_url_encodes_segment() {
        // IDN labels end up percent-encoded rather than mangling the path
        let url = rdap_domain_url("https://rdap.nic.ch", "zürich.ch").unwrap();
        assert_eq!(url.as_str(), "https://rdap.nic.ch/domain/z%C3%BCrich.ch");
    }

    #[test]
    fn test_rdap_domain_url_invalid_base() {
        assert!(rdap_domain_url("not a url", "a.ch").is_none());
    }
}
