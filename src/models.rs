//! Core data model: probe results, scan snapshots, and the status history.
//!
//! Everything here is serde-backed and serializes to the camelCase JSON
//! documents consumed by the dashboard (see `storage`).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter as EnumIterMacro;

/// Scheme a website probe succeeded (or last answered) on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// `https://` attempt
    Https,
    /// `http://` attempt
    Http,
}

impl Protocol {
    /// The URL scheme string, e.g. `"https"`.
    pub fn scheme(&self) -> &'static str {
        match self {
            Protocol::Https => "https",
            Protocol::Http => "http",
        }
    }
}

/// Outcome of probing a single website URL.
///
/// Invariant: when `present` is true, `protocol`, `status`, and `url_tried`
/// are all set and `status` is in `[200, 400)`. When false, `error` or an
/// unwanted `status` explains why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteProbe {
    /// Whether a reachable website was found.
    pub present: bool,
    /// Scheme of the reported attempt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Protocol>,
    /// Final HTTP status code of the reported attempt, if a server answered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// The URL the reported attempt was made against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_tried: Option<String>,
    /// Failure description when no server answered (`"timeout"`, connect
    /// errors, or `"not reachable"` when neither scheme produced a status).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WebsiteProbe {
    /// The default result for domains whose website was never probed
    /// (unregistered domains).
    pub fn absent() -> Self {
        WebsiteProbe {
            present: false,
            protocol: None,
            status: None,
            url_tried: None,
            error: None,
        }
    }
}

impl Default for WebsiteProbe {
    fn default() -> Self {
        Self::absent()
    }
}

/// One domain's state as observed by a single scan run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainRecord {
    /// Bare domain name, e.g. `pff27.ch`.
    pub domain: String,
    /// Top-level domain, derived from `domain` (after the last dot,
    /// lower-cased).
    pub tld: String,
    /// Whether the registry reported the domain as registered.
    pub registered: bool,
    /// Website probe result; `WebsiteProbe::absent()` when unregistered.
    pub website: WebsiteProbe,
    /// When this domain was probed.
    pub checked_at: DateTime<Utc>,
}

impl DomainRecord {
    /// Derives the three-value status classification for this record.
    pub fn status(&self) -> Status {
        Status::derive(self.registered, self.website.present)
    }
}

/// Full result of one scan run, in configured domain order.
///
/// Ephemeral: each run's snapshot fully replaces the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanSnapshot {
    /// When the scan run started.
    pub scanned_at: DateTime<Utc>,
    /// One record per configured domain, input order preserved.
    pub domains: Vec<DomainRecord>,
}

/// Derived per-domain classification, ordered from least to most "taken":
/// `available < registered < website`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIterMacro,
)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Not registered.
    Available,
    /// Registered, no reachable website.
    Registered,
    /// Registered with a reachable website.
    Website,
}

impl Status {
    /// Maps the two probe booleans onto the classification. The website flag
    /// only counts for registered domains; unregistered domains are never
    /// probed for a website in the first place.
    pub fn derive(registered: bool, website_present: bool) -> Status {
        if !registered {
            Status::Available
        } else if website_present {
            Status::Website
        } else {
            Status::Registered
        }
    }

    /// Lowercase name as it appears in persisted documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Available => "available",
            Status::Registered => "registered",
            Status::Website => "website",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded status transition for one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEvent {
    /// When the transition was observed.
    pub date: DateTime<Utc>,
    /// The domain that changed.
    pub domain: String,
    /// Status after the change.
    pub status: Status,
    /// Status before the change; `None` for a domain seen for the first time.
    pub previous_status: Option<Status>,
}

/// Last known status per domain, as stored in the history document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastState {
    /// Most recently derived status.
    pub status: Status,
}

/// The durable change history: chronological events (pruned to the trailing
/// 365 days) plus the last known status of every domain ever seen.
///
/// A BTreeMap keeps `lastState` sorted so the persisted document is
/// deterministic across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryLog {
    /// Status transitions, oldest first.
    pub events: Vec<HistoryEvent>,
    /// Domain -> last derived status.
    pub last_state: BTreeMap<String, LastState>,
}

/// Derives the TLD from a bare domain name: the substring after the last
/// dot, lower-cased. A dotless name yields itself.
pub fn tld_of(domain: &str) -> String {
    domain.rsplit('.').next().unwrap_or(domain).to_lowercase()
}
