//! History reconciliation: deriving a durable change log from scan runs.
//!
//! Reconciliation is pure: it takes the fresh snapshot, the prior history,
//! and the current time, and produces the updated history plus the number
//! of events it appended. Probe content can never make it fail; recovering
//! from a corrupt prior history is the caller's job (substitute an empty
//! log, see `storage`).

use chrono::{DateTime, Duration, Utc};
use log::debug;

use crate::config::HISTORY_RETENTION_DAYS;
use crate::models::{HistoryEvent, HistoryLog, LastState, ScanSnapshot};

/// Folds one snapshot into the history.
///
/// For each record, in snapshot order: derive the status, emit an event when
/// it differs from the last recorded status (a never-seen domain counts as
/// changed, with `previous_status == None`), and update `last_state`
/// unconditionally. Afterwards, prune events older than the retention
/// window relative to `now`, preserving the order of survivors.
///
/// `last_state` keeps one entry per domain ever seen; domains that drop out
/// of the configured list stay in it.
pub fn reconcile(
    snapshot: &ScanSnapshot,
    prior: HistoryLog,
    now: DateTime<Utc>,
) -> (HistoryLog, usize) {
    let mut log = prior;
    let mut new_events = 0usize;

    for record in &snapshot.domains {
        let status = record.status();
        let previous = log.last_state.get(&record.domain).map(|s| s.status);

        if previous != Some(status) {
            debug!(
                "{}: {} -> {status}",
                record.domain,
                previous.map_or("(new)", |p| p.as_str())
            );
            log.events.push(HistoryEvent {
                date: now,
                domain: record.domain.clone(),
                status,
                previous_status: previous,
            });
            new_events += 1;
        }

        log.last_state
            .insert(record.domain.clone(), LastState { status });
    }

    let cutoff = now - Duration::days(HISTORY_RETENTION_DAYS);
    let before = log.events.len();
    log.events.retain(|event| event.date >= cutoff);
    if log.events.len() < before {
        debug!("Pruned {} expired history events", before - log.events.len());
    }

    (log, new_events)
}
