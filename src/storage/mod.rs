//! Durable read/write of the snapshot and history JSON documents.
//!
//! Reads never fail: a missing, unreadable, or malformed document recovers
//! to an empty default with a warning, so the dashboard-facing read path
//! always sees a valid (possibly empty) document. Writes are whole-document
//! and fatal on failure; each document is written to a sibling temp file
//! and renamed over the target so a crashed run never leaves a torn file.

use std::path::Path;

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;

use crate::error_handling::StoreError;
use crate::models::{HistoryLog, ScanSnapshot};

async fn read_document<T: DeserializeOwned>(path: &Path, what: &str) -> Option<T> {
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            warn!("Could not read {} at {}: {e}", what, path.display());
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(
                "Malformed {} at {}, starting from empty: {e}",
                what,
                path.display()
            );
            None
        }
    }
}

async fn write_document<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(value)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await.map_err(|source| StoreError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json).await.map_err(|source| StoreError::Write {
        path: tmp.clone(),
        source,
    })?;
    fs::rename(&tmp, path).await.map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}

/// Reads the history document, recovering to an empty log when the file is
/// missing or malformed.
pub async fn read_history(path: &Path) -> HistoryLog {
    read_document(path, "history").await.unwrap_or_default()
}

/// Reads the latest snapshot. `None` means "no scan recorded yet" (also the
/// recovery value for a malformed file); it is not an error.
pub async fn read_snapshot(path: &Path) -> Option<ScanSnapshot> {
    read_document(path, "snapshot").await
}

/// Persists the history document. Write failures are fatal to the run.
pub async fn write_history(path: &Path, log: &HistoryLog) -> Result<(), StoreError> {
    write_document(path, log).await
}

/// Persists the snapshot, fully replacing the previous one.
pub async fn write_snapshot(path: &Path, snapshot: &ScanSnapshot) -> Result<(), StoreError> {
    write_document(path, snapshot).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DomainRecord, Status, WebsiteProbe};
    use chrono::Utc;
    use tempfile::TempDir;

    fn sample_snapshot() -> ScanSnapshot {
        ScanSnapshot {
            scanned_at: Utc::now(),
            domains: vec![DomainRecord {
                domain: "a.ch".to_string(),
                tld: "ch".to_string(),
                registered: false,
                website: WebsiteProbe::absent(),
                checked_at: Utc::now(),
            }],
        }
    }

    #[tokio::test]
    async fn test_snapshot_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snapshot.json");
        let snapshot = sample_snapshot();

        write_snapshot(&path, &snapshot).await.unwrap();
        let loaded = read_snapshot(&path).await.unwrap();

        assert_eq!(loaded, snapshot);
    }

    #[tokio::test]
    async fn test_missing_history_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let log = read_history(&dir.path().join("nope.json")).await;
        assert_eq!(log, HistoryLog::default());
    }

    #[tokio::test]
    async fn test_malformed_history_recovers_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        tokio::fs::write(&path, "{not json at all").await.unwrap();

        let log = read_history(&path).await;
        assert_eq!(log, HistoryLog::default());
    }

    #[tokio::test]
    async fn test_missing_snapshot_is_none_not_error() {
        let dir = TempDir::new().unwrap();
        assert!(read_snapshot(&dir.path().join("missing.json")).await.is_none());
    }

    #[tokio::test]
    async fn test_write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/deeper/history.json");

        let mut log = HistoryLog::default();
        log.last_state.insert(
            "a.ch".to_string(),
            crate::models::LastState {
                status: Status::Available,
            },
        );
        write_history(&path, &log).await.unwrap();

        assert_eq!(read_history(&path).await, log);
    }

    #[tokio::test]
    async fn test_write_to_unwritable_path_errors() {
        // A path whose parent is a regular file cannot be created
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        tokio::fs::write(&blocker, "file").await.unwrap();

        let result = write_snapshot(&blocker.join("snapshot.json"), &sample_snapshot()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snapshot.json");
        write_snapshot(&path, &sample_snapshot()).await.unwrap();

        assert!(!path.with_extension("tmp").exists());
    }

    #[tokio::test]
    async fn test_persisted_snapshot_uses_camel_case() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snapshot.json");
        write_snapshot(&path, &sample_snapshot()).await.unwrap();

        let raw = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(raw.contains("\"scannedAt\""));
        assert!(raw.contains("\"checkedAt\""));
        assert!(!raw.contains("\"scanned_at\""));
    }
}
