// Shared test helpers for integration tests.
//
// Provides mock registry setup and Config construction used across test
// files to reduce duplication.

use std::io::Write;
use std::path::Path;

use tempfile::{NamedTempFile, TempDir};
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use domain_watch::{Config, LogFormat, LogLevel};

/// Writes a domain list file, one domain per line.
#[allow(dead_code)] // Used by other test files
pub fn write_domains_file(domains: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for domain in domains {
        writeln!(file, "{}", domain).expect("Failed to write domain");
    }
    file.flush().expect("Failed to flush file");
    file
}

/// Builds a Config pointing at the given domain list, RDAP mock, and a
/// scratch directory for the output documents.
#[allow(dead_code)] // Used by other test files
pub fn create_test_config(domains_file: &Path, out_dir: &TempDir, rdap_base: &str) -> Config {
    Config {
        domains_file: domains_file.to_path_buf(),
        snapshot_path: out_dir.path().join("snapshot.json"),
        history_path: out_dir.path().join("history.json"),
        rdap_base: rdap_base.to_string(),
        user_agent: "domain_watch_test/1.0".to_string(),
        classify: false,
        log_level: LogLevel::Error, // Reduce noise in tests
        log_format: LogFormat::Plain,
    }
}

/// Starts a mock registry that answers every `/domain/<name>` HEAD with the
/// given status.
#[allow(dead_code)] // Used by other test files
pub async fn start_registry(status: u16) -> MockServer {
    let server = MockServer::start().await;
    mount_registry_status(&server, status).await;
    server
}

/// (Re)mounts the registry response on an existing mock server.
#[allow(dead_code)] // Used by other test files
pub async fn mount_registry_status(server: &MockServer, status: u16) {
    Mock::given(method("HEAD"))
        .and(path_regex(r"^/domain/.*"))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Strips the scheme off a mock server URI so it can pose as a bare domain
/// (host:port) in a domain list.
#[allow(dead_code)] // Used by other test files
pub fn as_domain(server: &MockServer) -> String {
    server.uri().trim_start_matches("http://").to_string()
}
