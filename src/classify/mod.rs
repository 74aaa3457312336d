//! Placeholder-page classification.
//!
//! Telling a hosting-provider placeholder apart from a real website is the
//! job of an external text-classification service in production. The core
//! only depends on the single-method [`SiteClassifier`] trait, so scanning
//! and reconciliation are testable without a live service. The built-in
//! [`HeuristicClassifier`] covers offline operation with a marker-phrase
//! scan over the page title and meta description.

use std::sync::LazyLock;

use scraper::{Html, Selector};

static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("title").expect("Failed to parse title selector - this is a bug")
});

static META_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("meta[name='description']")
        .expect("Failed to parse meta description selector - this is a bug")
});

/// Phrases that mark a page as a registrar/hoster placeholder rather than a
/// real site. Matched case-insensitively against title and meta description.
const PLACEHOLDER_MARKERS: &[&str] = &[
    "domain is parked",
    "parked domain",
    "parked by",
    "domain for sale",
    "buy this domain",
    "this domain has been registered",
    "website coming soon",
    "under construction",
    "default web page",
    "account suspended",
];

/// Decides whether a fetched page is a real website.
///
/// `classify` returns `true` for a real site and `false` for a placeholder.
/// Implementations must not perform network I/O; the page body is handed in.
pub trait SiteClassifier: Send + Sync {
    /// Classifies the page body. `true` means real site.
    fn classify(&self, html: &str) -> bool;
}

/// Marker-phrase classifier over the parsed document.
///
/// Conservative on purpose: a page is only demoted to "placeholder" on
/// positive marker evidence, never for missing metadata.
#[derive(Debug, Default)]
pub struct HeuristicClassifier;

impl HeuristicClassifier {
    /// Creates the classifier. Stateless; one instance serves a whole run.
    pub fn new() -> Self {
        Self
    }
}

impl SiteClassifier for HeuristicClassifier {
    fn classify(&self, html: &str) -> bool {
        let document = Html::parse_document(html);

        let title = document
            .select(&TITLE_SELECTOR)
            .next()
            .map(|element| element.inner_html().trim().to_lowercase())
            .unwrap_or_default();

        let description = document
            .select(&META_DESCRIPTION_SELECTOR)
            .next()
            .and_then(|element| element.value().attr("content"))
            .map(|content| content.trim().to_lowercase())
            .unwrap_or_default();

        !PLACEHOLDER_MARKERS
            .iter()
            .any(|marker| title.contains(marker) || description.contains(marker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_page_is_real() {
        let html = "<html><head><title>Bäckerei Müller</title></head>\
                    <body><h1>Willkommen</h1></body></html>";
        assert!(HeuristicClassifier::new().classify(html));
    }

    #[test]
    fn test_parked_title_is_placeholder() {
        let html = "<html><head><title>This domain is parked</title></head><body></body></html>";
        assert!(!HeuristicClassifier::new().classify(html));
    }

    #[test]
    fn test_marker_in_meta_description() {
        let html = "<html><head><title>example.ch</title>\
                    <meta name='description' content='Buy this domain today!'></head></html>";
        assert!(!HeuristicClassifier::new().classify(html));
    }

    #[test]
    fn test_marker_matching_is_case_insensitive() {
        let html = "<html><head><title>PARKED BY EXAMPLE HOSTING</title></head></html>";
        assert!(!HeuristicClassifier::new().classify(html));
    }

    #[test]
    fn test_empty_page_counts_as_real() {
        // No marker evidence means no demotion
        assert!(HeuristicClassifier::new().classify(""));
    }
}
