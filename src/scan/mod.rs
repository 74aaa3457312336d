//! Scan orchestration: sequential traversal of the configured domain list.
//!
//! Domains are probed strictly one after another with a fixed pacing delay
//! in between. That bounds the outbound request rate without a limiter; the
//! registry and the probed hosts see at most one in-flight request from us
//! at any time. Parallelizing this would need an equivalent global
//! request-rate ceiling first.

use std::time::Duration;

use chrono::Utc;
use log::{debug, info};
use reqwest::Client;

use crate::classify::SiteClassifier;
use crate::config::{PACING_DELAY, WEBSITE_TIMEOUT};
use crate::models::{tld_of, DomainRecord, ScanSnapshot, WebsiteProbe};
use crate::probe::{probe_registration, probe_website};

/// Probes a list of domains and assembles a [`ScanSnapshot`].
pub struct Scanner {
    client: Client,
    rdap_base: String,
    pacing: Duration,
    classifier: Option<Box<dyn SiteClassifier>>,
}

impl Scanner {
    /// Creates a scanner with the default pacing and no classifier.
    pub fn new(client: Client, rdap_base: impl Into<String>) -> Self {
        Scanner {
            client,
            rdap_base: rdap_base.into(),
            pacing: PACING_DELAY,
            classifier: None,
        }
    }

    /// Overrides the inter-domain pacing delay.
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    /// Installs a placeholder classifier. Present websites whose page the
    /// classifier rejects are demoted to "no website".
    pub fn with_classifier(mut self, classifier: Box<dyn SiteClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Runs one scan over `domains`, in input order.
    ///
    /// Every domain yields exactly one record, even when both probes failed
    /// closed; probe failures never abort or skip a domain.
    pub async fn run(&self, domains: &[String]) -> ScanSnapshot {
        let scanned_at = Utc::now();
        let mut records = Vec::with_capacity(domains.len());

        for (i, domain) in domains.iter().enumerate() {
            if i > 0 && !self.pacing.is_zero() {
                tokio::time::sleep(self.pacing).await;
            }

            let registered = probe_registration(&self.client, &self.rdap_base, domain).await;

            let mut website = if registered {
                probe_website(&self.client, domain).await
            } else {
                WebsiteProbe::absent()
            };

            if website.present {
                if let Some(classifier) = &self.classifier {
                    website = self.apply_classifier(classifier.as_ref(), website).await;
                }
            }

            debug!(
                "{domain}: registered={registered}, website={}",
                website.present
            );

            records.push(DomainRecord {
                domain: domain.clone(),
                tld: tld_of(domain),
                registered,
                website,
                checked_at: Utc::now(),
            });
        }

        let websites = records.iter().filter(|r| r.website.present).count();
        let registered = records.iter().filter(|r| r.registered).count();
        info!(
            "Scanned {} domains: {} registered, {} with website",
            records.len(),
            registered,
            websites
        );

        ScanSnapshot {
            scanned_at,
            domains: records,
        }
    }

    /// Fetches the page behind a present probe and asks the classifier
    /// whether it is a real site. Demotes placeholders; leaves the probe
    /// untouched when the page cannot be fetched.
    async fn apply_classifier(
        &self,
        classifier: &dyn SiteClassifier,
        probe: WebsiteProbe,
    ) -> WebsiteProbe {
        let Some(url) = probe.url_tried.as_deref() else {
            return probe;
        };

        let body = match self
            .client
            .get(url)
            .timeout(WEBSITE_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => response.text().await.unwrap_or_default(),
            Err(e) => {
                debug!("Could not fetch {url} for classification: {e}");
                return probe;
            }
        };

        if classifier.classify(&body) {
            probe
        } else {
            debug!("{url} classified as placeholder page");
            WebsiteProbe {
                present: false,
                error: Some("placeholder".to_string()),
                ..probe
            }
        }
    }
}
