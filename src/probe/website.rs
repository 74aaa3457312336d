//! Website reachability probing with scheme fallback.
//!
//! A website probe tries `https://<domain>/` first, then `http://<domain>/`.
//! Each attempt is a HEAD request; servers that reject the method (403/405)
//! get one GET escalation against the same URL. A final status in
//! `[200, 400)` counts as present.
//!
//! When neither scheme is present, the https attempt is preferred for
//! reporting whenever it carries a status code: a server that answered with
//! an unwanted code is more informative than a dead connection. This
//! asymmetry is load-bearing for recorded history and must not be
//! "simplified" away.

use log::debug;
use reqwest::{Client, Method};

use crate::config::WEBSITE_TIMEOUT;
use crate::models::{Protocol, WebsiteProbe};

/// Builds the probe URL for a scheme/domain pair.
fn probe_url(protocol: Protocol, domain: &str) -> String {
    format!("{}://{}/", protocol.scheme(), domain)
}

/// Presence means the final status is 2xx or 3xx.
fn is_present_status(status: u16) -> bool {
    (200..400).contains(&status)
}

async fn send_status(client: &Client, method: Method, url: &str) -> Result<u16, reqwest::Error> {
    let response = client
        .request(method, url)
        .timeout(WEBSITE_TIMEOUT)
        .send()
        .await?;
    Ok(response.status().as_u16())
}

/// One scheme attempt: HEAD, with a single GET escalation when the server
/// rejects the method.
pub(crate) async fn attempt(client: &Client, protocol: Protocol, url: &str) -> WebsiteProbe {
    let head = send_status(client, Method::HEAD, url).await;

    let outcome = match head {
        // Method rejected; some hosts only answer real page loads
        Ok(status) if status == 403 || status == 405 => {
            debug!("HEAD {url} -> {status}, escalating to GET");
            send_status(client, Method::GET, url).await
        }
        other => other,
    };

    match outcome {
        Ok(status) => WebsiteProbe {
            present: is_present_status(status),
            protocol: Some(protocol),
            status: Some(status),
            url_tried: Some(url.to_string()),
            error: None,
        },
        Err(e) => {
            let error = if e.is_timeout() {
                "timeout".to_string()
            } else {
                e.to_string()
            };
            debug!("{url} not reachable: {error}");
            WebsiteProbe {
                present: false,
                protocol: Some(protocol),
                status: None,
                url_tried: Some(url.to_string()),
                error: Some(error),
            }
        }
    }
}

/// Picks the result to report when neither scheme was present: the https
/// attempt if it reached a server, else the http attempt if it did, else a
/// generic unreachable result.
fn prefer_fallback(https: WebsiteProbe, http: WebsiteProbe) -> WebsiteProbe {
    if https.status.is_some() {
        https
    } else if http.status.is_some() {
        http
    } else {
        WebsiteProbe {
            present: false,
            error: Some("not reachable".to_string()),
            ..WebsiteProbe::absent()
        }
    }
}

/// Probes `domain` for a reachable website.
///
/// Never errors; every failure mode resolves into a `WebsiteProbe` with
/// `present == false` and a diagnostic `status` or `error`. Only called for
/// registered domains.
pub async fn probe_website(client: &Client, domain: &str) -> WebsiteProbe {
    let https = attempt(client, Protocol::Https, &probe_url(Protocol::Https, domain)).await;
    if https.present {
        return https;
    }

    let http = attempt(client, Protocol::Http, &probe_url(Protocol::Http, domain)).await;
    if http.present {
        return http;
    }

    prefer_fallback(https, http)
}
