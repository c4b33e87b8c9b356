//! HTTP status checks.

use anyhow::Context;
use indexmap::IndexMap;
use kit_core::error::{KitError, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, ACCEPT, ACCEPT_LANGUAGE, UPGRADE_INSECURE_REQUESTS};
use reqwest::redirect::Policy;
use serde::Serialize;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use url::Url;

pub const SUCCESS_INDICATOR: &str = "✓";
pub const WARNING_INDICATOR: &str = "⚠";
pub const ERROR_INDICATOR: &str = "✗";

const ACCEPT_VALUE: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const ACCEPT_LANGUAGE_VALUE: &str = "en-US,en;q=0.5";

const UNKNOWN: &str = "Unknown";

const SECURITY_HEADERS: [&str; 6] = [
    "X-Frame-Options",
    "X-Content-Type-Options",
    "X-XSS-Protection",
    "Strict-Transport-Security",
    "Content-Security-Policy",
    "Referrer-Policy",
];

/// Trim and prefix `https://` when no scheme is given.
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// True for an http or https URL with a host.
pub fn validate_url(candidate: &str) -> bool {
    match Url::parse(candidate.trim()) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    Informational,
    Success,
    Redirection,
    ClientError,
    ServerError,
    Unknown,
}

impl StatusCategory {
    pub fn from_code(code: u16) -> Self {
        match code {
            100..=199 => StatusCategory::Informational,
            200..=299 => StatusCategory::Success,
            300..=399 => StatusCategory::Redirection,
            400..=499 => StatusCategory::ClientError,
            500..=599 => StatusCategory::ServerError,
            _ => StatusCategory::Unknown,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            StatusCategory::Informational => "Informational response",
            StatusCategory::Success => "Request successful",
            StatusCategory::Redirection => "Redirection required",
            StatusCategory::ClientError => "Client error occurred",
            StatusCategory::ServerError => "Server error occurred",
            StatusCategory::Unknown => "Unknown status code",
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            StatusCategory::Success => SUCCESS_INDICATOR,
            StatusCategory::Informational | StatusCategory::Redirection => WARNING_INDICATOR,
            StatusCategory::ClientError | StatusCategory::ServerError | StatusCategory::Unknown => {
                ERROR_INDICATOR
            }
        }
    }

    /// Human label, e.g. `Client Error`.
    pub fn label(self) -> &'static str {
        match self {
            StatusCategory::Informational => "Informational",
            StatusCategory::Success => "Success",
            StatusCategory::Redirection => "Redirection",
            StatusCategory::ClientError => "Client Error",
            StatusCategory::ServerError => "Server Error",
            StatusCategory::Unknown => "Unknown",
        }
    }
}

fn header_or_unknown(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(UNKNOWN)
        .to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerInfo {
    pub server: String,
    pub content_type: String,
    pub content_length: String,
    pub last_modified: String,
    pub cache_control: String,
    pub connection: String,
    pub encoding: String,
}

impl ServerInfo {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            server: header_or_unknown(headers, "server"),
            content_type: header_or_unknown(headers, "content-type"),
            content_length: header_or_unknown(headers, "content-length"),
            last_modified: header_or_unknown(headers, "last-modified"),
            cache_control: header_or_unknown(headers, "cache-control"),
            connection: header_or_unknown(headers, "connection"),
            encoding: header_or_unknown(headers, "content-encoding"),
        }
    }

    /// `(label, value)` pairs in display order.
    pub fn rows(&self) -> [(&'static str, &str); 7] {
        [
            ("Server", self.server.as_str()),
            ("Content Type", self.content_type.as_str()),
            ("Content Length", self.content_length.as_str()),
            ("Last Modified", self.last_modified.as_str()),
            ("Cache Control", self.cache_control.as_str()),
            ("Connection", self.connection.as_str()),
            ("Encoding", self.encoding.as_str()),
        ]
    }
}

/// Which of the common security headers a response carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecurityReport {
    pub headers: IndexMap<String, bool>,
}

impl SecurityReport {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let headers = SECURITY_HEADERS
            .iter()
            .map(|name| (name.to_string(), headers.contains_key(*name)))
            .collect();
        Self { headers }
    }

    pub fn present(&self) -> usize {
        self.headers.values().filter(|p| **p).count()
    }

    pub fn total(&self) -> usize {
        self.headers.len()
    }
}

/// Everything learned from one successful request.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub url: String,
    pub status_code: u16,
    pub category: StatusCategory,
    /// Seconds until the response headers arrived
    pub response_time: f64,
    pub server_info: ServerInfo,
    pub security_headers: SecurityReport,
    pub headers: IndexMap<String, String>,
    pub success: bool,
}

impl StatusReport {
    pub fn from_response(url: String, status_code: u16, elapsed: Duration, headers: &HeaderMap) -> Self {
        let raw = headers
            .iter()
            .map(|(k, v)| {
                (
                    k.as_str().to_string(),
                    String::from_utf8_lossy(v.as_bytes()).into_owned(),
                )
            })
            .collect();
        Self {
            url,
            status_code,
            category: StatusCategory::from_code(status_code),
            response_time: elapsed.as_secs_f64(),
            server_info: ServerInfo::from_headers(headers),
            security_headers: SecurityReport::from_headers(headers),
            headers: raw,
            success: (200..300).contains(&status_code),
        }
    }
}

/// Per-URL outcomes of a batch, in input order.
#[derive(Debug, Serialize)]
pub struct BatchReport {
    pub results: Vec<(String, std::result::Result<StatusReport, String>)>,
}

impl BatchReport {
    pub fn successful(&self) -> usize {
        self.results.iter().filter(|(_, r)| r.is_ok()).count()
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }
}

pub struct StatusChecker {
    client: Client,
    timeout: Duration,
}

impl StatusChecker {
    pub fn new(timeout: Duration, user_agent: &str, max_redirects: usize) -> Result<Self> {
        let mut defaults = HeaderMap::new();
        defaults.insert(ACCEPT, ACCEPT_VALUE.parse().context("Invalid Accept header")?);
        defaults.insert(
            ACCEPT_LANGUAGE,
            ACCEPT_LANGUAGE_VALUE
                .parse()
                .context("Invalid Accept-Language header")?,
        );
        defaults.insert(
            UPGRADE_INSECURE_REQUESTS,
            "1".parse().context("Invalid Upgrade-Insecure-Requests header")?,
        );

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .redirect(Policy::limited(max_redirects))
            .default_headers(defaults)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client, timeout })
    }

    /// Normalise, validate and GET `url`.
    pub fn check(&self, url: &str) -> Result<StatusReport> {
        let url = normalize_url(url);
        if !validate_url(&url) {
            return Err(KitError::Validation(format!("Invalid URL format: {url}")));
        }

        info!(url = %url, "Checking website status");
        let started = Instant::now();
        let response = self.client.get(&url).send().map_err(|e| {
            warn!(url = %url, error = %e, "Status request failed");
            if e.is_timeout() {
                KitError::Network(format!(
                    "Request timeout after {} seconds",
                    self.timeout.as_secs()
                ))
            } else if e.is_connect() {
                KitError::Network("Connection error - Unable to reach server".to_string())
            } else if e.is_redirect() {
                KitError::Network(format!("Too many redirects: {e}"))
            } else {
                KitError::Network(format!("Request exception: {e}"))
            }
        })?;
        let elapsed = started.elapsed();

        let status = response.status().as_u16();
        debug!(url = %url, status, elapsed_ms = elapsed.as_millis() as u64, "Response received");
        Ok(StatusReport::from_response(
            url,
            status,
            elapsed,
            response.headers(),
        ))
    }

    /// Check each URL in turn, pausing `delay` between requests.
    pub fn check_many<S: AsRef<str>>(&self, urls: &[S], delay: Duration) -> BatchReport {
        self.check_many_with(urls, delay, |_, _, _| {})
    }

    /// Like [`check_many`](Self::check_many), reporting each result as it lands.
    pub fn check_many_with<S, F>(&self, urls: &[S], delay: Duration, mut on_result: F) -> BatchReport
    where
        S: AsRef<str>,
        F: FnMut(usize, &str, &std::result::Result<StatusReport, String>),
    {
        let mut results = Vec::with_capacity(urls.len());
        for (index, url) in urls.iter().enumerate() {
            let url = url.as_ref();
            let outcome = self.check(url).map_err(|e| e.to_string());
            on_result(index + 1, url, &outcome);
            results.push((url.to_string(), outcome));
            if index + 1 < urls.len() && !delay.is_zero() {
                thread::sleep(delay);
            }
        }
        BatchReport { results }
    }
}
