//! Currency conversion against a table of rates relative to one pivot.
//!
//! Rates come from a live endpoint answering `{"data": {"EUR": 1.0, ...}}`
//! and are cached to a JSON file that serves as the offline fallback.

use anyhow::Context;
use indexmap::IndexMap;
use kit_core::error::{KitError, Result};
use kit_core::file_system;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Currency every rate table must contain.
pub const REQUIRED_CODE: &str = "eur";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    pub rate: f64,
}

/// Lowercase currency code to its rate against the pivot currency.
pub type RateTable = IndexMap<String, Rate>;

#[derive(Debug, Deserialize)]
struct ApiResponse {
    data: Option<IndexMap<String, f64>>,
    message: Option<String>,
}

fn check_required(rates: &RateTable, origin: &str) -> Result<()> {
    if rates.contains_key(REQUIRED_CODE) {
        Ok(())
    } else {
        Err(KitError::validation(format!(
            "{origin} is missing '{REQUIRED_CODE}' currency."
        )))
    }
}

/// Read a fallback rates file.
pub fn load_rates(path: &Path) -> Result<RateTable> {
    let rates: RateTable = match file_system::read_json(path) {
        Ok(rates) => rates,
        Err(KitError::NotFound(_)) => {
            return Err(KitError::NotFound(format!(
                "The file {} was not found.",
                path.display()
            )))
        }
        Err(e) => return Err(e),
    };
    debug!(count = rates.len(), path = %path.display(), "loaded rates from file");
    check_required(&rates, "Rates file")?;
    Ok(rates)
}

/// Write rates as pretty JSON for offline use.
pub fn save_rates(path: &Path, rates: &RateTable) -> Result<()> {
    file_system::write_json_atomic(path, rates)?;
    info!(path = %path.display(), "saved rates");
    Ok(())
}

/// Turn an API body into a rate table.
pub fn parse_api_response(body: &str) -> Result<RateTable> {
    let response: ApiResponse = serde_json::from_str(body)?;
    let data = response.data.ok_or_else(|| {
        KitError::Network(format!(
            "API request failed: {}",
            response
                .message
                .unwrap_or_else(|| "Invalid response".to_string())
        ))
    })?;
    let rates: RateTable = data
        .into_iter()
        .map(|(code, rate)| (code.to_lowercase(), Rate { rate }))
        .collect();
    check_required(&rates, "API response")?;
    Ok(rates)
}

/// Download the current rates.
pub fn fetch_rates(url: &str, timeout: Duration) -> Result<RateTable> {
    let client = Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client")?;
    let response = client
        .get(url)
        .send()
        .map_err(|e| KitError::Network(format!("Error fetching API data: {e}")))?;
    let status = response.status();
    let body = response
        .text()
        .map_err(|e| KitError::Network(format!("Error reading API response: {e}")))?;
    if !status.is_success() {
        return Err(KitError::Network(format!(
            "Error fetching API data: HTTP {status}"
        )));
    }
    parse_api_response(&body)
}

/// Where a resolved table came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateOrigin {
    Api,
    File,
}

#[derive(Debug, Clone)]
pub struct ResolvedRates {
    pub rates: RateTable,
    pub origin: RateOrigin,
    /// Why the API was not used, when it was configured but failed
    pub api_error: Option<String>,
}

/// Live endpoint plus the fallback file.
#[derive(Debug, Clone)]
pub struct RateSource {
    pub api_url: Option<String>,
    pub timeout: Duration,
    pub fallback: PathBuf,
}

impl RateSource {
    /// Try the API, then the fallback file.
    ///
    /// A successful API call refreshes the fallback file. A failure to
    /// write it is logged and does not fail the lookup.
    pub fn resolve(&self) -> Result<ResolvedRates> {
        let mut api_error = None;
        if let Some(url) = &self.api_url {
            match fetch_rates(url, self.timeout) {
                Ok(rates) => {
                    if let Err(e) = save_rates(&self.fallback, &rates) {
                        warn!(error = %e, "could not cache rates");
                    }
                    return Ok(ResolvedRates {
                        rates,
                        origin: RateOrigin::Api,
                        api_error: None,
                    });
                }
                Err(e) => {
                    warn!(error = %e, "rates API failed, falling back to file");
                    api_error = Some(e.to_string());
                }
            }
        }

        let rates = load_rates(&self.fallback)?;
        Ok(ResolvedRates {
            rates,
            origin: RateOrigin::File,
            api_error,
        })
    }
}

/// Look up a code case-insensitively.
pub fn lookup(rates: &RateTable, code: &str) -> Result<f64> {
    let key = code.trim().to_lowercase();
    rates
        .get(&key)
        .map(|r| r.rate)
        .ok_or_else(|| KitError::Validation(format!("Currency {key} not supported.")))
}

/// Parse a positive amount.
pub fn parse_amount(input: &str) -> Result<f64> {
    let amount: f64 = input
        .trim()
        .parse()
        .map_err(|_| KitError::validation("Amount must be a valid number."))?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(KitError::validation("Amount must be positive."));
    }
    Ok(amount)
}

/// Convert `amount` of `from` into `to`.
pub fn convert(amount: f64, from: &str, to: &str, rates: &RateTable) -> Result<f64> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(KitError::validation("Amount must be positive."));
    }
    let from_rate = lookup(rates, from)?;
    let to_rate = lookup(rates, to)?;
    Ok(amount / from_rate * to_rate)
}

/// Codes in alphabetical order, for listings and prompts.
pub fn sorted_codes(rates: &RateTable) -> Vec<String> {
    let mut codes: Vec<String> = rates.keys().cloned().collect();
    codes.sort();
    codes
}
