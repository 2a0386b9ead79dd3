// =============================================================================
// Stooq daily price provider
// =============================================================================
//
// Fetches end-of-day history from Stooq's public CSV endpoint:
//
//   GET /q/d/l/?s={symbol}&d1={YYYYMMDD}&d2={YYYYMMDD}&i=d
//
// US equities are keyed with a `.us` suffix (`aapl.us`); symbols that
// already carry an exchange suffix are passed through unchanged.  Unknown
// symbols come back as a "No data" body, which maps to the empty series.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{debug, warn};

use super::{parse_daily_csv, PriceProvider};
use crate::types::PriceBar;

const BASE_URL: &str = "https://stooq.com";

pub struct StooqProvider {
    client: reqwest::Client,
    base_url: String,
    suffix: String,
}

impl StooqProvider {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("failed to build reqwest client");

        Self {
            client,
            base_url: BASE_URL.to_string(),
            suffix: ".us".to_string(),
        }
    }

    /// Override the exchange suffix appended to bare symbols (default `.us`).
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    fn stooq_symbol(&self, symbol: &str) -> String {
        let lower = symbol.to_lowercase();
        if lower.contains('.') {
            lower
        } else {
            format!("{lower}{}", self.suffix)
        }
    }
}

impl Default for StooqProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Stooq answers unknown symbols with a short plain-text body instead of a
/// CSV header.
fn is_no_data_body(body: &str) -> bool {
    !body.trim_start().starts_with("Date")
}

#[async_trait]
impl PriceProvider for StooqProvider {
    async fn daily_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PriceBar>> {
        let sym = self.stooq_symbol(symbol);
        let url = format!(
            "{}/q/d/l/?s={}&d1={}&d2={}&i=d",
            self.base_url,
            sym,
            start.format("%Y%m%d"),
            end.format("%Y%m%d"),
        );

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("stooq request failed for {sym}"))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .with_context(|| format!("failed to read stooq response for {sym}"))?;

        if !status.is_success() {
            anyhow::bail!("stooq returned {status} for {sym}: {body}");
        }

        if is_no_data_body(&body) {
            warn!(symbol, stooq_symbol = %sym, "stooq has no data for symbol");
            return Ok(Vec::new());
        }

        let bars = parse_daily_csv(&body)
            .with_context(|| format!("failed to parse stooq CSV for {sym}"))?;

        debug!(symbol, bars = bars.len(), "stooq daily history fetched");
        Ok(bars)
    }
}

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_symbol_gets_us_suffix() {
        let provider = StooqProvider::new();
        assert_eq!(provider.stooq_symbol("AAPL"), "aapl.us");
    }

    #[test]
    fn suffixed_symbol_passes_through() {
        let provider = StooqProvider::new();
        assert_eq!(provider.stooq_symbol("SAP.DE"), "sap.de");
    }

    #[test]
    fn suffix_override() {
        let provider = StooqProvider::new().with_suffix(".de");
        assert_eq!(provider.stooq_symbol("SAP"), "sap.de");
    }

    #[test]
    fn no_data_body_detection() {
        assert!(is_no_data_body("No data"));
        assert!(is_no_data_body(""));
        assert!(!is_no_data_body(
            "Date,Open,High,Low,Close,Volume\n2024-01-02,1,1,1,1,1\n"
        ));
    }
}
