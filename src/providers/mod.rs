// =============================================================================
// Price data providers
// =============================================================================
//
// One trait in front of every market-data backend.  A provider that has no
// data for a symbol returns an empty series — the pipeline turns that into
// the fatal-for-this-symbol `InvalidInput`, so the core never sees partial
// or absent data as anything else.

pub mod csv_file;
pub mod stooq;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::types::PriceBar;

pub use csv_file::CsvFileProvider;
pub use stooq::StooqProvider;

/// A source of daily price history for a symbol.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Daily bars for `symbol` within `[start, end]`, oldest first.
    ///
    /// An unknown symbol is not an error: it is an empty result.
    async fn daily_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PriceBar>>;
}

/// One row of the `Date,Open,High,Low,Close,Volume` daily format shared by
/// the CSV-file and Stooq adapters.
#[derive(Debug, Deserialize)]
struct DailyRecord {
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "Open")]
    open: f64,
    #[serde(rename = "High")]
    high: f64,
    #[serde(rename = "Low")]
    low: f64,
    #[serde(rename = "Close")]
    close: f64,
    // Volume is absent for some instruments (indices) and sometimes blank.
    #[serde(rename = "Volume", default)]
    volume: Option<f64>,
}

/// Parse a headered daily CSV body into bars, preserving row order.
pub(crate) fn parse_daily_csv(data: &str) -> Result<Vec<PriceBar>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(data.as_bytes());

    let mut bars = Vec::new();
    for record in reader.deserialize::<DailyRecord>() {
        let row = record.context("malformed daily CSV row")?;
        bars.push(PriceBar {
            date: row.date,
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
            volume: row.volume.unwrap_or(0.0),
        });
    }
    Ok(bars)
}
