// =============================================================================
// CSV file price provider
// =============================================================================
//
// Serves daily bars from `{dir}/{SYMBOL}.csv` in the standard
// `Date,Open,High,Low,Close,Volume` layout.  Used for offline runs and
// fixtures; the same files a `StooqProvider` run would have fetched.

use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::warn;

use super::{parse_daily_csv, PriceProvider};
use crate::types::PriceBar;

pub struct CsvFileProvider {
    dir: PathBuf,
}

impl CsvFileProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl PriceProvider for CsvFileProvider {
    async fn daily_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PriceBar>> {
        let path = self.dir.join(format!("{}.csv", symbol.to_uppercase()));

        if !path.exists() {
            // Unknown symbol: explicit no-data, not an I/O failure.
            warn!(symbol, path = %path.display(), "no price file for symbol");
            return Ok(Vec::new());
        }

        let content = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("failed to read price file {}", path.display()))?;

        let bars = parse_daily_csv(&content)
            .with_context(|| format!("failed to parse price file {}", path.display()))?;

        Ok(bars
            .into_iter()
            .filter(|b| b.date >= start && b.date <= end)
            .collect())
    }
}

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn write_prices(dir: &std::path::Path, symbol: &str) {
        std::fs::write(
            dir.join(format!("{symbol}.csv")),
            "Date,Open,High,Low,Close,Volume\n\
             2024-01-02,10.0,10.5,9.8,10.2,1000\n\
             2024-01-03,10.2,10.8,10.1,10.6,1200\n\
             2024-01-04,10.6,10.7,10.0,10.1,900\n",
        )
        .unwrap();
    }

    #[tokio::test]
    async fn reads_bars_within_range() {
        let tmp = tempfile::tempdir().unwrap();
        write_prices(tmp.path(), "AAPL");

        let provider = CsvFileProvider::new(tmp.path());
        let bars = provider
            .daily_history("AAPL", date(2024, 1, 1), date(2024, 1, 31))
            .await
            .unwrap();

        assert_eq!(bars.len(), 3);
        assert_eq!(bars[0].date, date(2024, 1, 2));
        assert_eq!(bars[2].close, 10.1);
    }

    #[tokio::test]
    async fn range_filter_is_inclusive() {
        let tmp = tempfile::tempdir().unwrap();
        write_prices(tmp.path(), "AAPL");

        let provider = CsvFileProvider::new(tmp.path());
        let bars = provider
            .daily_history("AAPL", date(2024, 1, 3), date(2024, 1, 3))
            .await
            .unwrap();

        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].date, date(2024, 1, 3));
    }

    #[tokio::test]
    async fn unknown_symbol_is_empty_not_error() {
        let tmp = tempfile::tempdir().unwrap();
        let provider = CsvFileProvider::new(tmp.path());
        let bars = provider
            .daily_history("ZZZZ", date(2024, 1, 1), date(2024, 1, 31))
            .await
            .unwrap();
        assert!(bars.is_empty());
    }

    #[tokio::test]
    async fn lowercase_symbol_finds_uppercase_file() {
        let tmp = tempfile::tempdir().unwrap();
        write_prices(tmp.path(), "MSFT");

        let provider = CsvFileProvider::new(tmp.path());
        let bars = provider
            .daily_history("msft", date(2024, 1, 1), date(2024, 1, 31))
            .await
            .unwrap();
        assert_eq!(bars.len(), 3);
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join("BAD.csv"),
            "Date,Open,High,Low,Close,Volume\n2024-01-02,not-a-number,1,1,1,1\n",
        )
        .unwrap();

        let provider = CsvFileProvider::new(tmp.path());
        assert!(provider
            .daily_history("BAD", date(2024, 1, 1), date(2024, 1, 31))
            .await
            .is_err());
    }
}
