// =============================================================================
// Runtime Configuration — engine settings with atomic save
// =============================================================================
//
// Every tunable parameter of a run lives here.  Persistence uses an atomic
// tmp + rename pattern to prevent corruption on crash, and all fields carry
// `#[serde(default)]` so that adding new fields never breaks loading an
// older config file.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_symbols() -> Vec<String> {
    vec![
        "AAPL".to_string(),
        "MSFT".to_string(),
        "GOOGL".to_string(),
        "AMZN".to_string(),
        "TSLA".to_string(),
    ]
}

fn default_lookback_days() -> u64 {
    540
}

fn default_min_history() -> usize {
    200
}

fn default_price_dir() -> String {
    "data/prices".to_string()
}

fn default_headline_dir() -> String {
    "data/headlines".to_string()
}

fn default_report_days() -> usize {
    10
}

/// Which price backend the pipeline is wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceProviderKind {
    /// Stooq's public end-of-day CSV endpoint.
    Stooq,
    /// Local `{price_dir}/{SYMBOL}.csv` files.
    CsvDir,
}

impl Default for PriceProviderKind {
    fn default() -> Self {
        Self::Stooq
    }
}

impl std::fmt::Display for PriceProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stooq => write!(f, "stooq"),
            Self::CsvDir => write!(f, "csv_dir"),
        }
    }
}

// =============================================================================
// RuntimeConfig
// =============================================================================

/// Top-level runtime configuration for a signal run.
///
/// Every field has a serde default so that older JSON files missing new
/// fields will still deserialise correctly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Symbols to evaluate, each as an independent pipeline.
    #[serde(default = "default_symbols")]
    pub symbols: Vec<String>,

    /// Calendar days of price history to request per symbol.
    #[serde(default = "default_lookback_days")]
    pub lookback_days: u64,

    /// Trading days required before any non-HOLD signal; matches the
    /// SMA(200) warm-up by default.
    #[serde(default = "default_min_history")]
    pub min_history: usize,

    /// Price backend selection.
    #[serde(default)]
    pub price_provider: PriceProviderKind,

    /// Directory of `{SYMBOL}.csv` files for the `csv_dir` provider.
    #[serde(default = "default_price_dir")]
    pub price_dir: String,

    /// Directory of `{SYMBOL}.txt` headline files for the news source.
    #[serde(default = "default_headline_dir")]
    pub headline_dir: String,

    /// Optional fixed polarity registered as an extra sentiment source
    /// (manual market-mood override).
    #[serde(default)]
    pub static_sentiment: Option<f64>,

    /// Trailing rows to include in the rendered per-symbol table.
    #[serde(default = "default_report_days")]
    pub report_days: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            symbols: default_symbols(),
            lookback_days: default_lookback_days(),
            min_history: default_min_history(),
            price_provider: PriceProviderKind::default(),
            price_dir: default_price_dir(),
            headline_dir: default_headline_dir(),
            static_sentiment: None,
            report_days: default_report_days(),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from a JSON file at `path`.
    ///
    /// If the file does not exist, returns an error so the caller can fall
    /// back to defaults with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read runtime config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse runtime config from {}", path.display()))?;

        info!(
            path = %path.display(),
            symbols = ?config.symbols,
            provider = %config.price_provider,
            "runtime config loaded"
        );

        Ok(config)
    }

    /// Persist the current configuration to `path` using an atomic write
    /// (write to `.tmp`, then rename).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content = serde_json::to_string_pretty(self)
            .context("failed to serialise runtime config to JSON")?;

        let tmp_path = path.with_extension("json.tmp");

        std::fs::write(&tmp_path, &content)
            .with_context(|| format!("failed to write tmp config to {}", tmp_path.display()))?;

        std::fs::rename(&tmp_path, path)
            .with_context(|| format!("failed to rename tmp config to {}", path.display()))?;

        info!(path = %path.display(), "runtime config saved (atomic)");
        Ok(())
    }
}
