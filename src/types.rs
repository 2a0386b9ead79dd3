// =============================================================================
// Shared types used across the Meridian signal engine
// =============================================================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single daily OHLCV bar for one symbol.
///
/// Bars are immutable once fetched; a series is always chronological with no
/// duplicate dates (validated at the indicator boundary).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: f64,
}

/// The per-day trading recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl Default for Signal {
    fn default() -> Self {
        Self::Hold
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
            Self::Hold => write!(f, "HOLD"),
        }
    }
}

/// One fully evaluated trading day: the bar's close, the indicator values
/// that were defined at that index, and the resulting signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySignal {
    pub date: NaiveDate,
    pub close: f64,
    pub sma_50: Option<f64>,
    pub sma_200: Option<f64>,
    pub rsi_14: Option<f64>,
    pub signal: Signal,
}
