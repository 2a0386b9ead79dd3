// =============================================================================
// Sentiment Aggregation
// =============================================================================
//
// Combines zero or more per-source polarity readings into one bounded scalar.
// Sources that failed or had nothing scorable arrive as the explicit
// `Unavailable` marker; the aggregate of nothing is neutral 0.0 by policy,
// never a missing value.

pub mod headlines;
pub mod lexicon;
pub mod source;

use serde::{Deserialize, Serialize};

pub use source::{gather_readings, SentimentSource};

/// A scored polarity reading from one source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReading {
    pub source_id: String,
    /// Polarity in [-1, 1]: -1 fully negative, +1 fully positive.
    pub polarity: f64,
}

/// The outcome of querying one source: a scored reading, or the explicit
/// marker that the source failed to respond / yielded no scorable text.
///
/// `Unavailable` distinguishes "queried but failed" from "never queried" —
/// a source that was never registered simply has no entry at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SourceReading {
    Scored(SentimentReading),
    Unavailable { source_id: String },
}

impl SourceReading {
    pub fn source_id(&self) -> &str {
        match self {
            Self::Scored(reading) => &reading.source_id,
            Self::Unavailable { source_id } => source_id,
        }
    }
}

/// Fuse per-source readings into a single aggregate polarity.
///
/// Unavailable entries are filtered out; the remainder contributes an
/// unweighted arithmetic mean, one vote per source regardless of how much
/// text the source scored.  An empty remainder (no sources queried, or all
/// of them failed) yields exactly 0.0 — the documented neutral fallback.
///
/// Inputs are pre-scored into [-1, 1], so no clamping happens here.
pub fn aggregate(readings: &[SourceReading]) -> f64 {
    let polarities: Vec<f64> = readings
        .iter()
        .filter_map(|r| match r {
            SourceReading::Scored(reading) => Some(reading.polarity),
            SourceReading::Unavailable { .. } => None,
        })
        .collect();

    if polarities.is_empty() {
        return 0.0;
    }

    polarities.iter().sum::<f64>() / polarities.len() as f64
}
