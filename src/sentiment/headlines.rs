// =============================================================================
// Sentiment source adapters
// =============================================================================
//
// Reference implementations of the `SentimentSource` capability.  A live
// deployment swaps in scrapers / stream clients behind the same trait; the
// aggregation side never knows the difference.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use tracing::debug;

use super::lexicon::score_text;
use super::{SentimentReading, SentimentSource};

// -----------------------------------------------------------------------------
// HeadlineFileSource
// -----------------------------------------------------------------------------

/// Scores newline-delimited headlines from `{dir}/{SYMBOL}.txt`.
///
/// Each non-empty line is scored independently and the source reports the
/// unweighted mean.  A missing file or a file with no scorable lines is an
/// error — upstream it becomes the `Unavailable` marker, not a zero reading.
pub struct HeadlineFileSource {
    id: String,
    dir: PathBuf,
}

impl HeadlineFileSource {
    pub fn new(id: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            dir: dir.into(),
        }
    }
}

#[async_trait]
impl SentimentSource for HeadlineFileSource {
    fn id(&self) -> &str {
        &self.id
    }

    async fn fetch(&self, symbol: &str) -> Result<SentimentReading> {
        let path = self.dir.join(format!("{}.txt", symbol.to_uppercase()));

        let content = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("failed to read headlines from {}", path.display()))?;

        let scores: Vec<f64> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(score_text)
            .collect();

        if scores.is_empty() {
            bail!("no scorable headlines in {}", path.display());
        }

        let polarity = scores.iter().sum::<f64>() / scores.len() as f64;
        debug!(
            source = %self.id,
            symbol,
            headlines = scores.len(),
            polarity,
            "headline file scored"
        );

        Ok(SentimentReading {
            source_id: self.id.clone(),
            polarity,
        })
    }
}

// -----------------------------------------------------------------------------
// StaticSource
// -----------------------------------------------------------------------------

/// Always reports the same polarity.  Useful for wiring tests and for running
/// the pipeline with a manually supplied market mood.
pub struct StaticSource {
    id: String,
    polarity: f64,
}

impl StaticSource {
    pub fn new(id: impl Into<String>, polarity: f64) -> Self {
        Self {
            id: id.into(),
            polarity: polarity.clamp(-1.0, 1.0),
        }
    }
}

#[async_trait]
impl SentimentSource for StaticSource {
    fn id(&self) -> &str {
        &self.id
    }

    async fn fetch(&self, _symbol: &str) -> Result<SentimentReading> {
        Ok(SentimentReading {
            source_id: self.id.clone(),
            polarity: self.polarity,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn write_headlines(dir: &std::path::Path, symbol: &str, lines: &str) {
        std::fs::write(dir.join(format!("{symbol}.txt")), lines).unwrap();
    }

    #[tokio::test]
    async fn scores_mean_of_headlines() {
        let tmp = tempfile::tempdir().unwrap();
        write_headlines(
            tmp.path(),
            "AAPL",
            "Shares surge on strong earnings\nAnalysts see record profit\n",
        );

        let source = HeadlineFileSource::new("news", tmp.path());
        let reading = source.fetch("AAPL").await.unwrap();

        assert_eq!(reading.source_id, "news");
        assert!(reading.polarity > 0.0);
        assert!(reading.polarity <= 1.0);
    }

    #[tokio::test]
    async fn symbol_is_uppercased_for_lookup() {
        let tmp = tempfile::tempdir().unwrap();
        write_headlines(tmp.path(), "TSLA", "Stock plunges after recall\n");

        let source = HeadlineFileSource::new("news", tmp.path());
        let reading = source.fetch("tsla").await.unwrap();
        assert!(reading.polarity < 0.0);
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let source = HeadlineFileSource::new("news", tmp.path());
        assert!(source.fetch("MSFT").await.is_err());
    }

    #[tokio::test]
    async fn blank_file_is_an_error() {
        // "Queried but nothing scorable" must become Unavailable upstream,
        // not a spurious neutral reading.
        let tmp = tempfile::tempdir().unwrap();
        write_headlines(tmp.path(), "AMZN", "\n\n  \n");

        let source = HeadlineFileSource::new("news", tmp.path());
        assert!(source.fetch("AMZN").await.is_err());
    }

    #[tokio::test]
    async fn static_source_reports_fixed_polarity() {
        let source = StaticSource::new("manual", 0.3);
        let reading = source.fetch("ANY").await.unwrap();
        assert_eq!(reading.polarity, 0.3);
        assert_eq!(reading.source_id, "manual");
    }

    #[tokio::test]
    async fn static_source_clamps_into_bounds() {
        let source = StaticSource::new("manual", 7.0);
        assert_eq!(source.fetch("ANY").await.unwrap().polarity, 1.0);
    }
}
