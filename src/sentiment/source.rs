// =============================================================================
// Sentiment source capability
// =============================================================================
//
// One trait in front of every text/sentiment feed (news scraper, social
// stream, ...).  New feeds register another implementation; the fusion logic
// never changes.  Retries, timeouts and rate limits live inside the
// implementations — by the time a reading crosses this boundary it is either
// scored or Unavailable.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, warn};

use super::{SentimentReading, SourceReading};

/// A single sentiment feed for a symbol.
#[async_trait]
pub trait SentimentSource: Send + Sync {
    /// Stable identifier, carried on every reading this source produces.
    fn id(&self) -> &str;

    /// Fetch and score the feed for `symbol`.
    ///
    /// An `Err` means the source failed or had nothing scorable; the caller
    /// normalizes it to `Unavailable` — it is never retried here and never
    /// surfaces past aggregation.
    async fn fetch(&self, symbol: &str) -> Result<SentimentReading>;
}

/// Query every registered source concurrently and normalize each outcome.
///
/// Failures are logged and mapped to `Unavailable`; the output always has
/// one entry per source, in registration order.
pub async fn gather_readings(
    sources: &[Arc<dyn SentimentSource>],
    symbol: &str,
) -> Vec<SourceReading> {
    let pending = sources.iter().map(|source| {
        let source = source.clone();
        async move {
            match source.fetch(symbol).await {
                Ok(reading) => {
                    debug!(
                        source = source.id(),
                        symbol,
                        polarity = reading.polarity,
                        "sentiment reading"
                    );
                    SourceReading::Scored(reading)
                }
                Err(e) => {
                    warn!(source = source.id(), symbol, error = %e, "sentiment source unavailable");
                    SourceReading::Unavailable {
                        source_id: source.id().to_string(),
                    }
                }
            }
        }
    });

    futures_util::future::join_all(pending).await
}
