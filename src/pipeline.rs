// =============================================================================
// Per-symbol evaluation pipeline
// =============================================================================
//
// fetch prices -> indicators -> gather + aggregate sentiment -> signals.
//
// Each symbol is a fully independent pipeline over immutable data, so the
// batch runner spawns one task per symbol with no shared state; a symbol
// that fails with invalid input never affects the others.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{Days, Utc};
use serde::Serialize;
use tokio::task::JoinSet;
use tracing::{error, info};

use crate::engine::generate_signals;
use crate::indicators::compute_indicators;
use crate::providers::PriceProvider;
use crate::runtime_config::RuntimeConfig;
use crate::sentiment::{aggregate, gather_readings, SentimentSource, SourceReading};
use crate::types::DailySignal;

/// Everything the evaluation of one symbol produced, as plain data for
/// whatever presentation layer sits on top.
#[derive(Debug, Clone, Serialize)]
pub struct SymbolReport {
    pub symbol: String,
    /// The aggregate sentiment applied uniformly to every day.
    pub sentiment: f64,
    /// Raw per-source outcomes behind the aggregate.
    pub readings: Vec<SourceReading>,
    /// One row per trading day, aligned with the fetched series.
    pub days: Vec<DailySignal>,
}

/// Evaluate a single symbol end to end.
///
/// # Errors
/// Fails when the price fetch errors out or the fetched series is
/// structurally invalid (empty — including provider "no data" — or
/// non-monotonic).  Sentiment failures never error: they aggregate to the
/// neutral fallback.
pub async fn evaluate_symbol(
    provider: &dyn PriceProvider,
    sources: &[Arc<dyn SentimentSource>],
    symbol: &str,
    config: &RuntimeConfig,
) -> Result<SymbolReport> {
    let end = Utc::now().date_naive();
    let start = end - Days::new(config.lookback_days);

    let bars = provider
        .daily_history(symbol, start, end)
        .await
        .with_context(|| format!("price fetch failed for {symbol}"))?;

    let indicators = compute_indicators(&bars)
        .with_context(|| format!("invalid price series for {symbol}"))?;

    let readings = gather_readings(sources, symbol).await;
    let sentiment = aggregate(&readings);

    let signals = generate_signals(&indicators, sentiment, config.min_history);

    let days: Vec<DailySignal> = bars
        .iter()
        .zip(indicators.iter())
        .zip(signals.iter())
        .map(|((bar, point), signal)| DailySignal {
            date: bar.date,
            close: bar.close,
            sma_50: point.sma_50,
            sma_200: point.sma_200,
            rsi_14: point.rsi_14,
            signal: *signal,
        })
        .collect();

    info!(
        symbol,
        days = days.len(),
        sentiment,
        latest = %days.last().map(|d| d.signal).unwrap_or_default(),
        "symbol evaluated"
    );

    Ok(SymbolReport {
        symbol: symbol.to_string(),
        sentiment,
        readings,
        days,
    })
}

/// Evaluate every configured symbol in parallel.
///
/// Returns one `(symbol, result)` entry per symbol, sorted by symbol so the
/// output order is stable regardless of task completion order.
pub async fn run_batch(
    provider: Arc<dyn PriceProvider>,
    sources: Arc<Vec<Arc<dyn SentimentSource>>>,
    config: Arc<RuntimeConfig>,
) -> Vec<(String, Result<SymbolReport>)> {
    let mut tasks = JoinSet::new();

    for symbol in config.symbols.clone() {
        let provider = provider.clone();
        let sources = sources.clone();
        let config = config.clone();
        tasks.spawn(async move {
            let result = evaluate_symbol(provider.as_ref(), &sources, &symbol, &config).await;
            (symbol, result)
        });
    }

    let mut results = Vec::with_capacity(config.symbols.len());
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(entry) => results.push(entry),
            Err(e) => error!(error = %e, "symbol task panicked"),
        }
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
