// =============================================================================
// Meridian Signals — Main Entry Point
// =============================================================================
//
// Evaluates every configured symbol independently and in parallel: daily
// price history in, indicators + aggregated sentiment fused into a
// BUY/SELL/HOLD recommendation per trading day out.
// =============================================================================

// ── Module declarations ──────────────────────────────────────────────────────
mod engine;
mod error;
mod indicators;
mod pipeline;
mod providers;
mod report;
mod runtime_config;
mod sentiment;
mod types;

use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::pipeline::run_batch;
use crate::providers::{CsvFileProvider, PriceProvider, StooqProvider};
use crate::runtime_config::{PriceProviderKind, RuntimeConfig};
use crate::sentiment::headlines::{HeadlineFileSource, StaticSource};
use crate::sentiment::SentimentSource;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Environment & config ──────────────────────────────────────────
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = RuntimeConfig::load("meridian_config.json").unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        RuntimeConfig::default()
    });

    // Override symbols from env if available.
    if let Ok(syms) = std::env::var("MERIDIAN_SYMBOLS") {
        config.symbols = syms
            .split(',')
            .map(|s| s.trim().to_uppercase())
            .filter(|s| !s.is_empty())
            .collect();
    }
    if config.symbols.is_empty() {
        config.symbols = RuntimeConfig::default().symbols;
    }

    info!(
        symbols = ?config.symbols,
        provider = %config.price_provider,
        lookback_days = config.lookback_days,
        "Configured symbols"
    );

    // ── 2. Price provider ────────────────────────────────────────────────
    let provider: Arc<dyn PriceProvider> = match config.price_provider {
        PriceProviderKind::Stooq => Arc::new(StooqProvider::new()),
        PriceProviderKind::CsvDir => Arc::new(CsvFileProvider::new(&config.price_dir)),
    };

    // ── 3. Sentiment sources ─────────────────────────────────────────────
    let mut sources: Vec<Arc<dyn SentimentSource>> = vec![Arc::new(HeadlineFileSource::new(
        "news",
        &config.headline_dir,
    ))];
    if let Some(polarity) = config.static_sentiment {
        sources.push(Arc::new(StaticSource::new("manual", polarity)));
    }

    info!(sources = sources.len(), "Sentiment sources registered");

    // ── 4. Evaluate all symbols in parallel ──────────────────────────────
    let report_days = config.report_days;
    let results = run_batch(provider, Arc::new(sources), Arc::new(config)).await;

    // ── 5. Render ────────────────────────────────────────────────────────
    let mut failures = 0usize;
    for (symbol, result) in &results {
        match result {
            Ok(rep) => {
                let latest = rep.days.last().map(|d| d.signal).unwrap_or_default();
                info!(symbol, sentiment = rep.sentiment, latest = %latest, "signals generated");
                println!("\n{symbol}  (aggregate sentiment {:+.3})", rep.sentiment);
                print!("{}", report::render_table(rep, report_days));
            }
            Err(e) => {
                failures += 1;
                error!(symbol, error = %e, "symbol evaluation failed");
            }
        }
    }

    if failures > 0 {
        warn!(failures, total = results.len(), "some symbols failed");
    }

    Ok(())
}
