// =============================================================================
// Signal Engine — per-day BUY/SELL/HOLD decision policy
// =============================================================================
//
// Fuses the indicator series with one aggregate sentiment scalar under a
// fixed rule set, evaluated independently per index:
//
//   1. i < min_history                                   => HOLD
//   2. SMA50 > SMA200  AND  RSI < 70  AND  sentiment > 0 => BUY
//   3. SMA50 < SMA200  AND  RSI > 30  AND  sentiment < 0 => SELL
//   4. otherwise                                         => HOLD
//
// All comparisons are strict: ties (SMA50 == SMA200, sentiment == 0, RSI
// exactly at a gate) fall through to HOLD.  An undefined indicator fails
// every comparison and resolves to HOLD, never an error.

use crate::indicators::IndicatorPoint;
use crate::types::Signal;

/// Days of history required before any non-HOLD signal; matches the SMA(200)
/// warm-up.
pub const DEFAULT_MIN_HISTORY: usize = 200;

/// RSI gate above which BUY is vetoed (overbought).
pub const RSI_OVERBOUGHT: f64 = 70.0;

/// RSI gate below which SELL is vetoed (oversold).
pub const RSI_OVERSOLD: f64 = 30.0;

/// Produce one signal per indicator index.
///
/// `sentiment` is a single time-invariant scalar applied uniformly to every
/// day.  Pure function: no state is retained between invocations, identical
/// inputs yield identical output.
pub fn generate_signals(
    indicators: &[IndicatorPoint],
    sentiment: f64,
    min_history: usize,
) -> Vec<Signal> {
    indicators
        .iter()
        .enumerate()
        .map(|(i, point)| signal_for_day(i, point, sentiment, min_history))
        .collect()
}

fn signal_for_day(
    index: usize,
    point: &IndicatorPoint,
    sentiment: f64,
    min_history: usize,
) -> Signal {
    if index < min_history {
        return Signal::Hold;
    }

    // Undefined values can only reach this point when min_history is lowered
    // below the indicator warm-ups; they must fail the comparisons, not panic.
    let (Some(sma_50), Some(sma_200), Some(rsi)) = (point.sma_50, point.sma_200, point.rsi_14)
    else {
        return Signal::Hold;
    };

    if sma_50 > sma_200 && rsi < RSI_OVERBOUGHT && sentiment > 0.0 {
        Signal::Buy
    } else if sma_50 < sma_200 && rsi > RSI_OVERSOLD && sentiment < 0.0 {
        Signal::Sell
    } else {
        Signal::Hold
    }
}
