// =============================================================================
// Relative Strength Index (RSI) — simplified mean-percent-change form
// =============================================================================
//
// Step 1 — Compute the day-over-day percent-change series of the closes.
// Step 2 — Take the rolling mean `r` of the trailing `period` percent changes.
// Step 3 — RSI = 100 - 100 / (1 + r)
//
// NOTE: this is NOT Wilder's RSI (no separate averaged gains/losses).  The
// signed percent changes are averaged directly, so the value is unbounded
// below 0 and above 100.  The 70/30 overbought/oversold gates in the signal
// engine are defined against this exact form; do not swap in the textbook
// formula without revisiting those thresholds.

/// Compute the simplified RSI series for `closes`, aligned index-for-index
/// with the input.
///
/// Index `i` carries `Some(rsi)` once `period` percent-change values precede
/// it (i.e. `i >= period`) and `None` before that.
///
/// # Edge cases
/// - `period == 0` => all `None`
/// - A percent change against a zero close is undefined; any window that
///   contains one yields `None` for its index (NaN propagation, never a
///   made-up value).
/// - A window mean of exactly -1 would divide by zero; non-finite results
///   map to `None`.
pub fn rsi_series(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    if period == 0 {
        return vec![None; closes.len()];
    }

    // Percent change of close i vs close i-1; NaN when the previous close is
    // zero so the poisoned window stays undefined downstream.
    let changes: Vec<f64> = closes
        .windows(2)
        .map(|w| if w[0] == 0.0 { f64::NAN } else { (w[1] - w[0]) / w[0] })
        .collect();

    let mut result = Vec::with_capacity(closes.len());
    for i in 0..closes.len() {
        if i < period {
            result.push(None);
            continue;
        }

        // Trailing `period` changes ending at close i: changes[i-period..i].
        let window = &changes[i - period..i];
        let mean = window.iter().sum::<f64>() / period as f64;

        let rsi = 100.0 - 100.0 / (1.0 + mean);
        result.push(if rsi.is_finite() { Some(rsi) } else { None });
    }

    result
}
