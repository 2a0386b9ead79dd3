// =============================================================================
// Simple Moving Average (SMA)
// =============================================================================
//
// SMA(window, i) = arithmetic mean of the closes over [i - window + 1, i].
// The value is undefined until a full window of history exists.

/// Compute the SMA series for `closes`, aligned index-for-index with the
/// input.
///
/// Index `i` carries `Some(mean)` once `i + 1 >= window` and `None` before
/// that — undefined values are never zero-filled or extrapolated.
///
/// # Edge cases
/// - `window == 0` => all `None`
/// - `closes.len() < window` => all `None` (not an error)
pub fn sma_series(closes: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; closes.len()];
    }

    let mut result = Vec::with_capacity(closes.len());
    let mut rolling_sum = 0.0;

    for (i, &close) in closes.iter().enumerate() {
        rolling_sum += close;
        if i >= window {
            rolling_sum -= closes[i - window];
        }

        if i + 1 >= window {
            result.push(Some(rolling_sum / window as f64));
        } else {
            result.push(None);
        }
    }

    result
}
