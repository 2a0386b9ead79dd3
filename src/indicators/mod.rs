// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free indicator computation over a daily price series.
// Values are `Option<f64>` so callers are forced to handle the
// insufficient-history prefix of every column; an undefined value is a valid
// state, not an error.

pub mod rsi;
pub mod sma;

use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;
use crate::types::PriceBar;

pub use rsi::rsi_series;
pub use sma::sma_series;

/// Short trend window (trading days).
pub const SMA_SHORT_WINDOW: usize = 50;
/// Long trend window (trading days).
pub const SMA_LONG_WINDOW: usize = 200;
/// RSI look-back (percent-change values).
pub const RSI_PERIOD: usize = 14;

/// Indicator values for a single trading day, aligned index-for-index with
/// the price series that produced them.
///
/// Each column is `None` until its window is full: `sma_50` for index < 49,
/// `sma_200` for index < 199, `rsi_14` for index < 14.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPoint {
    pub sma_50: Option<f64>,
    pub sma_200: Option<f64>,
    pub rsi_14: Option<f64>,
}

/// Derive SMA(50), SMA(200) and RSI(14) for the full series.
///
/// The result has exactly one element per input bar.  A series shorter than
/// any window is fine — the affected columns simply stay undefined.
///
/// # Errors
/// `InvalidInput` when the series is empty or its dates are not strictly
/// increasing (duplicates included).
pub fn compute_indicators(bars: &[PriceBar]) -> Result<Vec<IndicatorPoint>, InvalidInput> {
    validate_series(bars)?;

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();

    let sma_short = sma_series(&closes, SMA_SHORT_WINDOW);
    let sma_long = sma_series(&closes, SMA_LONG_WINDOW);
    let rsi = rsi_series(&closes, RSI_PERIOD);

    Ok((0..bars.len())
        .map(|i| IndicatorPoint {
            sma_50: sma_short[i],
            sma_200: sma_long[i],
            rsi_14: rsi[i],
        })
        .collect())
}

/// Structural validation: non-empty, strictly increasing dates.
fn validate_series(bars: &[PriceBar]) -> Result<(), InvalidInput> {
    if bars.is_empty() {
        return Err(InvalidInput::EmptySeries);
    }

    for (i, pair) in bars.windows(2).enumerate() {
        if pair[0].date >= pair[1].date {
            return Err(InvalidInput::NonMonotonicDates {
                index: i + 1,
                prev: pair[0].date,
                next: pair[1].date,
            });
        }
    }

    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn bars_from_closes(closes: &[f64]) -> Vec<PriceBar> {
        let start = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PriceBar {
                date: start + chrono::Days::new(i as u64),
                open: close,
                high: close,
                low: close,
                close,
                volume: 1000.0,
            })
            .collect()
    }

    #[test]
    fn empty_series_is_invalid() {
        assert_eq!(compute_indicators(&[]), Err(InvalidInput::EmptySeries));
    }

    #[test]
    fn duplicate_date_is_invalid() {
        let mut bars = bars_from_closes(&[1.0, 2.0, 3.0]);
        bars[2].date = bars[1].date;
        match compute_indicators(&bars) {
            Err(InvalidInput::NonMonotonicDates { index, .. }) => assert_eq!(index, 2),
            other => panic!("expected NonMonotonicDates, got {other:?}"),
        }
    }

    #[test]
    fn out_of_order_date_is_invalid() {
        let mut bars = bars_from_closes(&[1.0, 2.0, 3.0, 4.0]);
        bars.swap(1, 2);
        assert!(matches!(
            compute_indicators(&bars),
            Err(InvalidInput::NonMonotonicDates { .. })
        ));
    }

    #[test]
    fn output_aligned_with_input() {
        let bars = bars_from_closes(&vec![100.0; 260]);
        let points = compute_indicators(&bars).unwrap();
        assert_eq!(points.len(), bars.len());
    }

    #[test]
    fn undefined_prefixes_per_column() {
        let bars = bars_from_closes(&vec![100.0; 260]);
        let points = compute_indicators(&bars).unwrap();

        assert!(points[..49].iter().all(|p| p.sma_50.is_none()));
        assert!(points[49].sma_50.is_some());

        assert!(points[..199].iter().all(|p| p.sma_200.is_none()));
        assert!(points[199].sma_200.is_some());

        assert!(points[..14].iter().all(|p| p.rsi_14.is_none()));
        assert!(points[14].rsi_14.is_some());
    }

    #[test]
    fn short_series_is_not_an_error() {
        // 60 bars: sma_50 defined from index 49, sma_200 never defined.
        let bars = bars_from_closes(&vec![50.0; 60]);
        let points = compute_indicators(&bars).unwrap();
        assert!(points.iter().all(|p| p.sma_200.is_none()));
        assert!(points[49].sma_50.is_some());
        assert!(points[59].rsi_14.is_some());
    }

    #[test]
    fn single_bar_series_is_valid() {
        let bars = bars_from_closes(&[123.4]);
        let points = compute_indicators(&bars).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0], IndicatorPoint::default());
    }
}
