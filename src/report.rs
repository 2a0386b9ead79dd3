// =============================================================================
// Plain-text report rendering
// =============================================================================
//
// Presentation for the CLI run.  The core hands over plain data
// (`SymbolReport`); everything about layout lives here and nowhere else.

use std::fmt::Write;

use crate::pipeline::SymbolReport;

/// Render the trailing `last_n` days of a report as a fixed-width table.
pub fn render_table(report: &SymbolReport, last_n: usize) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:<12} {:>10} {:>10} {:>10} {:>8}  {:<6}",
        "Date", "Close", "SMA50", "SMA200", "RSI", "Signal"
    );

    let start = report.days.len().saturating_sub(last_n);
    for day in &report.days[start..] {
        let _ = writeln!(
            out,
            "{:<12} {:>10.2} {:>10} {:>10} {:>8}  {:<6}",
            day.date.to_string(),
            day.close,
            fmt_opt(day.sma_50),
            fmt_opt(day.sma_200),
            fmt_opt(day.rsi_14),
            day.signal.to_string(),
        );
    }

    out
}

/// "-" for undefined indicator values; they are states, not zeros.
fn fmt_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "-".to_string(),
    }
}

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::types::{DailySignal, Signal};

    fn sample_report(days: usize) -> SymbolReport {
        let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        SymbolReport {
            symbol: "AAPL".to_string(),
            sentiment: 0.2,
            readings: Vec::new(),
            days: (0..days)
                .map(|i| DailySignal {
                    date: start + chrono::Days::new(i as u64),
                    close: 100.0 + i as f64,
                    sma_50: if i >= 49 { Some(100.0) } else { None },
                    sma_200: None,
                    rsi_14: Some(42.0),
                    signal: Signal::Hold,
                })
                .collect(),
        }
    }

    #[test]
    fn renders_header_and_trailing_rows() {
        let table = render_table(&sample_report(60), 10);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 11); // header + 10 rows
        assert!(lines[0].contains("SMA200"));
        assert!(lines[10].contains("2024-03-01")); // day index 59
        assert!(lines[10].contains("HOLD"));
    }

    #[test]
    fn undefined_values_render_as_dash() {
        let table = render_table(&sample_report(10), 10);
        // All 10 rows predate the SMA windows: both SMA columns show the
        // right-aligned dash placeholder.
        assert!(table.lines().skip(1).all(|l| l.contains("         -")));
    }

    #[test]
    fn last_n_larger_than_series_renders_everything() {
        let table = render_table(&sample_report(3), 50);
        assert_eq!(table.lines().count(), 4);
    }
}
