// =============================================================================
// Typed errors for the signal core
// =============================================================================
//
// Only structurally invalid input is fatal to a symbol's pipeline.  Every
// recoverable absence-of-data condition (short history, failed sentiment
// source) is resolved locally to a safe default and never reaches this enum.

use chrono::NaiveDate;
use thiserror::Error;

/// A price series that cannot be evaluated at all.
///
/// Raised by the indicator calculator before any computation happens; the
/// affected symbol is reported and skipped, other symbols are unaffected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInput {
    #[error("price series is empty")]
    EmptySeries,

    #[error("price series dates are not strictly increasing at index {index}: {prev} >= {next}")]
    NonMonotonicDates {
        index: usize,
        prev: NaiveDate,
        next: NaiveDate,
    },
}
