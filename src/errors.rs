//! Error types for the analysis engine

use chrono::NaiveDate;
use thiserror::Error;

/// Errors surfaced by series construction, indicator computation and
/// signal evaluation.
///
/// Comparisons against an undefined (warm-up) indicator value are never
/// an error; they resolve to "no signal" inside the cross detector.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Insufficient data: {required} bars required, {available} available")]
    InsufficientData { required: usize, available: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Bar dates must be strictly increasing: violation at {0}")]
    UnorderedDates(NaiveDate),
}
