//! EMA (Exponential Moving Average) indicator

use crate::errors::EngineError;
use crate::models::series::Series;

/// Recursively weighted average with alpha = 2 / (span + 1), seeded
/// with the first value. Defined from index 0; no warm-up gap.
pub fn ema(values: &[f64], span: usize) -> Result<Series, EngineError> {
    if span == 0 {
        return Err(EngineError::InvalidConfiguration(
            "EMA span must be positive".to_string(),
        ));
    }
    Ok(Series::from_defined(ema_raw(values, span)))
}

/// EMA over raw values, for callers that chain the result into further
/// smoothing (MACD signal line). Assumes `span > 0`.
pub(crate) fn ema_raw(values: &[f64], span: usize) -> Vec<f64> {
    let alpha = 2.0 / (span as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut prev: Option<f64> = None;

    for &value in values {
        let next = match prev {
            None => value,
            Some(p) => alpha * value + (1.0 - alpha) * p,
        };
        out.push(next);
        prev = Some(next);
    }

    out
}
