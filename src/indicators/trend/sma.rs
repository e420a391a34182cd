//! SMA (Simple Moving Average) indicator

use crate::errors::EngineError;
use crate::models::series::Series;

/// Arithmetic mean over a trailing window, defined from index
/// `window - 1` onward. Running-sum implementation, O(n).
pub fn sma(values: &[f64], window: usize) -> Result<Series, EngineError> {
    if window == 0 {
        return Err(EngineError::InvalidConfiguration(
            "moving average window must be positive".to_string(),
        ));
    }

    let mut out = vec![None; values.len()];
    let mut sum = 0.0;
    for (i, &value) in values.iter().enumerate() {
        sum += value;
        if i >= window {
            sum -= values[i - window];
        }
        if i + 1 >= window {
            out[i] = Some(sum / window as f64);
        }
    }

    Ok(Series::new(out))
}
