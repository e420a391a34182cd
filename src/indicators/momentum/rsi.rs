//! RSI (Relative Strength Index) indicator
//!
//! RSI = 100 - (100 / (1 + RS))
//! RS = Average Gain / Average Loss, Wilder-smoothed

use crate::errors::EngineError;
use crate::models::series::Series;

/// Wilder-smoothed RSI over closing values. The first `period` deltas
/// seed the averages with a simple mean; later averages use the
/// recursive form `(avg * (period - 1) + value) / period`. Defined from
/// index `period` onward.
pub fn rsi(values: &[f64], period: usize) -> Result<Series, EngineError> {
    if period == 0 {
        return Err(EngineError::InvalidConfiguration(
            "RSI period must be positive".to_string(),
        ));
    }

    let n = values.len();
    let mut out = vec![None; n];
    if n < period + 1 {
        return Ok(Series::new(out));
    }

    // Deltas aligned to the index of the later point; index 0 unused.
    let mut gains = vec![0.0; n];
    let mut losses = vec![0.0; n];
    for i in 1..n {
        let delta = values[i] - values[i - 1];
        if delta > 0.0 {
            gains[i] = delta;
        } else {
            losses[i] = -delta;
        }
    }

    let mut avg_gain = gains[1..=period].iter().sum::<f64>() / period as f64;
    let mut avg_loss = losses[1..=period].iter().sum::<f64>() / period as f64;
    out[period] = Some(rsi_value(avg_gain, avg_loss));

    for i in period + 1..n {
        avg_gain = (avg_gain * (period - 1) as f64 + gains[i]) / period as f64;
        avg_loss = (avg_loss * (period - 1) as f64 + losses[i]) / period as f64;
        out[i] = Some(rsi_value(avg_gain, avg_loss));
    }

    Ok(Series::new(out))
}

/// Zero average loss with positive gains is exactly 100, not a division
/// error; a fully flat window is neutral 50.
fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        if avg_gain > 0.0 {
            100.0
        } else {
            50.0
        }
    } else {
        let rs = avg_gain / avg_loss;
        100.0 - (100.0 / (1.0 + rs))
    }
}
