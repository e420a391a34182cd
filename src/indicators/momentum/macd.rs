//! MACD (Moving Average Convergence/Divergence) indicator

use crate::errors::EngineError;
use crate::indicators::trend::ema::ema_raw;
use crate::models::series::Series;

/// MACD line, signal line and histogram, each defined from index 0
/// like the EMAs they derive from.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
    pub macd: Series,
    pub signal: Series,
    pub histogram: Series,
}

/// MACD line = EMA(fast) - EMA(slow); signal line = EMA of the MACD
/// line; histogram = MACD - signal.
pub fn macd(
    values: &[f64],
    fast: usize,
    slow: usize,
    signal: usize,
) -> Result<MacdSeries, EngineError> {
    if fast == 0 || slow == 0 || signal == 0 {
        return Err(EngineError::InvalidConfiguration(
            "MACD spans must be positive".to_string(),
        ));
    }
    if fast >= slow {
        return Err(EngineError::InvalidConfiguration(format!(
            "MACD fast span ({fast}) must be below slow span ({slow})"
        )));
    }

    let fast_ema = ema_raw(values, fast);
    let slow_ema = ema_raw(values, slow);
    let macd_line: Vec<f64> = fast_ema
        .iter()
        .zip(slow_ema.iter())
        .map(|(f, s)| f - s)
        .collect();
    let signal_line = ema_raw(&macd_line, signal);
    let histogram: Vec<f64> = macd_line
        .iter()
        .zip(signal_line.iter())
        .map(|(m, s)| m - s)
        .collect();

    Ok(MacdSeries {
        macd: Series::from_defined(macd_line),
        signal: Series::from_defined(signal_line),
        histogram: Series::from_defined(histogram),
    })
}
