//! Bollinger Bands indicator
//!
//! Middle Band = SMA(period)
//! Upper Band = Middle + (multiplier * standard deviation)
//! Lower Band = Middle - (multiplier * standard deviation)

use crate::errors::EngineError;
use crate::indicators::trend::sma;
use crate::models::series::Series;

/// Upper, middle and lower bands, undefined over the same warm-up
/// indices as the middle SMA.
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerSeries {
    pub upper: Series,
    pub middle: Series,
    pub lower: Series,
}

/// Bands around the trailing SMA, widened by `std_dev` times the
/// sample standard deviation (n - 1 denominator) of the same window.
pub fn bollinger(values: &[f64], period: usize, std_dev: f64) -> Result<BollingerSeries, EngineError> {
    if period < 2 {
        return Err(EngineError::InvalidConfiguration(
            "Bollinger period must be at least 2 for a sample standard deviation".to_string(),
        ));
    }
    if std_dev <= 0.0 {
        return Err(EngineError::InvalidConfiguration(
            "Bollinger standard deviation multiplier must be positive".to_string(),
        ));
    }

    let middle = sma(values, period)?;
    let n = values.len();
    let mut upper = vec![None; n];
    let mut lower = vec![None; n];

    for i in 0..n {
        let Some(mean) = middle.get(i) else {
            continue;
        };
        let window = &values[i + 1 - period..=i];
        let sum_sq: f64 = window.iter().map(|v| (v - mean) * (v - mean)).sum();
        let std = (sum_sq / (period - 1) as f64).sqrt();
        upper[i] = Some(mean + std_dev * std);
        lower[i] = Some(mean - std_dev * std);
    }

    Ok(BollingerSeries {
        upper: Series::new(upper),
        middle,
        lower: Series::new(lower),
    })
}
