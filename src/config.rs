//! Engine configuration
//!
//! All tunables are passed explicitly at engine construction; the engine
//! never reads ambient state. Defaults mirror the classic daily-index
//! setup: 50/200 MAs, RSI 14/28 with 70/30 bands, MACD 12/26/9,
//! Bollinger 20/2σ.

use crate::errors::EngineError;
use serde::{Deserialize, Serialize};

/// Moving average windows (trading days).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaConfig {
    pub short: usize,
    pub long: usize,
}

/// RSI periods and overbought/oversold thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsiConfig {
    pub period_short: usize,
    pub period_long: usize,
    pub overbought: f64,
    pub oversold: f64,
}

/// MACD EMA spans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacdConfig {
    pub fast: usize,
    pub slow: usize,
    pub signal: usize,
}

/// Bollinger Band window and width.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BollingerConfig {
    pub period: usize,
    pub std_dev: f64,
}

/// Confirmation and lookback settings for signal aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalConfig {
    /// Minimum number of rules that must agree before a buy or sell
    /// decision is confirmed.
    pub min_confirm: usize,
    /// How many trailing days the "most recent signal" query scans.
    pub lookback: usize,
}

/// Optional volatility-index rule settings. The rule is only registered
/// when the store carries an auxiliary series under `series`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolatilityIndexConfig {
    pub series: String,
    /// Level whose upward cross is treated as a fear spike.
    pub fear_level: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub ma: MaConfig,
    pub rsi: RsiConfig,
    pub macd: MacdConfig,
    pub bollinger: BollingerConfig,
    pub signals: SignalConfig,
    pub volatility_index: VolatilityIndexConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ma: MaConfig {
                short: 50,
                long: 200,
            },
            rsi: RsiConfig {
                period_short: 14,
                period_long: 28,
                overbought: 70.0,
                oversold: 30.0,
            },
            macd: MacdConfig {
                fast: 12,
                slow: 26,
                signal: 9,
            },
            bollinger: BollingerConfig {
                period: 20,
                std_dev: 2.0,
            },
            signals: SignalConfig {
                min_confirm: 2,
                lookback: 30,
            },
            volatility_index: VolatilityIndexConfig {
                series: "VIX".to_string(),
                fear_level: 30.0,
            },
        }
    }
}

impl EngineConfig {
    /// Validate every window and threshold, independent of any upstream
    /// validation the caller may have done.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.ma.short == 0 || self.ma.long == 0 {
            return Err(EngineError::InvalidConfiguration(
                "moving average windows must be positive".to_string(),
            ));
        }
        if self.ma.short >= self.ma.long {
            return Err(EngineError::InvalidConfiguration(format!(
                "short MA window ({}) must be below long MA window ({})",
                self.ma.short, self.ma.long
            )));
        }
        if self.rsi.period_short == 0 || self.rsi.period_long == 0 {
            return Err(EngineError::InvalidConfiguration(
                "RSI periods must be positive".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&self.rsi.oversold)
            || !(0.0..=100.0).contains(&self.rsi.overbought)
            || self.rsi.oversold >= self.rsi.overbought
        {
            return Err(EngineError::InvalidConfiguration(format!(
                "RSI thresholds must satisfy 0 <= oversold < overbought <= 100, got {}/{}",
                self.rsi.oversold, self.rsi.overbought
            )));
        }
        if self.macd.fast == 0 || self.macd.slow == 0 || self.macd.signal == 0 {
            return Err(EngineError::InvalidConfiguration(
                "MACD spans must be positive".to_string(),
            ));
        }
        if self.macd.fast >= self.macd.slow {
            return Err(EngineError::InvalidConfiguration(format!(
                "MACD fast span ({}) must be below slow span ({})",
                self.macd.fast, self.macd.slow
            )));
        }
        if self.bollinger.period < 2 {
            return Err(EngineError::InvalidConfiguration(
                "Bollinger period must be at least 2 for a sample standard deviation".to_string(),
            ));
        }
        if self.bollinger.std_dev <= 0.0 {
            return Err(EngineError::InvalidConfiguration(
                "Bollinger standard deviation multiplier must be positive".to_string(),
            ));
        }
        if self.signals.min_confirm == 0 {
            return Err(EngineError::InvalidConfiguration(
                "minimum confirmation count must be positive".to_string(),
            ));
        }
        if self.signals.lookback == 0 {
            return Err(EngineError::InvalidConfiguration(
                "signal lookback window must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Smallest bar count the engine accepts: the largest configured
    /// warm-up, and never fewer than 3 points.
    pub fn min_history(&self) -> usize {
        [
            3,
            self.ma.long,
            self.rsi.period_long + 1,
            self.macd.slow,
            self.bollinger.period,
        ]
        .into_iter()
        .max()
        .unwrap_or(3)
    }
}
