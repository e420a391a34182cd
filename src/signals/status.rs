//! Qualitative market-status classification from latest indicator values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Trend {
    Uptrend,
    Downtrend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum MarketStrength {
    Overbought,
    Oversold,
    Strong,
    Weak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Momentum {
    Bullish,
    Bearish,
}

/// Point-in-time snapshot handed to reporting collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketStatus {
    pub date: NaiveDate,
    pub price: f64,
    pub ma_short: f64,
    pub ma_long: f64,
    pub rsi: f64,
    pub macd: f64,
    pub macd_signal: f64,
    pub macd_histogram: f64,
    pub trend: Trend,
    pub strength: MarketStrength,
    pub momentum: Momentum,
}

/// Binary: above the long MA is an uptrend, anything else a downtrend.
pub fn classify_trend(price: f64, ma_long: f64) -> Trend {
    if price > ma_long {
        Trend::Uptrend
    } else {
        Trend::Downtrend
    }
}

/// Four-way RSI classification against the configured bands.
pub fn classify_strength(rsi: f64, overbought: f64, oversold: f64) -> MarketStrength {
    if rsi > overbought {
        MarketStrength::Overbought
    } else if rsi < oversold {
        MarketStrength::Oversold
    } else if rsi > 50.0 {
        MarketStrength::Strong
    } else {
        MarketStrength::Weak
    }
}

/// MACD line above its signal line reads bullish, otherwise bearish.
pub fn classify_momentum(macd: f64, macd_signal: f64) -> Momentum {
    if macd > macd_signal {
        Momentum::Bullish
    } else {
        Momentum::Bearish
    }
}
