//! Unit tests for engine configuration validation

use indextrix::{EngineConfig, EngineError};

#[test]
fn default_config_is_valid() {
    assert!(EngineConfig::default().validate().is_ok());
}

#[test]
fn default_min_history_is_long_ma() {
    assert_eq!(EngineConfig::default().min_history(), 200);
}

#[test]
fn zero_ma_window_rejected() {
    let mut config = EngineConfig::default();
    config.ma.short = 0;
    assert!(matches!(
        config.validate(),
        Err(EngineError::InvalidConfiguration(_))
    ));
}

#[test]
fn short_ma_must_be_below_long_ma() {
    let mut config = EngineConfig::default();
    config.ma.short = 200;
    assert!(config.validate().is_err());
}

#[test]
fn macd_fast_must_be_below_slow() {
    let mut config = EngineConfig::default();
    config.macd.fast = 26;
    assert!(matches!(
        config.validate(),
        Err(EngineError::InvalidConfiguration(_))
    ));
}

#[test]
fn rsi_thresholds_must_be_ordered() {
    let mut config = EngineConfig::default();
    config.rsi.oversold = 75.0;
    assert!(config.validate().is_err());
}

#[test]
fn rsi_thresholds_must_be_in_range() {
    let mut config = EngineConfig::default();
    config.rsi.overbought = 120.0;
    assert!(config.validate().is_err());
}

#[test]
fn bollinger_period_one_rejected() {
    let mut config = EngineConfig::default();
    config.bollinger.period = 1;
    assert!(config.validate().is_err());
}

#[test]
fn negative_bollinger_multiplier_rejected() {
    let mut config = EngineConfig::default();
    config.bollinger.std_dev = -2.0;
    assert!(config.validate().is_err());
}

#[test]
fn zero_min_confirm_rejected() {
    let mut config = EngineConfig::default();
    config.signals.min_confirm = 0;
    assert!(config.validate().is_err());
}

#[test]
fn zero_lookback_rejected() {
    let mut config = EngineConfig::default();
    config.signals.lookback = 0;
    assert!(config.validate().is_err());
}

#[test]
fn min_history_never_below_three() {
    let mut config = EngineConfig::default();
    config.ma = indextrix::config::MaConfig { short: 1, long: 2 };
    config.rsi.period_short = 1;
    config.rsi.period_long = 1;
    config.macd = indextrix::config::MacdConfig {
        fast: 1,
        slow: 2,
        signal: 1,
    };
    config.bollinger.period = 2;
    assert_eq!(config.min_history(), 3);
}
