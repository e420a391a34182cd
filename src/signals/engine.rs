//! Main evaluation engine: indicators, rules, decisions, status.

use crate::config::EngineConfig;
use crate::errors::EngineError;
use crate::indicators::momentum::{macd, rsi};
use crate::indicators::trend::sma;
use crate::indicators::volatility::bollinger;
use crate::models::bars::SeriesStore;
use crate::models::rule::{Action, Direction, Operand, Pattern, Rule, Strength};
use crate::models::series::{IndicatorSet, Series};
use crate::models::signal::{AggregatedDecision, RuleSignals, SignalEvent};
use crate::signals::aggregation::{aggregate, latest_event};
use crate::signals::rules::evaluate_rules;
use crate::signals::status::{
    classify_momentum, classify_strength, classify_trend, MarketStatus,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub const CLOSE: &str = "Close";
pub const MACD: &str = "MACD";
pub const MACD_SIGNAL: &str = "MACD_Signal";
pub const MACD_HIST: &str = "MACD_Hist";
pub const BB_UPPER: &str = "BB_Upper";
pub const BB_MIDDLE: &str = "BB_Middle";
pub const BB_LOWER: &str = "BB_Lower";

pub fn ma_name(window: usize) -> String {
    format!("MA{window}")
}

pub fn rsi_name(period: usize) -> String {
    format!("RSI{period}")
}

/// Everything one evaluation pass produces, as plain serializable data
/// for downstream charting and notification collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineReport {
    pub indicators: IndicatorSet,
    pub signals: Vec<RuleSignals>,
    pub decisions: Vec<AggregatedDecision>,
    pub latest_buy: Option<SignalEvent>,
    pub latest_sell: Option<SignalEvent>,
    pub status: MarketStatus,
}

/// Signal engine configured once at construction. Evaluation is pure
/// and deterministic: the same store always yields the same report.
pub struct SignalEngine {
    config: EngineConfig,
}

impl SignalEngine {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn ensure_history(&self, store: &SeriesStore) -> Result<(), EngineError> {
        let required = self.config.min_history();
        if store.len() < required {
            return Err(EngineError::InsufficientData {
                required,
                available: store.len(),
            });
        }
        Ok(())
    }

    /// Compute the full indicator set over the store's close prices,
    /// plus a copy of every auxiliary series under its own name.
    pub fn compute_indicators(&self, store: &SeriesStore) -> Result<IndicatorSet, EngineError> {
        self.ensure_history(store)?;

        let closes = store.closes();
        let mut set = IndicatorSet::new(store.dates());
        set.insert(CLOSE, Series::from_defined(closes.clone()));

        set.insert(&ma_name(self.config.ma.short), sma(&closes, self.config.ma.short)?);
        set.insert(&ma_name(self.config.ma.long), sma(&closes, self.config.ma.long)?);
        debug!(short = self.config.ma.short, long = self.config.ma.long, "computed moving averages");

        set.insert(
            &rsi_name(self.config.rsi.period_short),
            rsi(&closes, self.config.rsi.period_short)?,
        );
        set.insert(
            &rsi_name(self.config.rsi.period_long),
            rsi(&closes, self.config.rsi.period_long)?,
        );
        debug!(
            short = self.config.rsi.period_short,
            long = self.config.rsi.period_long,
            "computed RSI"
        );

        let macd_series = macd(
            &closes,
            self.config.macd.fast,
            self.config.macd.slow,
            self.config.macd.signal,
        )?;
        set.insert(MACD, macd_series.macd);
        set.insert(MACD_SIGNAL, macd_series.signal);
        set.insert(MACD_HIST, macd_series.histogram);
        debug!(
            fast = self.config.macd.fast,
            slow = self.config.macd.slow,
            signal = self.config.macd.signal,
            "computed MACD"
        );

        let bands = bollinger(
            &closes,
            self.config.bollinger.period,
            self.config.bollinger.std_dev,
        )?;
        set.insert(BB_UPPER, bands.upper);
        set.insert(BB_MIDDLE, bands.middle);
        set.insert(BB_LOWER, bands.lower);
        debug!(
            period = self.config.bollinger.period,
            std_dev = self.config.bollinger.std_dev,
            "computed Bollinger Bands"
        );

        for name in store.aux_names() {
            if let Some(values) = store.aux(name) {
                set.insert(name, Series::new(values.to_vec()));
            }
        }

        Ok(set)
    }

    /// The built-in rule list. Optional indicators register as rules
    /// only when the store carries their backing series; presence
    /// checks live here, not inside the evaluator.
    pub fn default_rules(&self, store: &SeriesStore) -> Vec<Rule> {
        let ma_short = ma_name(self.config.ma.short);
        let ma_long = ma_name(self.config.ma.long);
        let rsi_short = rsi_name(self.config.rsi.period_short);

        let mut rules = vec![
            Rule::new(
                "ma_cross",
                Pattern::Crossover {
                    fast: Operand::Indicator(ma_short.clone()),
                    slow: Operand::Indicator(ma_long.clone()),
                },
                Action::Buy,
                Strength::Strong,
            )
            .with_description("Short MA crosses the long MA"),
            Rule::new(
                "price_ma",
                Pattern::Crossover {
                    fast: Operand::Indicator(CLOSE.to_string()),
                    slow: Operand::Indicator(ma_long),
                },
                Action::Buy,
                Strength::Strong,
            )
            .with_description("Price crosses the long MA"),
            Rule::new(
                "macd_cross",
                Pattern::Crossover {
                    fast: Operand::Indicator(MACD.to_string()),
                    slow: Operand::Indicator(MACD_SIGNAL.to_string()),
                },
                Action::Buy,
                Strength::Medium,
            )
            .with_description("MACD line crosses its signal line"),
            Rule::new(
                "rsi_oversold_rebound",
                Pattern::Threshold {
                    input: Operand::Indicator(rsi_short.clone()),
                    reference: Operand::Constant(self.config.rsi.oversold),
                    direction: Direction::Up,
                },
                Action::Buy,
                Strength::Medium,
            )
            .with_description("RSI rebounds from oversold territory"),
            Rule::new(
                "rsi_overbought_pullback",
                Pattern::Threshold {
                    input: Operand::Indicator(rsi_short),
                    reference: Operand::Constant(self.config.rsi.overbought),
                    direction: Direction::Down,
                },
                Action::Sell,
                Strength::Medium,
            )
            .with_description("RSI falls from overbought territory"),
            Rule::new(
                "bb_lower_bounce",
                Pattern::Bounce {
                    input: Operand::Indicator(CLOSE.to_string()),
                    reference: Operand::Indicator(BB_LOWER.to_string()),
                    direction: Direction::Up,
                },
                Action::Buy,
                Strength::Medium,
            )
            .with_description("Price bounces from the Bollinger lower band"),
            Rule::new(
                "bb_upper_reject",
                Pattern::Threshold {
                    input: Operand::Indicator(CLOSE.to_string()),
                    reference: Operand::Indicator(BB_UPPER.to_string()),
                    direction: Direction::Down,
                },
                Action::Sell,
                Strength::Weak,
            )
            .with_description("Price falls back below the Bollinger upper band"),
        ];

        let vix = &self.config.volatility_index;
        if store.aux(&vix.series).is_some() {
            rules.push(
                Rule::new(
                    "volatility_fear",
                    Pattern::Threshold {
                        input: Operand::Indicator(vix.series.clone()),
                        reference: Operand::Constant(vix.fear_level),
                        direction: Direction::Up,
                    },
                    Action::Sell,
                    Strength::Strong,
                )
                .with_description("Volatility index spikes above the fear level"),
            );
        }

        rules
    }

    /// Full evaluation with the built-in rules.
    pub fn evaluate(&self, store: &SeriesStore) -> Result<EngineReport, EngineError> {
        let rules = self.default_rules(store);
        self.evaluate_with_rules(store, &rules)
    }

    /// Full evaluation with a caller-supplied rule list.
    pub fn evaluate_with_rules(
        &self,
        store: &SeriesStore,
        rules: &[Rule],
    ) -> Result<EngineReport, EngineError> {
        let indicators = self.compute_indicators(store)?;
        let signals = evaluate_rules(rules, &indicators);
        let decisions = aggregate(store, &signals, self.config.signals.min_confirm);

        let lookback = self.config.signals.lookback;
        let latest_buy = latest_event(&decisions, rules, &signals, Action::Buy, lookback);
        let latest_sell = latest_event(&decisions, rules, &signals, Action::Sell, lookback);
        let status = self.market_status(store, &indicators)?;

        info!(
            rules = rules.len(),
            bars = store.len(),
            trend = ?status.trend,
            strength = ?status.strength,
            momentum = ?status.momentum,
            "evaluation complete"
        );

        Ok(EngineReport {
            indicators,
            signals,
            decisions,
            latest_buy,
            latest_sell,
            status,
        })
    }

    /// Classify the latest indicator values. The history gate in
    /// [`Self::compute_indicators`] guarantees every series is defined
    /// at the final index; a missing value still maps to a typed error
    /// rather than a panic.
    fn market_status(
        &self,
        store: &SeriesStore,
        set: &IndicatorSet,
    ) -> Result<MarketStatus, EngineError> {
        let insufficient = || EngineError::InsufficientData {
            required: self.config.min_history(),
            available: store.len(),
        };

        let last = set.len().checked_sub(1).ok_or_else(insufficient)?;
        let date = *set.dates().last().ok_or_else(insufficient)?;

        let price = set.value_at(CLOSE, last).ok_or_else(insufficient)?;
        let ma_short = set
            .value_at(&ma_name(self.config.ma.short), last)
            .ok_or_else(insufficient)?;
        let ma_long = set
            .value_at(&ma_name(self.config.ma.long), last)
            .ok_or_else(insufficient)?;
        let rsi = set
            .value_at(&rsi_name(self.config.rsi.period_short), last)
            .ok_or_else(insufficient)?;
        let macd = set.value_at(MACD, last).ok_or_else(insufficient)?;
        let macd_signal = set.value_at(MACD_SIGNAL, last).ok_or_else(insufficient)?;
        let macd_histogram = set.value_at(MACD_HIST, last).ok_or_else(insufficient)?;

        Ok(MarketStatus {
            date,
            price,
            ma_short,
            ma_long,
            rsi,
            macd,
            macd_signal,
            macd_histogram,
            trend: classify_trend(price, ma_long),
            strength: classify_strength(rsi, self.config.rsi.overbought, self.config.rsi.oversold),
            momentum: classify_momentum(macd, macd_signal),
        })
    }
}
