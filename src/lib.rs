//! Technical analysis engine for daily index data.
//!
//! Computes moving averages, RSI, MACD and Bollinger Bands over a
//! date-ordered bar series, runs a configurable set of crossover rules
//! through a generic directional-cross detector, and aggregates the
//! per-rule votes into confirmed buy/sell decisions plus a qualitative
//! market status. All evaluation is pure and synchronous; data fetch,
//! charting and notification live outside this crate.

pub mod config;
pub mod errors;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod signals;

pub use config::EngineConfig;
pub use errors::EngineError;
pub use models::bars::{Bar, SeriesStore};
pub use signals::engine::{EngineReport, SignalEngine};
