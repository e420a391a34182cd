//! Data models shared across the engine.

pub mod bars;
pub mod rule;
pub mod series;
pub mod signal;
