//! Signal detection, aggregation and market classification.

pub mod aggregation;
pub mod cross;
pub mod engine;
pub mod rules;
pub mod status;
