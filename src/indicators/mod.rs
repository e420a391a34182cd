//! Pure indicator computation over full price history.
//!
//! Every function maps an input slice plus window parameters to derived
//! series aligned 1:1 with the input. Warm-up entries are `None`.
//! Iteration is strictly ascending; EMA and Wilder smoothing are
//! recursive and order-dependent.

pub mod momentum;
pub mod trend;
pub mod volatility;
