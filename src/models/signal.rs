//! Signal and decision output models.

use crate::models::rule::Strength;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Full vote history for one rule, aligned with the source dates.
/// Entries are -1, 0 or +1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSignals {
    pub rule: String,
    pub strength: Strength,
    pub votes: Vec<i8>,
}

/// Per-date tally of rule votes with independently-confirmed buy and
/// sell flags. Both flags may be true on the same date; arbitration is
/// left to downstream consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedDecision {
    pub date: NaiveDate,
    pub price: f64,
    pub buy_count: usize,
    pub sell_count: usize,
    pub buy: bool,
    pub sell: bool,
}

/// One rule's vote on a particular date, for reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleVote {
    pub rule: String,
    pub signal: i8,
    pub strength: Strength,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A confirmed decision located by the most-recent-signal query,
/// carrying the non-zero rule votes on that date sorted by strength.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalEvent {
    pub date: NaiveDate,
    pub price: f64,
    pub confirmations: usize,
    pub votes: Vec<RuleVote>,
}
