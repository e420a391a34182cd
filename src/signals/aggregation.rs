//! Vote aggregation and confirmed-decision queries.

use crate::models::bars::SeriesStore;
use crate::models::rule::{Action, Rule};
use crate::models::signal::{AggregatedDecision, RuleSignals, RuleVote, SignalEvent};
use tracing::info;

/// Tally per-rule votes into per-date decisions. Buy and sell are
/// confirmed independently against `min_confirm`; both may hold on the
/// same date and no arbitration happens here.
pub fn aggregate(
    store: &SeriesStore,
    signals: &[RuleSignals],
    min_confirm: usize,
) -> Vec<AggregatedDecision> {
    let mut decisions = Vec::with_capacity(store.len());

    for (i, bar) in store.bars().iter().enumerate() {
        let buy_count = signals
            .iter()
            .filter(|s| s.votes.get(i).copied().unwrap_or(0) > 0)
            .count();
        let sell_count = signals
            .iter()
            .filter(|s| s.votes.get(i).copied().unwrap_or(0) < 0)
            .count();

        decisions.push(AggregatedDecision {
            date: bar.date,
            price: bar.close,
            buy_count,
            sell_count,
            buy: buy_count >= min_confirm,
            sell: sell_count >= min_confirm,
        });
    }

    let confirmed_buys = decisions.iter().filter(|d| d.buy).count();
    let confirmed_sells = decisions.iter().filter(|d| d.sell).count();
    info!(confirmed_buys, confirmed_sells, "aggregated rule votes");

    decisions
}

/// Most recent confirmed decision of the requested kind within the
/// trailing `lookback` dates, with that date's non-zero rule votes
/// sorted by strength for reporting.
pub fn latest_event(
    decisions: &[AggregatedDecision],
    rules: &[Rule],
    signals: &[RuleSignals],
    action: Action,
    lookback: usize,
) -> Option<SignalEvent> {
    let start = decisions.len().saturating_sub(lookback);

    for i in (start..decisions.len()).rev() {
        let decision = &decisions[i];
        let (confirmed, confirmations) = match action {
            Action::Buy => (decision.buy, decision.buy_count),
            Action::Sell => (decision.sell, decision.sell_count),
        };
        if !confirmed {
            continue;
        }

        let mut votes: Vec<RuleVote> = signals
            .iter()
            .filter_map(|s| {
                let signal = s.votes.get(i).copied().unwrap_or(0);
                if signal == 0 {
                    return None;
                }
                let note = rules
                    .iter()
                    .find(|r| r.name == s.rule)
                    .and_then(|r| r.description.clone());
                Some(RuleVote {
                    rule: s.rule.clone(),
                    signal,
                    strength: s.strength,
                    note,
                })
            })
            .collect();
        votes.sort_by_key(|v| v.strength);

        return Some(SignalEvent {
            date: decision.date,
            price: decision.price,
            confirmations,
            votes,
        });
    }

    None
}
