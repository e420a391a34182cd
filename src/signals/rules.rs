//! Generic rule evaluator over an indicator set.

use crate::models::rule::{Operand, Pattern, Rule};
use crate::models::series::IndicatorSet;
use crate::models::signal::RuleSignals;
use crate::signals::cross::{detect_bounce, detect_cross};
use tracing::warn;

fn operand_value(operand: &Operand, set: &IndicatorSet, index: usize) -> Option<f64> {
    match operand {
        Operand::Indicator(name) => set.value_at(name, index),
        Operand::Constant(level) => Some(*level),
    }
}

/// Evaluate one rule over every date, producing a -1/0/+1 vote per
/// date. A rule whose named series is missing from the set contributes
/// no vote anywhere; other rules are unaffected.
pub fn evaluate_rule(rule: &Rule, set: &IndicatorSet) -> RuleSignals {
    let n = set.len();
    let mut votes = vec![0i8; n];

    let missing: Vec<&str> = rule
        .pattern
        .references()
        .into_iter()
        .filter(|name| !set.contains(name))
        .collect();
    if !missing.is_empty() {
        warn!(rule = %rule.name, series = ?missing, "rule references missing series, skipping");
        return RuleSignals {
            rule: rule.name.clone(),
            strength: rule.strength,
            votes,
        };
    }

    match &rule.pattern {
        Pattern::Crossover { fast, slow } => {
            for i in 1..n {
                let raw = detect_cross(
                    operand_value(fast, set, i - 1),
                    operand_value(slow, set, i - 1),
                    operand_value(fast, set, i),
                    operand_value(slow, set, i),
                );
                // Up-cross casts the rule's action, down-cross the opposite.
                votes[i] = raw * rule.action.vote();
            }
        }
        Pattern::Threshold {
            input,
            reference,
            direction,
        } => {
            for i in 1..n {
                let raw = detect_cross(
                    operand_value(input, set, i - 1),
                    operand_value(reference, set, i - 1),
                    operand_value(input, set, i),
                    operand_value(reference, set, i),
                );
                if raw == direction.sign() {
                    votes[i] = rule.action.vote();
                }
            }
        }
        Pattern::Bounce {
            input,
            reference,
            direction,
        } => {
            for i in 2..n {
                let raw = detect_bounce(
                    operand_value(input, set, i - 2),
                    operand_value(reference, set, i - 2),
                    operand_value(input, set, i - 1),
                    operand_value(reference, set, i - 1),
                    operand_value(input, set, i),
                    operand_value(reference, set, i),
                );
                if raw == direction.sign() {
                    votes[i] = rule.action.vote();
                }
            }
        }
    }

    RuleSignals {
        rule: rule.name.clone(),
        strength: rule.strength,
        votes,
    }
}

/// Evaluate an ordered rule list over the set.
pub fn evaluate_rules(rules: &[Rule], set: &IndicatorSet) -> Vec<RuleSignals> {
    rules.iter().map(|rule| evaluate_rule(rule, set)).collect()
}
