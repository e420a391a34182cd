//! Rule data model for the signal detector.

use serde::{Deserialize, Serialize};

/// One side of a tracked relation: a named indicator series or a fixed
/// level (e.g. RSI vs. 30).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operand {
    Indicator(String),
    Constant(f64),
}

/// Direction a gated pattern must cross in before it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Sign the raw cross detector emits for this direction.
    pub fn sign(&self) -> i8 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }
}

/// Vote a rule casts when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Action {
    Buy,
    Sell,
}

impl Action {
    pub fn vote(&self) -> i8 {
        match self {
            Action::Buy => 1,
            Action::Sell => -1,
        }
    }
}

/// Reporting priority tag. Does not affect confirmation counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Strength {
    Strong,
    Medium,
    Weak,
}

/// The three detection patterns, evaluated by one generic evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Pattern {
    /// Symmetric two-point cross: an up-cross casts the rule's action,
    /// a down-cross casts the opposite (golden cross / death cross).
    Crossover { fast: Operand, slow: Operand },
    /// Direction-gated two-point cross; `reference` is typically a
    /// constant level but may be another series.
    Threshold {
        input: Operand,
        reference: Operand,
        direction: Direction,
    },
    /// Direction-gated three-point bounce: the relation must have held
    /// on both prior points before flipping at the evaluated date.
    Bounce {
        input: Operand,
        reference: Operand,
        direction: Direction,
    },
}

impl Pattern {
    /// Indicator names this pattern reads.
    pub fn references(&self) -> Vec<&str> {
        let operands = match self {
            Pattern::Crossover { fast, slow } => [fast, slow],
            Pattern::Threshold {
                input, reference, ..
            } => [input, reference],
            Pattern::Bounce {
                input, reference, ..
            } => [input, reference],
        };
        operands
            .into_iter()
            .filter_map(|op| match op {
                Operand::Indicator(name) => Some(name.as_str()),
                Operand::Constant(_) => None,
            })
            .collect()
    }
}

/// A named, immutable signal rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    pub pattern: Pattern,
    pub action: Action,
    pub strength: Strength,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Rule {
    pub fn new(name: &str, pattern: Pattern, action: Action, strength: Strength) -> Self {
        Self {
            name: name.to_string(),
            pattern,
            action,
            strength,
            description: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}
