//! Daily bars and the read-only series store.

use crate::errors::EngineError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One trading day of OHLCV data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Date-ordered bar history plus optional auxiliary series (e.g. a
/// volatility index) aligned 1:1 with the bars. Read-only after
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesStore {
    bars: Vec<Bar>,
    aux: BTreeMap<String, Vec<Option<f64>>>,
}

impl SeriesStore {
    /// Build a store from bars, rejecting duplicate or out-of-order dates.
    pub fn new(bars: Vec<Bar>) -> Result<Self, EngineError> {
        for pair in bars.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(EngineError::UnorderedDates(pair[1].date));
            }
        }
        Ok(Self {
            bars,
            aux: BTreeMap::new(),
        })
    }

    /// Attach an auxiliary series aligned with the bars. Individual
    /// entries may be missing; a missing entry never produces a signal.
    pub fn with_aux(mut self, name: &str, values: Vec<Option<f64>>) -> Result<Self, EngineError> {
        if values.len() != self.bars.len() {
            return Err(EngineError::InvalidConfiguration(format!(
                "auxiliary series '{}' has {} entries for {} bars",
                name,
                values.len(),
                self.bars.len()
            )));
        }
        self.aux.insert(name.to_string(), values);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|b| b.date).collect()
    }

    /// Close-price sub-series, in date order.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn aux(&self, name: &str) -> Option<&[Option<f64>]> {
        self.aux.get(name).map(|v| v.as_slice())
    }

    pub fn aux_names(&self) -> impl Iterator<Item = &str> {
        self.aux.keys().map(|k| k.as_str())
    }

    /// The most recent `n` bars. Callers asking for more history than
    /// exists get a typed error, never a slice panic.
    pub fn tail(&self, n: usize) -> Result<&[Bar], EngineError> {
        if n > self.bars.len() {
            return Err(EngineError::InsufficientData {
                required: n,
                available: self.bars.len(),
            });
        }
        Ok(&self.bars[self.bars.len() - n..])
    }
}
