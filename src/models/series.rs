//! Derived series and the named indicator set.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A derived series aligned 1:1 with its source bars. `None` marks a
/// warm-up entry with no defined value; it is distinct from zero and
/// always evaluates to "no signal" downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    values: Vec<Option<f64>>,
}

impl Series {
    pub fn new(values: Vec<Option<f64>>) -> Self {
        Self { values }
    }

    /// A series with every entry defined (no warm-up gap).
    pub fn from_defined(values: Vec<f64>) -> Self {
        Self {
            values: values.into_iter().map(Some).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `index`; `None` for warm-up entries and out-of-range
    /// indices alike.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten()
    }

    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Value at the final index, if defined.
    pub fn latest(&self) -> Option<f64> {
        self.values.last().copied().flatten()
    }
}

/// Named indicator series sharing one date index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSet {
    dates: Vec<NaiveDate>,
    series: BTreeMap<String, Series>,
}

impl IndicatorSet {
    pub fn new(dates: Vec<NaiveDate>) -> Self {
        Self {
            dates,
            series: BTreeMap::new(),
        }
    }

    /// Insert a series under `name`. Series are expected to share the
    /// date index length; a mismatch only shortens what `value_at` can
    /// resolve, it never panics.
    pub fn insert(&mut self, name: &str, series: Series) {
        self.series.insert(name.to_string(), series);
    }

    pub fn get(&self, name: &str) -> Option<&Series> {
        self.series.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.series.contains_key(name)
    }

    /// Value of `name` at `index`, `None` when the series is absent or
    /// undefined there.
    pub fn value_at(&self, name: &str, index: usize) -> Option<f64> {
        self.series.get(name).and_then(|s| s.get(index))
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(|k| k.as_str())
    }
}
