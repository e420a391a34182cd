//! Unit tests for the series store

use chrono::NaiveDate;
use indextrix::{Bar, EngineError, SeriesStore};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

fn make_bars(prices: &[f64]) -> Vec<Bar> {
    prices
        .iter()
        .enumerate()
        .map(|(i, &p)| Bar::new(date(i as u32 + 1), p, p + 1.0, p - 1.0, p, 1000.0))
        .collect()
}

#[test]
fn store_accepts_increasing_dates() {
    let store = SeriesStore::new(make_bars(&[100.0, 101.0, 102.0])).unwrap();
    assert_eq!(store.len(), 3);
    assert_eq!(store.closes(), vec![100.0, 101.0, 102.0]);
}

#[test]
fn store_rejects_duplicate_dates() {
    let mut bars = make_bars(&[100.0, 101.0]);
    bars[1].date = bars[0].date;
    assert!(matches!(
        SeriesStore::new(bars),
        Err(EngineError::UnorderedDates(_))
    ));
}

#[test]
fn store_rejects_out_of_order_dates() {
    let mut bars = make_bars(&[100.0, 101.0, 102.0]);
    bars.swap(0, 2);
    assert!(matches!(
        SeriesStore::new(bars),
        Err(EngineError::UnorderedDates(_))
    ));
}

#[test]
fn tail_returns_most_recent_bars() {
    let store = SeriesStore::new(make_bars(&[100.0, 101.0, 102.0, 103.0])).unwrap();
    let tail = store.tail(2).unwrap();
    assert_eq!(tail.len(), 2);
    assert_eq!(tail[0].close, 102.0);
    assert_eq!(tail[1].close, 103.0);
}

#[test]
fn tail_beyond_history_is_typed_error() {
    let store = SeriesStore::new(make_bars(&[100.0, 101.0])).unwrap();
    assert_eq!(
        store.tail(5),
        Err(EngineError::InsufficientData {
            required: 5,
            available: 2
        })
    );
}

#[test]
fn aux_series_must_align_with_bars() {
    let store = SeriesStore::new(make_bars(&[100.0, 101.0, 102.0])).unwrap();
    let result = store.with_aux("VIX", vec![Some(15.0), Some(16.0)]);
    assert!(matches!(
        result,
        Err(EngineError::InvalidConfiguration(_))
    ));
}

#[test]
fn aux_series_retrievable_by_name() {
    let store = SeriesStore::new(make_bars(&[100.0, 101.0]))
        .unwrap()
        .with_aux("VIX", vec![Some(15.0), None])
        .unwrap();
    assert_eq!(store.aux("VIX"), Some([Some(15.0), None].as_slice()));
    assert!(store.aux("GVZ").is_none());
    assert_eq!(store.aux_names().collect::<Vec<_>>(), vec!["VIX"]);
}

#[test]
fn empty_store_is_allowed() {
    let store = SeriesStore::new(Vec::new()).unwrap();
    assert!(store.is_empty());
    assert!(store.tail(1).is_err());
}
