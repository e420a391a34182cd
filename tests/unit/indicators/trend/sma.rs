//! Unit tests for the simple moving average

use approx::assert_relative_eq;
use indextrix::indicators::trend::sma;
use indextrix::EngineError;

#[test]
fn sma_matches_exact_window_mean() {
    let values = [2.0, 4.0, 6.0, 8.0, 10.0, 12.0];
    let series = sma(&values, 4).unwrap();

    for i in 3..values.len() {
        let mean = values[i - 3..=i].iter().sum::<f64>() / 4.0;
        assert_relative_eq!(series.get(i).unwrap(), mean);
    }
}

#[test]
fn sma_warm_up_entries_are_undefined() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    let series = sma(&values, 3).unwrap();
    assert_eq!(series.get(0), None);
    assert_eq!(series.get(1), None);
    assert!(series.get(2).is_some());
}

#[test]
fn sma_five_point_scenario() {
    let values = [100.0, 99.0, 98.0, 101.0, 102.0];
    let series = sma(&values, 3).unwrap();

    assert_eq!(series.get(0), None);
    assert_eq!(series.get(1), None);
    assert_relative_eq!(series.get(2).unwrap(), 99.0);
    assert_relative_eq!(series.get(3).unwrap(), 99.0 + 1.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(series.get(4).unwrap(), 100.0 + 1.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn sma_window_zero_is_invalid() {
    assert!(matches!(
        sma(&[1.0, 2.0], 0),
        Err(EngineError::InvalidConfiguration(_))
    ));
}

#[test]
fn sma_window_longer_than_input_is_all_undefined() {
    let series = sma(&[1.0, 2.0], 5).unwrap();
    assert_eq!(series.len(), 2);
    assert!(series.values().iter().all(|v| v.is_none()));
}

#[test]
fn sma_window_one_is_identity() {
    let values = [3.0, 1.0, 4.0];
    let series = sma(&values, 1).unwrap();
    for (i, &v) in values.iter().enumerate() {
        assert_relative_eq!(series.get(i).unwrap(), v);
    }
}
