use chrono::{Duration, NaiveDate};
use indextrix::models::signal::SignalEvent;
use indextrix::{Bar, EngineConfig, SeriesStore, SignalEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    indextrix::logging::init_logging();

    let bars = demo_bars(300);
    let vix = demo_vix(300);
    let store = SeriesStore::new(bars)?.with_aux("VIX", vix)?;

    let engine = SignalEngine::new(EngineConfig::default())?;
    let report = engine.evaluate(&store)?;

    println!("Market status:");
    println!("{}", serde_json::to_string_pretty(&report.status)?);
    println!();

    match &report.latest_buy {
        Some(event) => print_event("buy", event),
        None => println!("No confirmed buy signal in the lookback window"),
    }
    match &report.latest_sell {
        Some(event) => print_event("sell", event),
        None => println!("No confirmed sell signal in the lookback window"),
    }

    Ok(())
}

fn print_event(kind: &str, event: &SignalEvent) {
    println!(
        "Latest {} signal on {} at {:.2} ({} confirmations):",
        kind, event.date, event.price, event.confirmations
    );
    for vote in &event.votes {
        println!(
            "  {:+} {} [{:?}] {}",
            vote.signal,
            vote.rule,
            vote.strength,
            vote.note.as_deref().unwrap_or("")
        );
    }
}

/// A gentle uptrend with a pullback in the middle, enough history for
/// the 200-day MA.
fn demo_bars(count: usize) -> Vec<Bar> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 2).expect("valid date");
    (0..count)
        .map(|i| {
            let t = i as f64;
            let trend = 4000.0 + t * 2.0;
            let dip = if (150..210).contains(&i) { -60.0 } else { 0.0 };
            let wobble = (t / 7.0).sin() * 25.0;
            let close = trend + dip + wobble;
            Bar::new(
                start + Duration::days(i as i64),
                close - 5.0,
                close + 12.0,
                close - 14.0,
                close,
                3.5e9 + (t * 1.0e6),
            )
        })
        .collect()
}

fn demo_vix(count: usize) -> Vec<Option<f64>> {
    (0..count)
        .map(|i| {
            let base = if (150..210).contains(&i) { 33.0 } else { 16.0 };
            Some(base + ((i as f64) / 5.0).cos() * 2.0)
        })
        .collect()
}
