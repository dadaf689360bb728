mod common;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use journal_core::core::clock::{Clock, FixedClock};
use journal_core::core::eligibility::PayoutMode;
use journal_core::persist::{AutosavePump, JsonFileSink, SaveError, SaveSink, SaveState};
use journal_core::report::DashboardSnapshot;

use common::{make_checklist, make_events, test_config};

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Sink that records every payload it is asked to persist.
struct RecordingSink {
    calls: Mutex<Vec<Value>>,
}

#[async_trait]
impl SaveSink for RecordingSink {
    async fn persist(&self, payload: &Value) -> Result<(), SaveError> {
        self.calls.lock().unwrap().push(payload.clone());
        Ok(())
    }
}

#[test]
fn month_of_trading_in_cycle_mode() {
    let mut cfg = test_config("cycle");
    cfg.last_payout_date = Some(day("2024-03-05"));
    cfg.required_winning_days = 5;

    // Mixed month: wins, a flat day, a loss, multi-trade days.
    let events = make_events(&[
        ("2024-03-04", 200.0), // before the payout cut, must not count
        ("2024-03-05", 150.0), // payout day itself, must not count
        ("2024-03-06", 80.0),
        ("2024-03-07", -40.0),
        ("2024-03-08", 60.0),
        ("2024-03-11", 0.0),
        ("2024-03-12", 30.0),
        ("2024-03-12", 45.0),
        ("2024-03-13", 25.0),
        ("2024-03-14", 10.0),
    ]);
    let checklist = make_checklist(&[("bias", true), ("levels", true), ("news", true)]);
    let clock = FixedClock(day("2024-03-14"));

    let snapshot = DashboardSnapshot::build(&events, &checklist, &cfg, clock.today());

    // Wins since 2024-03-06: 06, 08, 12, 13, 14.
    assert_eq!(snapshot.eligibility.window_start, Some(day("2024-03-06")));
    assert_eq!(snapshot.eligibility.winning_days, 5);
    assert!(snapshot.eligibility.eligible);

    // Streak walks back from the 14th: 14, 13, 12 win; 11 neutral; 8 win;
    // 7 is a closed loss and breaks.
    assert_eq!(snapshot.current_streak, 4);

    assert_eq!(snapshot.readiness, 100);
    assert_eq!(snapshot.adherence, 100);
    assert_eq!(snapshot.trading_days, 10 - 1); // two trades share the 12th
}

#[test]
fn rolling_mode_forgets_old_wins() {
    let mut cfg = test_config("rolling");
    cfg.payout_mode = PayoutMode::Rolling;
    cfg.window_days = 7;
    cfg.required_winning_days = 3;
    // Rolling never resets on payout.
    cfg.last_payout_date = Some(day("2024-03-13"));

    let events = make_events(&[
        ("2024-02-01", 500.0), // far outside the trailing week
        ("2024-03-08", 40.0),  // window start, inclusive
        ("2024-03-10", 55.0),
        ("2024-03-12", -20.0),
        ("2024-03-14", 70.0),
    ]);
    let clock = FixedClock(day("2024-03-14"));

    let snapshot =
        DashboardSnapshot::build(&events, &make_checklist(&[]), &cfg, clock.today());

    assert_eq!(snapshot.eligibility.window_start, Some(day("2024-03-08")));
    assert_eq!(snapshot.eligibility.winning_days, 3);
    assert!(snapshot.eligibility.eligible);
}

#[tokio::test]
async fn snapshot_flows_through_file_sink() {
    let cfg = test_config("file_sink");
    let events = make_events(&[("2024-03-11", 120.0), ("2024-03-14", -15.0)]);
    let checklist = make_checklist(&[("bias", true), ("news", false)]);

    let snapshot =
        DashboardSnapshot::build(&events, &checklist, &cfg, day("2024-03-14"));

    let sink = Arc::new(JsonFileSink::new(&cfg.snapshot_file));
    let pump = AutosavePump::spawn(sink, Duration::from_millis(cfg.autosave_delay_ms));

    pump.schedule(snapshot.payload());
    let state = pump.flush().await;
    assert_eq!(state, SaveState::Saved);

    let written: Value =
        serde_json::from_str(&std::fs::read_to_string(&cfg.snapshot_file).unwrap()).unwrap();
    assert_eq!(written, snapshot.payload());
    assert_eq!(written["current_streak"], 1);
    assert_eq!(written["as_of"], "2024-03-14");

    let _ = std::fs::remove_dir_all(
        std::path::Path::new(&cfg.snapshot_file).parent().unwrap(),
    );
}

#[tokio::test(start_paused = true)]
async fn unchanged_journal_coalesces_saves() {
    let cfg = test_config("coalesce");
    let events = make_events(&[("2024-03-11", 120.0)]);
    let checklist = make_checklist(&[("bias", true)]);
    let today = day("2024-03-14");

    let sink = Arc::new(RecordingSink {
        calls: Mutex::new(Vec::new()),
    });
    let pump = AutosavePump::spawn(sink.clone(), Duration::from_millis(1000));

    // Same journal rebuilt three times, as a refresh loop would.
    for _ in 0..3 {
        let snapshot = DashboardSnapshot::build(&events, &checklist, &cfg, today);
        pump.schedule(snapshot.payload());
    }
    tokio::time::sleep(Duration::from_millis(2500)).await;

    assert_eq!(sink.calls.lock().unwrap().len(), 1);

    // A genuinely new event produces a second save.
    let more = make_events(&[("2024-03-11", 120.0), ("2024-03-14", 30.0)]);
    let snapshot = DashboardSnapshot::build(&more, &checklist, &cfg, today);
    pump.schedule(snapshot.payload());
    tokio::time::sleep(Duration::from_millis(2500)).await;

    assert_eq!(sink.calls.lock().unwrap().len(), 2);
    assert_eq!(pump.state(), SaveState::Saved);
}
