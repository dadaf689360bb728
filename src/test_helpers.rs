use std::collections::HashMap;

use crate::config::Config;
use crate::core::eligibility::PayoutMode;
use crate::models::TradeEvent;

/// Create journal rows from (date, pnl) pairs.
pub fn make_events(rows: &[(&str, f64)]) -> Vec<TradeEvent> {
    rows.iter().map(|&(d, p)| TradeEvent::new(d, p)).collect()
}

pub fn make_checklist(items: &[(&str, bool)]) -> HashMap<String, bool> {
    items
        .iter()
        .map(|&(label, done)| (label.to_string(), done))
        .collect()
}

/// A Config suitable for testing — fixed thresholds, temp snapshot path.
pub fn default_test_config() -> Config {
    Config {
        journal_file: "journal.json".to_string(),
        checklist_file: "checklist.json".to_string(),
        timezone: "America/New_York".to_string(),
        payout_mode: PayoutMode::Cycle,
        window_days: 14,
        required_winning_days: 5,
        last_payout_date: None,
        max_trades_per_day: 5,
        autosave_delay_ms: 1000,
        snapshot_file: std::env::temp_dir()
            .join(format!("journal_core_test_{}", std::process::id()))
            .join("snapshot.json")
            .to_string_lossy()
            .to_string(),
        refresh_interval_secs: 60,
        log_level: "ERROR".to_string(),
    }
}
