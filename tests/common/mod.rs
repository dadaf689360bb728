use std::collections::HashMap;

use journal_core::config::Config;
use journal_core::core::eligibility::PayoutMode;
use journal_core::models::TradeEvent;

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

/// Config with fixed thresholds and a per-process temp snapshot path.
pub fn test_config(tag: &str) -> Config {
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
            .join(format!("journal_core_it_{}_{}", tag, std::process::id()))
            .join("snapshot.json")
            .to_string_lossy()
            .to_string(),
        refresh_interval_secs: 60,
        log_level: "ERROR".to_string(),
    }
}
