use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::eligibility::PayoutMode;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Journal
    pub journal_file: String,
    pub checklist_file: String,
    pub timezone: String,

    // Payout eligibility
    pub payout_mode: PayoutMode,
    pub window_days: u32,
    pub required_winning_days: u32,
    pub last_payout_date: Option<NaiveDate>,

    // Discipline
    pub max_trades_per_day: u32,

    // Autosave
    pub autosave_delay_ms: u64,
    pub snapshot_file: String,
    pub refresh_interval_secs: u64,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        Config {
            journal_file: env("JOURNAL_FILE", "journal.json"),
            checklist_file: env("CHECKLIST_FILE", "checklist.json"),
            timezone: env("JOURNAL_TZ", "America/New_York"),
            payout_mode: PayoutMode::from_name(&env("PAYOUT_MODE", "cycle")),
            window_days: env("PAYOUT_WINDOW_DAYS", "14").parse().unwrap_or(14),
            required_winning_days: env("REQUIRED_WINNING_DAYS", "5").parse().unwrap_or(5),
            last_payout_date: NaiveDate::parse_from_str(
                &env("LAST_PAYOUT_DATE", ""),
                "%Y-%m-%d",
            )
            .ok(),
            max_trades_per_day: env("MAX_TRADES_PER_DAY", "5").parse().unwrap_or(5),
            autosave_delay_ms: env("AUTOSAVE_DELAY_MS", "1000").parse().unwrap_or(1000),
            snapshot_file: env("SNAPSHOT_FILE", "logs/snapshot.json"),
            refresh_interval_secs: env("REFRESH_INTERVAL_SECS", "60").parse().unwrap_or(60),
            log_level: env("LOG_LEVEL", "INFO"),
        }
    }
}
