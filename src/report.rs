use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::config::Config;
use crate::core::eligibility::{self, EligibilityWindow};
use crate::core::{aggregator, readiness, streak};
use crate::models::{DailyAggregate, TradeEvent};

/// Everything the dashboard needs for one account, computed in a single
/// place. Also the payload the autosave pump persists.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub as_of: NaiveDate,
    pub trading_days: usize,
    pub total_pnl: f64,
    pub current_streak: u32,
    pub eligibility: EligibilityWindow,
    pub readiness: u8,
    pub adherence: u8,
    pub daily: DailyAggregate,
}

impl DashboardSnapshot {
    /// Build a snapshot for `today`. The streak treats today as an open,
    /// unfinalized day so a red session in progress never breaks it.
    pub fn build(
        events: &[TradeEvent],
        checklist: &HashMap<String, bool>,
        cfg: &Config,
        today: NaiveDate,
    ) -> Self {
        let daily = aggregator::aggregate(events);

        let earliest_known = daily.keys().next().copied().unwrap_or(today);
        let current_streak = streak::winning_streak(&daily, today, false, earliest_known);

        let eligibility = eligibility::evaluate(
            &daily,
            cfg.last_payout_date,
            cfg.payout_mode,
            cfg.window_days,
            cfg.required_winning_days,
            today,
        );

        let trades_today = daily.get(&today).map(|t| t.count as u32).unwrap_or(0);
        let readiness = readiness::checklist_score(checklist);
        let adherence = readiness::adherence_score(checklist, trades_today, cfg.max_trades_per_day);

        let total_pnl = daily.values().map(|t| t.net_pnl).sum();

        DashboardSnapshot {
            as_of: today,
            trading_days: daily.len(),
            total_pnl,
            current_streak,
            eligibility,
            readiness,
            adherence,
            daily,
        }
    }

    /// Snapshot as a JSON payload for the autosave pump.
    pub fn payload(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn print_summary(&self) {
        println!("\n{}", "=".repeat(60));
        println!("  JOURNAL SNAPSHOT — {}", self.as_of);
        println!("{}", "=".repeat(60));
        println!("  PERFORMANCE");
        println!("  ───────────────────────────────────");
        println!("  Trading days:  {}", self.trading_days);
        println!("  Net PnL:       ${:+.2}", self.total_pnl);
        println!("  Win streak:    {} day(s)", self.current_streak);
        println!();
        println!("  PAYOUT ELIGIBILITY");
        println!("  ───────────────────────────────────");
        println!("  Mode:          {:?}", self.eligibility.mode);
        match self.eligibility.window_start {
            Some(start) => println!("  Window:        {} to {}", start, self.eligibility.window_end),
            None => println!("  Window:        all history to {}", self.eligibility.window_end),
        }
        println!(
            "  Winning days:  {} / {}",
            self.eligibility.winning_days, self.eligibility.required_winning_days
        );
        println!(
            "  Eligible:      {}",
            if self.eligibility.eligible { "YES" } else { "no" }
        );
        println!();
        println!("  DISCIPLINE");
        println!("  ───────────────────────────────────");
        println!("  Readiness:     {}%", self.readiness);
        println!("  Adherence:     {}%", self.adherence);
        println!("{}", "=".repeat(60));
    }
}
