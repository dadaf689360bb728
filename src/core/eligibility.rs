use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{DailyAggregate, DayTotal};

/// How the payout counting window is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoutMode {
    /// Window restarts the day after the last payout and grows until the next.
    Cycle,
    /// Fixed-length trailing window; payouts never reset it.
    Rolling,
}

impl PayoutMode {
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "rolling" => PayoutMode::Rolling,
            _ => PayoutMode::Cycle,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EligibilityWindow {
    pub mode: PayoutMode,
    /// Inclusive lower bound; `None` means no payout yet and no lower bound.
    pub window_start: Option<NaiveDate>,
    /// Inclusive upper bound, always the caller's "today".
    pub window_end: NaiveDate,
    pub winning_days: u32,
    pub required_winning_days: u32,
    pub eligible: bool,
}

/// Determine payout eligibility over `[window_start, today]`.
///
/// Only days present in the aggregate are inspected, so the cost scales with
/// recorded trading days rather than the width of the window. A last payout
/// dated after `today` (clock skew, bad data) produces zero winning days
/// instead of a panic.
pub fn evaluate(
    agg: &DailyAggregate,
    last_payout: Option<NaiveDate>,
    mode: PayoutMode,
    window_days: u32,
    required_winning_days: u32,
    today: NaiveDate,
) -> EligibilityWindow {
    let window_start = match mode {
        PayoutMode::Cycle => last_payout.and_then(|d| d.succ_opt()),
        PayoutMode::Rolling => {
            today.checked_sub_days(Days::new(window_days.saturating_sub(1) as u64))
        }
    };

    let winning_days = match window_start {
        Some(start) if start > today => 0,
        Some(start) => count_winning(agg.range(start..=today)),
        None => count_winning(agg.range(..=today)),
    };

    EligibilityWindow {
        mode,
        window_start,
        window_end: today,
        winning_days,
        required_winning_days,
        eligible: winning_days >= required_winning_days,
    }
}

fn count_winning<'a, I>(days: I) -> u32
where
    I: Iterator<Item = (&'a NaiveDate, &'a DayTotal)>,
{
    days.filter(|(_, total)| total.net_pnl > 0.0).count() as u32
}
