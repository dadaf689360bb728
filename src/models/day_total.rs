use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Net result for one calendar day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DayTotal {
    pub net_pnl: f64,
    pub count: usize,
}

/// Day-keyed totals, ordered by date so window lookups can use range scans.
pub type DailyAggregate = BTreeMap<NaiveDate, DayTotal>;
