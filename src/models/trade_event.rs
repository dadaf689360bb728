use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const DAY_FORMAT: &str = "%Y-%m-%d";

/// A raw journal row as handed over by the trade store. Either field may be
/// missing or malformed; consumers decide how each one degrades.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeEvent {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub pnl: Option<f64>,
}

impl TradeEvent {
    pub fn new(date: &str, pnl: f64) -> Self {
        Self {
            date: Some(date.to_string()),
            pnl: Some(pnl),
        }
    }

    /// Calendar day of the event, if the date field parses as YYYY-MM-DD.
    pub fn day(&self) -> Option<NaiveDate> {
        self.date
            .as_deref()
            .and_then(|s| NaiveDate::parse_from_str(s.trim(), DAY_FORMAT).ok())
    }

    /// PnL coerced to 0.0 when missing or non-finite.
    pub fn pnl_or_zero(&self) -> f64 {
        match self.pnl {
            Some(p) if p.is_finite() => p,
            _ => 0.0,
        }
    }
}
