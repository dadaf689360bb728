use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

/// Source of "today" for anything that needs a reference day. The engines
/// themselves take dates as parameters; only callers consult a clock.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Resolves the current calendar day in the journal's exchange timezone.
/// A UTC wall clock would roll the trading day over at the wrong hour for
/// US-session journals.
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Parse an IANA timezone name, falling back to America/New_York.
    pub fn from_name(name: &str) -> Self {
        let tz = name.parse::<Tz>().unwrap_or(chrono_tz::America::New_York);
        Self { tz }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.tz).date_naive()
    }
}

/// Pinned clock for tests and replays.
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
