use crate::models::{DailyAggregate, DayTotal, TradeEvent};

/// Reduce raw journal rows into per-day net totals and trade counts.
///
/// Rows without a parseable date cannot be assigned a day and are skipped.
/// Rows with a missing or non-finite PnL still count as a trade but
/// contribute 0.0 to the day's net. A bad row never aborts the rest.
pub fn aggregate(events: &[TradeEvent]) -> DailyAggregate {
    let mut days = DailyAggregate::new();

    for event in events {
        let day = match event.day() {
            Some(d) => d,
            None => continue,
        };
        let entry = days.entry(day).or_insert_with(DayTotal::default);
        entry.net_pnl += event.pnl_or_zero();
        entry.count += 1;
    }

    days
}
