pub mod day_total;
pub mod trade_event;

pub use day_total::{DailyAggregate, DayTotal};
pub use trade_event::TradeEvent;
