use chrono::NaiveDate;

use crate::models::DailyAggregate;

/// Hard cap on the backward walk, roughly ten years of days.
const MAX_WALK_DAYS: u32 = 3650;

/// Count consecutive winning days walking backward from `anchor`.
///
/// A day with net PnL > 0 extends the streak. A day with no trades or a net
/// of exactly zero is neutral: skipped without counting or breaking. A losing
/// day ends the walk only once it is closed — any day before the anchor, or
/// the anchor itself when `anchor_finalized` is set. A losing anchor that is
/// still mid-session is treated as neutral so an open red day never snaps the
/// streak prematurely.
///
/// The walk never moves earlier than `earliest_known`, the caller's lower
/// bound on recorded data.
pub fn winning_streak(
    agg: &DailyAggregate,
    anchor: NaiveDate,
    anchor_finalized: bool,
    earliest_known: NaiveDate,
) -> u32 {
    let mut count = 0;
    let mut day = anchor;

    for _ in 0..MAX_WALK_DAYS {
        if day < earliest_known {
            break;
        }

        match agg.get(&day) {
            Some(total) if total.net_pnl > 0.0 => count += 1,
            Some(total) if total.net_pnl < 0.0 => {
                let closed = day != anchor || anchor_finalized;
                if closed {
                    break;
                }
                // open losing anchor: neutral, keep walking
            }
            _ => {} // neutral: no trades, or net exactly zero
        }

        day = match day.pred_opt() {
            Some(prev) => prev,
            None => break,
        };
    }

    count
}
