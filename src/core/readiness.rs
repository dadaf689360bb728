use std::collections::HashMap;

/// Checklist share of the adherence score.
const CHECKLIST_BAND: f64 = 70.0;
/// Discipline share of the adherence score.
const DISCIPLINE_BAND: f64 = 30.0;
/// Points lost per trade over the daily limit.
const OVER_LIMIT_PENALTY: f64 = 10.0;

/// Plan-checklist completion as a 0-100 percentage.
///
/// An empty checklist scores 0. Rounding is half-away-from-zero
/// (`f64::round`), so 1 of 3 gives 33 and 1 of 8 gives 13.
pub fn checklist_score(checklist: &HashMap<String, bool>) -> u8 {
    if checklist.is_empty() {
        return 0;
    }
    let done = checklist.values().filter(|&&v| v).count();
    (done as f64 / checklist.len() as f64 * 100.0).round() as u8
}

/// Blended adherence score: checklist completion scaled into a 0-70 band,
/// plus a 0-30 discipline band that loses a fixed penalty per trade over
/// `max_trades`, floored at 0.
pub fn adherence_score(
    checklist: &HashMap<String, bool>,
    trades_today: u32,
    max_trades: u32,
) -> u8 {
    let base = if checklist.is_empty() {
        0.0
    } else {
        let done = checklist.values().filter(|&&v| v).count();
        done as f64 / checklist.len() as f64 * CHECKLIST_BAND
    };

    let over = trades_today.saturating_sub(max_trades) as f64;
    let discipline = (DISCIPLINE_BAND - over * OVER_LIMIT_PENALTY).max(0.0);

    (base + discipline).round() as u8
}
