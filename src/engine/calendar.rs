use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::model::game_state::TimestampMs;

/// Calendar day (local time zone) that an epoch-ms timestamp falls on.
/// Allowance and streak boundaries are midnight local time, not rolling
/// 24-hour windows.
pub fn local_day(ts: TimestampMs) -> NaiveDate {
    DateTime::<Utc>::from_timestamp_millis(ts)
        .unwrap_or_default()
        .with_timezone(&Local)
        .date_naive()
}

/// Epoch ms of local midnight on the day `ts` falls on. Falls back to `ts`
/// itself if the zone has no midnight that day (DST shifts).
pub fn day_start_ms(ts: TimestampMs) -> TimestampMs {
    local_day(ts)
        .and_hms_opt(0, 0, 0)
        .and_then(|naive| naive.and_local_timezone(Local).earliest())
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(ts)
}

/// True when `earlier` falls on a calendar day strictly before `later`.
pub fn is_prior_day(earlier: TimestampMs, later: TimestampMs) -> bool {
    local_day(earlier) < local_day(later)
}

pub fn is_same_day(a: TimestampMs, b: TimestampMs) -> bool {
    local_day(a) == local_day(b)
}

/// True when `earlier` falls on exactly the day before `later`.
pub fn was_yesterday(earlier: TimestampMs, later: TimestampMs) -> bool {
    match local_day(later).pred_opt() {
        Some(yesterday) => local_day(earlier) == yesterday,
        None => false,
    }
}
