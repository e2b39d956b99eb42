//! Clamping rules applied to reported activity times and dates.

use chrono::{NaiveDate, NaiveTime};

/// Clamps a candidate activity time and date against assignment rules.
///
/// Two independent rules, applied to the displayed values only (status
/// and score are never affected):
///
/// 1. A time-of-day past `cutoff` is replaced by the cutoff exactly:
///    no credit for activity logged after the cutoff clock time.
/// 2. A date strictly after the launch date is replaced by the launch
///    date, attributing clock-skewed future activity to launch day.
///
/// Unspecified inputs (`None`) leave the corresponding rule a no-op, as
/// does an unknown launch date.
#[must_use]
pub fn enforce(
    time: Option<NaiveTime>,
    date: Option<NaiveDate>,
    launched: Option<NaiveDate>,
    cutoff: NaiveTime,
) -> (Option<NaiveTime>, Option<NaiveDate>) {
    let time = time.map(|t| if t > cutoff { cutoff } else { t });
    let date = match (date, launched) {
        (Some(d), Some(launch)) if d > launch => Some(launch),
        _ => date,
    };
    (time, date)
}
