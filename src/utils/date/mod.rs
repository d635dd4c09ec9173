// Date utility functions

use chrono::{DateTime, Datelike, Days, Duration, Local, NaiveDate, NaiveTime, TimeZone};

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
pub fn week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - first_day_of_week as i64 + 7) % 7;
    date - Duration::days(offset)
}

/// Local wall-clock instant at `hour:minute` on `date`.
///
/// An hour of 24 or more rolls into the following day, so 24:15 on
/// Monday is 00:15 on Tuesday. Returns `None` for minutes outside 0-59
/// or when the wall-clock time does not exist locally (DST gap).
pub fn wall_clock(date: NaiveDate, hour: u32, minute: u32) -> Option<DateTime<Local>> {
    let date = date.checked_add_days(Days::new((hour / 24) as u64))?;
    let time = NaiveTime::from_hms_opt(hour % 24, minute, 0)?;
    Local.from_local_datetime(&date.and_time(time)).earliest()
}
