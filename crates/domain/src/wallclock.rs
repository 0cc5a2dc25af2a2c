use chrono::prelude::*;
use chrono::LocalResult;
use chrono_tz::Tz;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum WallClockError {
    #[error("The local time {0} does not exist in the timezone {1}")]
    NonexistentLocalTime(NaiveDateTime, Tz),
}

/// Converts a naive wall-clock date and time-of-day to a UTC timestamp in
/// millis, using the zone's UTC offset at that local date. During a DST
/// spring-forward gap there is no such instant and an error is returned.
/// An ambiguous local time (fall-back overlap) resolves to the earliest
/// of the two instants.
pub fn to_absolute(date: NaiveDate, time: NaiveTime, tz: Tz) -> Result<i64, WallClockError> {
    let local = date.and_time(time);
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => Ok(dt.timestamp_millis()),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.timestamp_millis()),
        LocalResult::None => Err(WallClockError::NonexistentLocalTime(local, tz)),
    }
}

/// Converts a UTC timestamp in millis back to the wall-clock date and
/// time-of-day in the given timezone.
pub fn to_local(timestamp_millis: i64, tz: Tz) -> (NaiveDate, NaiveTime) {
    let dt = Utc.timestamp_millis(timestamp_millis).with_timezone(&tz);
    let local = dt.naive_local();
    (local.date(), local.time())
}
