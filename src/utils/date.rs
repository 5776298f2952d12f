use chrono::{
    DateTime, Duration, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
    Utc,
};
use chrono_tz::Tz;

/// Today's calendar date as seen in the reference time zone.
pub fn today(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Tolerant parser for stored timestamps.
///
/// Accepts RFC 3339 (`2025-03-01T14:23:11.5+01:00`), the same with a space
/// separator, offset-less date-times and bare dates; the last two are read
/// as UTC. Anything else yields `None`.
pub fn parse_timestamp(s: &str) -> Option<DateTime<FixedOffset>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }

    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(dt);
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc().fixed_offset());
        }
    }

    parse_date(s).map(|d| d.and_time(NaiveTime::MIN).and_utc().fixed_offset())
}

/// Combine a calendar date with a time of day in `tz`.
///
/// Ambiguous local times (clocks going back) resolve to the earlier instant;
/// local times skipped by a DST jump are moved one hour forward.
pub fn combine(date: NaiveDate, time: NaiveTime, tz: Tz) -> Option<DateTime<Tz>> {
    let naive = date.and_time(time);

    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(early, _) => Some(early),
        LocalResult::None => tz
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest(),
    }
}

pub fn format_timestamp(dt: &DateTime<FixedOffset>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

pub fn format_short(dt: &DateTime<FixedOffset>) -> String {
    dt.format("%Y-%m-%d").to_string()
}
