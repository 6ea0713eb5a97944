//! Timestamp value generators.
//!
//! Generated timestamps carry millisecond precision, the resolution of BSON
//! datetimes, so that the stored value and its CSV rendering compare equal.

use chrono::{DateTime, Months, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use rand::Rng;

/// Drop sub-millisecond precision.
pub fn truncate_to_millis(dt: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(dt.timestamp_millis()).unwrap_or(dt)
}

/// The instant `months` calendar months before `now`.
pub fn months_before(now: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    now.checked_sub_months(Months::new(months)).unwrap_or(now)
}

/// Generate a random timestamp in `[start, end]` with millisecond resolution.
///
/// The result is never earlier than `start`. When the range is empty or inverted,
/// `start` is returned.
pub fn generate_timestamp_between<R: Rng + ?Sized>(
    rng: &mut R,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> DateTime<Utc> {
    // Round the lower bound up so a truncated result cannot fall below `start`.
    let mut start_ms = start.timestamp_millis();
    if start.timestamp_subsec_nanos() % 1_000_000 != 0 {
        start_ms += 1;
    }
    let end_ms = end.timestamp_millis();

    if start_ms >= end_ms {
        return start;
    }

    let random_ms = rng.random_range(start_ms..=end_ms);
    DateTime::from_timestamp_millis(random_ms).unwrap_or(start)
}

/// Generate a random calendar date within the last `years` years, at midnight UTC.
pub fn generate_date_within_years<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    years: u32,
) -> DateTime<Utc> {
    let today = now.date_naive();
    let earliest = months_before(now, years * 12).date_naive();
    let span = (today - earliest).num_days().max(0);
    let offset = rng.random_range(0..=span);
    let date = earliest + chrono::Duration::days(offset);
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
        .unwrap_or(now)
}

/// Render a timestamp for interchange: RFC 3339, UTC, millisecond precision.
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a timestamp string in various ISO 8601 forms.
///
/// Timestamps without an offset are taken to be UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    // Try RFC 3339 / ISO 8601 with offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    // Naive datetime, with or without fractional seconds
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt.and_utc());
        }
    }

    // Try common date-only format
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}
