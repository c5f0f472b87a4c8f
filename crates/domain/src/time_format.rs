//! Display helpers for provider timestamps.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeDelta, Utc};

/// Shown for assignments without an end timestamp.
pub const NEVER_EXPIRES: &str = "Never expires";
/// Shown when the end timestamp is already in the past.
pub const EXPIRED: &str = "Expired";
/// Shown when no countdown can be computed.
pub const NOT_APPLICABLE: &str = "N/A";

/// Renders a provider timestamp as `HH:MM, Mon DD` in its own offset.
///
/// Absent values render as [`NEVER_EXPIRES`]; unparseable values pass
/// through unchanged.
#[must_use]
pub fn format_datetime(value: Option<&str>) -> String {
    let Some(raw) = value.filter(|raw| !raw.is_empty()) else {
        return NEVER_EXPIRES.to_owned();
    };

    match parse_timestamp(raw) {
        Some(timestamp) => timestamp.format("%H:%M, %b %d").to_string(),
        None => raw.to_owned(),
    }
}

/// Renders the time left until `value` as `<h>h <m>m`.
#[must_use]
pub fn format_time_remaining(value: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(end) = value
        .filter(|raw| !raw.is_empty())
        .and_then(parse_timestamp)
    else {
        return NOT_APPLICABLE.to_owned();
    };

    let remaining = end.with_timezone(&Utc) - now;
    if remaining < TimeDelta::zero() {
        return EXPIRED.to_owned();
    }

    let total_seconds = remaining.num_seconds();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    format!("{hours}h {minutes}m")
}

// Offset-less timestamps are read as UTC, bare dates as UTC midnight.
fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc().fixed_offset())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc().fixed_offset())
        })
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeDelta, TimeZone, Utc};

    use super::{format_datetime, format_time_remaining};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 7, 12, 0, 0)
            .single()
            .unwrap_or_default()
    }

    #[test]
    fn absent_end_never_expires() {
        assert_eq!(format_datetime(None), "Never expires");
        assert_eq!(format_datetime(Some("")), "Never expires");
    }

    #[test]
    fn formats_utc_timestamp() {
        assert_eq!(
            format_datetime(Some("2026-03-07T14:05:00Z")),
            "14:05, Mar 07"
        );
        assert_eq!(
            format_datetime(Some("2026-03-07T14:05:00.1234567Z")),
            "14:05, Mar 07"
        );
    }

    #[test]
    fn keeps_the_timestamp_offset() {
        assert_eq!(
            format_datetime(Some("2026-03-07T14:05:00+02:00")),
            "14:05, Mar 07"
        );
    }

    #[test]
    fn malformed_timestamp_passes_through() {
        assert_eq!(format_datetime(Some("tomorrow-ish")), "tomorrow-ish");
    }

    #[test]
    fn remaining_splits_hours_and_minutes() {
        let end = (now() + TimeDelta::minutes(90)).to_rfc3339();
        assert_eq!(format_time_remaining(Some(&end), now()), "1h 30m");

        let end = (now() + TimeDelta::seconds(59)).to_rfc3339();
        assert_eq!(format_time_remaining(Some(&end), now()), "0h 0m");
    }

    #[test]
    fn past_end_is_expired() {
        let end = (now() - TimeDelta::milliseconds(500)).to_rfc3339();
        assert_eq!(format_time_remaining(Some(&end), now()), "Expired");
    }

    #[test]
    fn absent_or_malformed_end_is_not_applicable() {
        assert_eq!(format_time_remaining(None, now()), "N/A");
        assert_eq!(format_time_remaining(Some("garbage"), now()), "N/A");
    }

    #[test]
    fn offsetless_timestamp_is_read_as_utc() {
        assert_eq!(
            format_time_remaining(Some("2026-03-07T14:00:00"), now()),
            "2h 0m"
        );
    }

    #[test]
    fn bare_date_is_read_as_utc_midnight() {
        assert_eq!(format_datetime(Some("2026-03-07")), "00:00, Mar 07");
        assert_eq!(format_time_remaining(Some("2026-03-08"), now()), "12h 0m");
    }
}
