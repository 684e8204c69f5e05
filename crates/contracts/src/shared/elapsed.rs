//! Human-readable elapsed time labels ("5 minutes ago", "12m", "2h").

use chrono::{DateTime, Duration, Utc};

const UNITS: [(&str, i64); 6] = [
    ("year", 365 * 24 * 3600),
    ("month", 30 * 24 * 3600),
    ("day", 24 * 3600),
    ("hour", 3600),
    ("minute", 60),
    ("second", 1),
];

/// Elapsed time between `from` and `now`, clamped at zero for timestamps in the future.
pub fn elapsed_since(from: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    let elapsed = now.signed_duration_since(from);
    if elapsed < Duration::zero() {
        Duration::zero()
    } else {
        elapsed
    }
}

/// Long form: the largest unit that fits, e.g. `"3 hours ago"`, `"1 day ago"`.
pub fn elapsed_label(from: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = elapsed_since(from, now).num_seconds();
    for (unit, size) in UNITS {
        let n = secs / size;
        if n >= 1 {
            let plural = if n == 1 { "" } else { "s" };
            return format!("{} {}{} ago", n, unit, plural);
        }
    }
    "0 seconds ago".to_string()
}

/// Short form for kitchen cards: `"<n>m"` under an hour, `"<n>h"` otherwise.
pub fn elapsed_short(from: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = elapsed_since(from, now).num_minutes();
    if minutes < 60 {
        format!("{}m", minutes)
    } else {
        format!("{}h", minutes / 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_elapsed_label_picks_largest_unit() {
        let now = now();
        assert_eq!(elapsed_label(now - Duration::seconds(45), now), "45 seconds ago");
        assert_eq!(elapsed_label(now - Duration::seconds(60), now), "1 minute ago");
        assert_eq!(elapsed_label(now - Duration::minutes(59), now), "59 minutes ago");
        assert_eq!(elapsed_label(now - Duration::hours(5), now), "5 hours ago");
        assert_eq!(elapsed_label(now - Duration::days(1), now), "1 day ago");
        assert_eq!(elapsed_label(now - Duration::days(45), now), "1 month ago");
        assert_eq!(elapsed_label(now - Duration::days(800), now), "2 years ago");
    }

    #[test]
    fn test_future_timestamp_clamps_to_zero() {
        let now = now();
        assert_eq!(elapsed_label(now + Duration::minutes(3), now), "0 seconds ago");
        assert_eq!(elapsed_short(now + Duration::minutes(3), now), "0m");
    }

    #[test]
    fn test_elapsed_short() {
        let now = now();
        assert_eq!(elapsed_short(now - Duration::seconds(30), now), "0m");
        assert_eq!(elapsed_short(now - Duration::minutes(25), now), "25m");
        assert_eq!(elapsed_short(now - Duration::minutes(60), now), "1h");
        assert_eq!(elapsed_short(now - Duration::minutes(150), now), "2h");
    }
}
