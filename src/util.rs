use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use time_humanize::HumanTime;

pub fn get_unix() -> i64 {
    Utc::now().timestamp_millis()
}

// Calculate humantime from now to unix timestamp in milliseconds
// e.g. "5 hours ago"
pub fn unix_to_humantime(unix: i64) -> String {
    if unix == 0 {
        return "never".to_string();
    }

    let seconds = u64::try_from(unix / 1000).unwrap_or(0);
    HumanTime::from_duration_since_timestamp(seconds).to_string()
}

/// Renders a unix timestamp in milliseconds as wall clock time in `location`.
pub fn unix_to_datetime(unix: i64, location: &Tz) -> String {
    match DateTime::<Utc>::from_timestamp_millis(unix) {
        Some(utc) => utc
            .with_timezone(location)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_never_used() {
        assert_eq!(unix_to_humantime(0), "never");
    }

    #[test]
    fn datetime_follows_daylight_saving() {
        // 2020-07-29 12:00:00 UTC and 2020-01-15 12:00:00 UTC
        let summer = 1_596_024_000_000;
        let winter = 1_579_089_600_000;

        assert_eq!(unix_to_datetime(summer, &Tz::UTC), "2020-07-29 12:00:00");
        assert_eq!(unix_to_datetime(summer, &Tz::Europe__Kyiv), "2020-07-29 15:00:00");
        assert_eq!(unix_to_datetime(winter, &Tz::Europe__Kyiv), "2020-01-15 14:00:00");
    }

    #[test]
    fn now_is_after_2020() {
        assert!(get_unix() > 1_577_836_800_000);
    }
}
