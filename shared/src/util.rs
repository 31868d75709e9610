//! Small cross-crate helpers

use chrono::{DateTime, Utc};

/// Render a timestamp relative to `now` for activity-feed display.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use shared::util::relative_time;
///
/// let now = Utc::now();
/// assert_eq!(relative_time(now, now), "Just now");
/// assert_eq!(relative_time(now - Duration::minutes(5), now), "5 minutes ago");
/// assert_eq!(relative_time(now - Duration::hours(3), now), "3 hours ago");
/// ```
pub fn relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - timestamp).num_minutes();
    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{} minutes ago", minutes)
    } else if minutes < 1440 {
        format!("{} hours ago", minutes / 60)
    } else {
        timestamp.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_relative_time_buckets() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(relative_time(now - Duration::seconds(30), now), "Just now");
        assert_eq!(relative_time(now - Duration::minutes(59), now), "59 minutes ago");
        assert_eq!(relative_time(now - Duration::hours(1), now), "1 hours ago");
        assert_eq!(relative_time(now - Duration::hours(23), now), "23 hours ago");
    }

    #[test]
    fn test_relative_time_falls_back_to_date() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let old = now - Duration::days(3);
        assert_eq!(relative_time(old, now), "2024-06-12");
    }
}
