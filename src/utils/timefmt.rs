//! Timestamp presentation helpers shared by cards and detail views.

use chrono::{Local, TimeZone};

const HOUR_MS: i64 = 3_600_000;

/// Compact relative age for job cards: "Just now", "5h ago", "1 day ago",
/// "4 days ago", "2w ago".
pub fn time_ago(posted_at_ms: i64, now_ms: i64) -> String {
    let hours = (now_ms - posted_at_ms) / HOUR_MS;
    if hours < 1 {
        return "Just now".to_string();
    }
    if hours < 24 {
        return format!("{hours}h ago");
    }
    let days = hours / 24;
    if days == 1 {
        return "1 day ago".to_string();
    }
    if days < 7 {
        return format!("{days} days ago");
    }
    format!("{}w ago", days / 7)
}

/// Full date for the details screen, e.g. "January 5, 2026".
pub fn long_date(ms: i64) -> String {
    local_date(ms, "%B %-d, %Y")
}

/// Short date for the my-jobs list, e.g. "Jan 5".
pub fn short_date(ms: i64) -> String {
    local_date(ms, "%b %-d")
}

fn local_date(ms: i64, fmt: &str) -> String {
    match Local.timestamp_millis_opt(ms).single() {
        Some(dt) => dt.format(fmt).to_string(),
        None => "—".to_string(),
    }
}

/// Time-of-day greeting for the home header.
pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good Morning"
    } else if hour < 17 {
        "Good Afternoon"
    } else {
        "Good Evening"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_ago_buckets_match_card_captions() {
        let now = 10 * 24 * HOUR_MS;

        assert_eq!(time_ago(now - HOUR_MS / 2, now), "Just now");
        assert_eq!(time_ago(now - 5 * HOUR_MS, now), "5h ago");
        assert_eq!(time_ago(now - 25 * HOUR_MS, now), "1 day ago");
        assert_eq!(time_ago(now - 4 * 24 * HOUR_MS, now), "4 days ago");
        assert_eq!(time_ago(now - 9 * 24 * HOUR_MS, now), "1w ago");
    }

    #[test]
    fn greeting_covers_the_day() {
        assert_eq!(greeting(8), "Good Morning");
        assert_eq!(greeting(13), "Good Afternoon");
        assert_eq!(greeting(21), "Good Evening");
    }
}
