use chrono::Utc;

const SECS_PER_DAY: i64 = 86_400;

/// Current time in seconds since epoch
pub fn now_epoch() -> i64 {
    Utc::now().timestamp()
}

/// Time left until `start_time` as "Dd HH:MM:SS"
///
/// Events that already started show a zero countdown.
pub fn format_countdown(start_time: i64, now: i64) -> String {
    let remaining = start_time.saturating_sub(now).max(0);
    let days = remaining / SECS_PER_DAY;
    let secs = remaining % SECS_PER_DAY;
    format!(
        "{}d {:02}:{:02}:{:02}",
        days,
        secs / 3600,
        secs % 3600 / 60,
        secs % 60
    )
}
