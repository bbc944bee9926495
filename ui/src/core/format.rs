//! Formatting helpers for log rows and on-screen labels.

use time::{macros::format_description, OffsetDateTime};

pub fn format_ms(value: f64) -> String {
    format!("{value:.0} ms")
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// `2025-03-14 09:26:53`
pub fn format_log_timestamp(ts: OffsetDateTime) -> String {
    ts.format(&format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second]"
    ))
    .unwrap_or_else(|_| "—".to_string())
}

/// `20250314_092653`, used as the session identifier column.
pub fn session_slug(ts: OffsetDateTime) -> String {
    ts.format(&format_description!(
        "[year][month][day]_[hour][minute][second]"
    ))
    .unwrap_or_else(|_| "session".into())
}
