//! Display formatting for durations, timestamps, and scores.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::OffsetDateTime;
use time::macros::format_description;

/// Recording-timer readout, `m:ss`.
pub fn format_elapsed(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Absolute timestamp for report rows and CSV export.
pub fn format_timestamp(ms: i64) -> String {
    let fmt = format_description!("[year]-[month]-[day] [hour]:[minute]");
    OffsetDateTime::from_unix_timestamp(ms.div_euclid(1000))
        .ok()
        .and_then(|dt| dt.format(fmt).ok())
        .unwrap_or_else(|| "unknown".to_owned())
}

/// Coarse "how long ago" readout for activity lists.
pub fn format_relative(now_ms: i64, then_ms: i64) -> String {
    let secs = ((now_ms - then_ms) / 1000).max(0);
    let mins = secs / 60;
    let hours = mins / 60;
    let days = hours / 24;
    if days > 0 {
        plural(days, "day")
    } else if hours > 0 {
        plural(hours, "hour")
    } else if mins > 0 {
        plural(mins, "minute")
    } else {
        "just now".to_owned()
    }
}

/// Render a `[0, 1]` confidence as a whole percentage.
pub fn format_percent(value: f32) -> String {
    format!("{}%", (value * 100.0).round() as i32)
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}
