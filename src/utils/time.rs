//! Time display helpers: wire timestamps arrive as UTC instants and are
//! shown in the local timezone as HH:MM.

use chrono::{DateTime, Local, Utc};

pub fn format_time(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%H:%M").to_string()
}

/// "--:--" for missing timestamps, matching the web client.
pub fn format_optional_time(ts: Option<&DateTime<Utc>>) -> String {
    match ts {
        Some(t) => format_time(t),
        None => "--:--".to_string(),
    }
}

pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d").to_string()
}
