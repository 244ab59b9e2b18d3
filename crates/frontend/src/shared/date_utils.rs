/// Utilities for date and time formatting
///
/// Transcript entries carry the browser's wall-clock time of the event,
/// never a server timestamp.
use chrono::{DateTime, Local, TimeZone};

/// Format a moment as HH:MM:SS in its own timezone
/// Example: 2024-03-15 14:02:26.123 -> "14:02:26"
pub fn format_time<Tz: TimeZone>(moment: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    moment.format("%H:%M:%S").to_string()
}

/// Current local time label for a new transcript entry
pub fn now_time_label() -> String {
    format_time(&Local::now())
}
