use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use std::fmt::Write;

/// Long-form calendar date, e.g. "Jan 1, 2024"
pub const DEFAULT_DATE_FORMAT: &str = "%b %-d, %Y";

/// Convert provider UNIX seconds into a UTC timestamp.
/// Returns `None` for values outside chrono's representable range.
pub fn from_unix_seconds(seconds: i64) -> Option<DateTime<Utc>> {
    let converted = DateTime::from_timestamp(seconds, 0);
    if converted.is_none() {
        tracing::warn!(seconds, "timestamp out of range");
    }
    converted
}

/// Whether chrono understands every specifier in `pattern`
pub fn is_valid_date_format(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| item == Item::Error)
}

/// Format a UTC timestamp as a human-readable calendar date.
/// Returns `None` when the pattern cannot be rendered.
pub fn format_date(utc_time: DateTime<Utc>, pattern: &str) -> Option<String> {
    if !is_valid_date_format(pattern) {
        tracing::warn!(pattern, "unsupported date format");
        return None;
    }

    let mut rendered = String::new();
    match write!(rendered, "{}", utc_time.format(pattern)) {
        Ok(()) => Some(rendered),
        Err(_) => {
            tracing::warn!(pattern, "date could not be rendered");
            None
        }
    }
}
