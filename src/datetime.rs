//! Date/time utilities.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Display format used in notification emails (pt-BR style).
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Format a `DateTime<Utc>` in the given timezone.
///
/// Falls back to UTC when the timezone name is unknown.
pub fn format_utc_datetime(dt: &DateTime<Utc>, timezone: &str, format: &str) -> String {
    let tz: Tz = match timezone.parse() {
        Ok(tz) => tz,
        Err(_) => return dt.format(format).to_string(),
    };
    dt.with_timezone(&tz).format(format).to_string()
}

/// Format a `DateTime<Utc>` with [`DISPLAY_FORMAT`].
pub fn format_display(dt: &DateTime<Utc>, timezone: &str) -> String {
    format_utc_datetime(dt, timezone, DISPLAY_FORMAT)
}

/// Current time formatted with [`DISPLAY_FORMAT`].
pub fn now_display(timezone: &str) -> String {
    format_display(&Utc::now(), timezone)
}
