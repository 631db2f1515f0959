//! UTC timestamps.

use chrono::{DateTime, Utc};

/// strftime pattern for [`time_now`].
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current time in UTC as `YYYY-MM-DD HH:MM:SS`.
///
/// The host timezone is never consulted.
pub fn time_now() -> String {
    format_timestamp(Utc::now())
}

/// Format a UTC instant as `YYYY-MM-DD HH:MM:SS`, dropping sub-seconds.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use relaytext::clock::format_timestamp;
///
/// let at = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 3).unwrap();
/// assert_eq!(format_timestamp(at), "2024-03-09 07:05:03");
/// ```
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}
