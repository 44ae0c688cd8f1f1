//! Timestamp formatting shared by the built-in formatters
//!
//! Every log line carries a fixed-width local timestamp with microsecond
//! precision: `2025-01-08 10:30:45:123456`.

use chrono::{DateTime, Local, TimeZone};
use std::fmt;
use std::io;

/// Wall-clock time of a log event
pub type Timestamp = DateTime<Local>;

/// strftime pattern for `YYYY-MM-DD HH:MM:SS:ffffff`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S:%6f";

/// Current local time
#[inline]
pub fn now() -> Timestamp {
    Local::now()
}

/// Format a timestamp as `YYYY-MM-DD HH:MM:SS:ffffff`
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use scopelog::format_timestamp;
///
/// let ts = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap()
///     + chrono::Duration::microseconds(123);
/// assert_eq!(format_timestamp(&ts), "2025-01-08 10:30:45:000123");
/// ```
#[must_use]
pub fn format_timestamp<Tz>(timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Write a formatted timestamp straight into `out` without an intermediate `String`
pub fn write_timestamp<Tz>(out: &mut dyn io::Write, timestamp: &DateTime<Tz>) -> io::Result<()>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    write!(out, "{}", timestamp.format(TIMESTAMP_FORMAT))
}
