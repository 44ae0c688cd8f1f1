//! Formatter trait for turning log events into bytes

use super::{error::Result, log_event::LogEvent};
use std::io;

/// Serializes one log event into `out`.
///
/// Implementations hold configuration only; the logger calls `format` under its
/// lock with a reusable buffer. An error is reported by the logger and whatever
/// bytes were already written are still delivered.
pub trait Formatter: Send + Sync {
    fn format(&self, out: &mut dyn io::Write, event: &LogEvent<'_>) -> Result<()>;
    fn name(&self) -> &str;
}
