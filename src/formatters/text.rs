//! Human-readable text formatter

use crate::core::{timestamp::write_timestamp, Formatter, LogEvent, Result};
use std::io;

/// Text formatter, the default for new loggers.
///
/// Output: `2025-01-08 10:30:45:123456 NFO message [key: value, other: 1]`
/// followed by a newline unless the message already ends with one.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for TextFormatter {
    fn format(&self, out: &mut dyn io::Write, event: &LogEvent<'_>) -> Result<()> {
        write_timestamp(out, event.timestamp)?;
        write!(out, " {} ", event.level.short_code())?;
        out.write_all(event.message.as_bytes())?;

        if !event.fields.is_empty() {
            out.write_all(b" [")?;
            for (idx, (key, value)) in event.fields.iter().enumerate() {
                if idx > 0 {
                    out.write_all(b", ")?;
                }
                write!(out, "{}: {}", key, value)?;
            }
            out.write_all(b"]")?;
        }

        if !event.message.ends_with('\n') {
            out.write_all(b"\n")?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "text"
    }
}
