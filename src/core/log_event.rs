//! Log event handed to formatters

use super::fields::{FieldMapping, Fields};
use super::log_level::LogLevel;
use super::timestamp::Timestamp;

/// One log emission, borrowed from the write pipeline for the duration of a
/// `Formatter::format` call.
#[derive(Debug, Clone, Copy)]
pub struct LogEvent<'a> {
    pub level: LogLevel,
    pub message: &'a str,
    pub timestamp: &'a Timestamp,
    /// Effective field set of the emitting logger or scope
    pub fields: &'a Fields,
    pub field_mapping: &'a FieldMapping,
}

impl<'a> LogEvent<'a> {
    pub fn new(
        level: LogLevel,
        message: &'a str,
        timestamp: &'a Timestamp,
        fields: &'a Fields,
        field_mapping: &'a FieldMapping,
    ) -> Self {
        Self {
            level,
            message,
            timestamp,
            fields,
            field_mapping,
        }
    }
}
