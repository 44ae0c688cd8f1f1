//! Scoped loggers: a root logger plus a frozen field set

use super::fields::{FieldMapping, Fields};
use super::log::Log;
use super::log_level::LogLevel;
use super::logger::{Logger, LoggerShared};
use std::fmt;
use std::sync::Arc;

/// A logger view carrying its own fields.
///
/// Level, sinks, formatter and hooks are always read live from the root
/// logger. The field set and field mapping are fixed when the scope is
/// derived: later `set_fields` or mapping changes on the root do not reach
/// existing scopes.
///
/// # Example
///
/// ```
/// use scopelog::prelude::*;
///
/// let buffer = SharedBuffer::new();
/// let logger = Logger::new(Some(Box::new(buffer.clone())), LogLevel::Info, false);
/// logger.set_fields(Some(Fields::new().with_field("service", "api")));
///
/// let request = logger.with_scope(Fields::new().with_field("request_id", 7));
/// let step = request.with_scope(Fields::new().with_field("step", "auth"));
///
/// step.info("checking token");
///
/// assert_eq!(step.fields().len(), 3);
/// assert!(buffer.contents_string().contains("NFO checking token ["));
/// ```
#[derive(Clone)]
pub struct ScopedLogger {
    root: Arc<LoggerShared>,
    fields: Arc<Fields>,
    field_mapping: Arc<FieldMapping>,
}

impl ScopedLogger {
    pub(crate) fn new(
        root: Arc<LoggerShared>,
        fields: Arc<Fields>,
        field_mapping: Arc<FieldMapping>,
    ) -> Self {
        Self {
            root,
            fields,
            field_mapping,
        }
    }

    /// Handle to the root logger this scope writes through
    pub fn root(&self) -> Logger {
        Logger::from_shared(Arc::clone(&self.root))
    }
}

impl Log for ScopedLogger {
    fn log_level(&self) -> LogLevel {
        self.root.min_level()
    }

    fn log_args(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        self.root
            .dispatch(level, args, Some((&*self.fields, &*self.field_mapping)));
    }

    fn fields(&self) -> Arc<Fields> {
        Arc::clone(&self.fields)
    }

    fn field_mapping(&self) -> Arc<FieldMapping> {
        Arc::clone(&self.field_mapping)
    }

    fn with_scope(&self, fields: Fields) -> ScopedLogger {
        ScopedLogger::new(
            Arc::clone(&self.root),
            Arc::new(self.fields.merged(&fields)),
            Arc::clone(&self.field_mapping),
        )
    }
}

impl fmt::Debug for ScopedLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedLogger")
            .field("min_level", &self.root.min_level())
            .field("fields", &self.fields)
            .field("field_mapping", &self.field_mapping)
            .finish()
    }
}
