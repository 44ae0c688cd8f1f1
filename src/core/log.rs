//! Emission interface shared by [`Logger`](super::Logger) and [`ScopedLogger`]

use super::fields::{FieldMapping, Fields};
use super::log_level::LogLevel;
use super::scoped::ScopedLogger;
use std::fmt;
use std::sync::Arc;

/// Leveled logging interface.
///
/// Both the root [`Logger`](super::Logger) and every [`ScopedLogger`] derived
/// from it implement this trait, so code can take `&impl Log` and stay agnostic
/// of whether it was handed a scope.
///
/// The `*f` variants take pre-built [`fmt::Arguments`] and are what the
/// crate's macros expand to; nothing is rendered unless the level passes.
///
/// Emitting at [`LogLevel::Fatal`] always calls the logger's exit handler
/// afterwards, even when the level is filtered out or the write failed.
pub trait Log {
    /// Minimum level currently configured on the root logger
    fn log_level(&self) -> LogLevel;

    /// Emit one event; the rendering of `args` is skipped below the minimum level
    fn log_args(&self, level: LogLevel, args: fmt::Arguments<'_>);

    /// Field set attached to every line from this logger
    fn fields(&self) -> Arc<Fields>;

    fn field_mapping(&self) -> Arc<FieldMapping>;

    /// Derive a scope carrying this logger's fields merged with `fields`.
    ///
    /// On key collisions `fields` wins. The scope keeps the field mapping in
    /// effect at derivation time.
    fn with_scope(&self, fields: Fields) -> ScopedLogger;

    #[inline]
    fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.log_level()
    }

    fn log(&self, level: LogLevel, message: impl fmt::Display)
    where
        Self: Sized,
    {
        self.log_args(level, format_args!("{}", message));
    }

    fn debug(&self, message: impl fmt::Display)
    where
        Self: Sized,
    {
        self.log_args(LogLevel::Debug, format_args!("{}", message));
    }

    fn info(&self, message: impl fmt::Display)
    where
        Self: Sized,
    {
        self.log_args(LogLevel::Info, format_args!("{}", message));
    }

    fn warning(&self, message: impl fmt::Display)
    where
        Self: Sized,
    {
        self.log_args(LogLevel::Warning, format_args!("{}", message));
    }

    fn error(&self, message: impl fmt::Display)
    where
        Self: Sized,
    {
        self.log_args(LogLevel::Error, format_args!("{}", message));
    }

    /// Log at fatal level, then terminate through the exit handler
    fn fatal(&self, message: impl fmt::Display)
    where
        Self: Sized,
    {
        self.log_args(LogLevel::Fatal, format_args!("{}", message));
    }

    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.log_args(LogLevel::Debug, args);
    }

    fn infof(&self, args: fmt::Arguments<'_>) {
        self.log_args(LogLevel::Info, args);
    }

    fn warningf(&self, args: fmt::Arguments<'_>) {
        self.log_args(LogLevel::Warning, args);
    }

    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log_args(LogLevel::Error, args);
    }

    fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.log_args(LogLevel::Fatal, args);
    }
}
