//! Process-wide default logger
//!
//! The default logger writes to the standard streams at [`LogLevel::Info`]
//! with the text formatter. It is created on first use and can be
//! reconfigured like any other [`Logger`].

use crate::core::{
    FieldMapping, Fields, Formatter, Log, LogLevel, Logger, LoggerConfig, ScopedLogger, Sink,
    Timestamp,
};
use once_cell::sync::Lazy;
use std::fmt;

static DEFAULT_LOGGER: Lazy<Logger> = Lazy::new(|| Logger::new(None, LogLevel::Info, true));

/// Handle to the default logger; clones share its state
pub fn default_logger() -> Logger {
    DEFAULT_LOGGER.clone()
}

pub fn configure(config: LoggerConfig) {
    DEFAULT_LOGGER.configure(config);
}

pub fn set_log_level(level: LogLevel) {
    DEFAULT_LOGGER.set_log_level(level);
}

pub fn log_level() -> LogLevel {
    DEFAULT_LOGGER.log_level()
}

pub fn set_std_out(enable: bool) {
    DEFAULT_LOGGER.set_std_out(enable);
}

pub fn set_writer(writer: Option<Sink>) {
    DEFAULT_LOGGER.set_writer(writer);
}

pub fn set_formatter<F: Formatter + 'static>(formatter: F) {
    DEFAULT_LOGGER.set_formatter(formatter);
}

pub fn set_fields(fields: Option<Fields>) {
    DEFAULT_LOGGER.set_fields(fields);
}

pub fn add_field_mapping(mapping: FieldMapping) {
    DEFAULT_LOGGER.add_field_mapping(mapping);
}

pub fn set_field_mapping(mapping: FieldMapping) {
    DEFAULT_LOGGER.set_field_mapping(mapping);
}

pub fn install_hook<F>(level: LogLevel, hook: F)
where
    F: Fn(&Timestamp, LogLevel, &str) + Send + Sync + 'static,
{
    DEFAULT_LOGGER.install_hook(level, hook);
}

pub fn with_scope(fields: Fields) -> ScopedLogger {
    DEFAULT_LOGGER.with_scope(fields)
}

pub fn log(level: LogLevel, message: impl fmt::Display) {
    DEFAULT_LOGGER.log(level, message);
}

pub fn debug(message: impl fmt::Display) {
    DEFAULT_LOGGER.debug(message);
}

pub fn info(message: impl fmt::Display) {
    DEFAULT_LOGGER.info(message);
}

pub fn warning(message: impl fmt::Display) {
    DEFAULT_LOGGER.warning(message);
}

pub fn error(message: impl fmt::Display) {
    DEFAULT_LOGGER.error(message);
}

/// Log at fatal level on the default logger, then terminate
pub fn fatal(message: impl fmt::Display) {
    DEFAULT_LOGGER.fatal(message);
}

pub fn debugf(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.debugf(args);
}

pub fn infof(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.infof(args);
}

pub fn warningf(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.warningf(args);
}

pub fn errorf(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.errorf(args);
}

pub fn fatalf(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.fatalf(args);
}
