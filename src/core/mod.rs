//! Core logger types and traits

pub mod config;
pub mod error;
pub mod fields;
pub mod formatter;
pub mod hooks;
pub mod log;
pub mod log_event;
pub mod log_level;
pub mod logger;
pub mod output_format;
pub mod scoped;
pub mod timestamp;

pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use fields::{FieldMapping, FieldValue, Fields, RESERVED_PREFIX};
pub use formatter::Formatter;
pub use hooks::{Hook, HookRegistry};
pub use log::Log;
pub use log_event::LogEvent;
pub use log_level::LogLevel;
pub use logger::{ExitHandler, Logger, LoggerBuilder, Sink, FATAL_EXIT_CODE};
pub use output_format::OutputFormat;
pub use scoped::ScopedLogger;
pub use timestamp::{format_timestamp, Timestamp, TIMESTAMP_FORMAT};
