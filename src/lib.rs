//! # scopelog
//!
//! A small leveled logger with structured fields and scoped child loggers.
//!
//! ## Features
//!
//! - **Leveled**: Debug, Info, Warning, Error and Fatal, filtered by a lock-free check
//! - **Structured fields**: key/value pairs attached to every line, rendered as
//!   text or JSON, with optional short names for compact JSON
//! - **Scopes**: child loggers that add fields without touching their parent
//! - **Hooks**: callbacks fired after every emission at a given level
//! - **Thread Safe**: one lock per logger; every line is written whole
//!
//! ## Example
//!
//! ```
//! use scopelog::prelude::*;
//!
//! let buffer = SharedBuffer::new();
//! let logger = Logger::builder()
//!     .writer(buffer.clone())
//!     .std_out(false)
//!     .fields(Fields::new().with_field("service", "billing"))
//!     .build();
//!
//! let request = logger.with_scope(Fields::new().with_field("request_id", 17));
//! request.info("charge accepted");
//!
//! let line = buffer.contents_string();
//! assert!(line.contains(" NFO charge accepted ["));
//! assert!(line.contains("request_id: 17"));
//! assert!(line.contains("service: billing"));
//! ```

pub mod core;
pub mod formatters;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        FieldMapping, FieldValue, Fields, Formatter, Log, LogEvent, LogLevel, Logger,
        LoggerBuilder, LoggerConfig, LoggerError, OutputFormat, Result, ScopedLogger, Timestamp,
    };
    pub use crate::formatters::{JsonFormatter, TextFormatter};
    pub use crate::sinks::SharedBuffer;
}

pub use crate::core::{
    format_timestamp, ExitHandler, FieldMapping, FieldValue, Fields, Formatter, Hook,
    HookRegistry, Log, LogEvent, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError,
    OutputFormat, Result, ScopedLogger, Sink, Timestamp, FATAL_EXIT_CODE, RESERVED_PREFIX,
    TIMESTAMP_FORMAT,
};
pub use formatters::{JsonFormatter, TextFormatter};
pub use global::default_logger;
pub use sinks::{open_log_file, SharedBuffer};
