//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. They accept any
//! [`Log`](crate::Log) implementor, a [`Logger`](crate::Logger) or a
//! [`ScopedLogger`](crate::ScopedLogger), by value or by reference, and the
//! message is only rendered when the level is enabled.
//!
//! # Examples
//!
//! ```
//! use scopelog::prelude::*;
//! use scopelog::{info, fields};
//!
//! let logger = Logger::builder().std_out(false).build();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // Through a scope
//! let request = logger.with_scope(fields! { "user_id" => 42, "action" => "login" });
//! info!(request, "User performed action");
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use scopelog::prelude::*;
/// # let logger = Logger::builder().std_out(false).build();
/// use scopelog::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        use $crate::Log as _;
        $logger.log_args($level, ::std::format_args!($($arg)+))
    }};
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use scopelog::prelude::*;
/// # let logger = Logger::builder().std_out(false).min_level(LogLevel::Debug).build();
/// use scopelog::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use scopelog::prelude::*;
/// # let logger = Logger::builder().std_out(false).build();
/// use scopelog::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use scopelog::prelude::*;
/// # let logger = Logger::builder().std_out(false).build();
/// use scopelog::warning;
/// warning!(logger, "Low disk space");
/// warning!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use scopelog::prelude::*;
/// # let logger = Logger::builder().std_out(false).build();
/// use scopelog::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message, then call the logger's exit handler.
///
/// # Examples
///
/// ```
/// # use scopelog::prelude::*;
/// # let logger = Logger::builder().std_out(false).exit_handler(|_| {}).build();
/// use scopelog::fatal;
/// fatal!(logger, "Critical system failure");
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Build a [`Fields`](crate::Fields) set from `key => value` pairs.
///
/// # Examples
///
/// ```
/// use scopelog::fields;
///
/// let fields = fields! { "user_id" => 42, "name" => "alice", "admin" => false };
/// assert_eq!(fields.len(), 3);
/// assert!(fields! {}.is_empty());
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Fields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut fields = $crate::Fields::new();
        $( fields.insert($key, $value); )+
        fields
    }};
}
