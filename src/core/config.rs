//! Declarative logger configuration

use super::formatter::Formatter;
use super::log_level::LogLevel;
use super::logger::Sink;
use super::output_format::OutputFormat;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Settings applied in one call by [`Logger::configure`](super::Logger::configure).
///
/// The serializable part (level, path, truncation, std_out, format) can be
/// loaded from JSON; `formatter` and `writer` are set in code only.
///
/// # Example
///
/// ```
/// use scopelog::prelude::*;
///
/// let config: LoggerConfig = serde_json::from_str(
///     r#"{ "log_level": "Debug", "std_out": false, "format": "json" }"#,
/// ).unwrap();
///
/// let logger = Logger::default();
/// logger.configure(config.with_writer(SharedBuffer::new()));
///
/// assert_eq!(logger.log_level(), LogLevel::Debug);
/// assert_eq!(logger.formatter().name(), "json");
/// ```
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub log_level: LogLevel,
    /// Log file; takes precedence over `writer` when set and non-empty
    pub path: Option<PathBuf>,
    /// Truncate the log file when opening it instead of appending
    pub truncate_on_start: bool,
    pub std_out: bool,
    /// Built-in formatter selection, ignored when `formatter` is set
    pub format: Option<OutputFormat>,
    #[serde(skip)]
    pub formatter: Option<Arc<dyn Formatter>>,
    #[serde(skip)]
    pub writer: Option<Sink>,
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_truncate_on_start(mut self, truncate: bool) -> Self {
        self.truncate_on_start = truncate;
        self
    }

    #[must_use]
    pub fn with_std_out(mut self, enable: bool) -> Self {
        self.std_out = enable;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    #[must_use]
    pub fn with_formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    #[must_use]
    pub fn with_writer<W: std::io::Write + Send + 'static>(mut self, writer: W) -> Self {
        self.writer = Some(Box::new(writer));
        self
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("log_level", &self.log_level)
            .field("path", &self.path)
            .field("truncate_on_start", &self.truncate_on_start)
            .field("std_out", &self.std_out)
            .field("format", &self.format)
            .field("formatter", &self.formatter.as_ref().map(|f| f.name().to_owned()))
            .field("has_writer", &self.writer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::new();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.path.is_none());
        assert!(!config.truncate_on_start);
        assert!(!config.std_out);
        assert!(config.format.is_none());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: LoggerConfig =
            serde_json::from_str(r#"{ "path": "/tmp/app.log", "truncate_on_start": true }"#)
                .unwrap();

        assert_eq!(config.path, Some(PathBuf::from("/tmp/app.log")));
        assert!(config.truncate_on_start);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_deserialize_rejects_unknown_level() {
        let result: Result<LoggerConfig, _> = serde_json::from_str(r#"{ "log_level": "Verbose" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_methods() {
        let config = LoggerConfig::new()
            .with_log_level(LogLevel::Error)
            .with_std_out(true)
            .with_format(OutputFormat::JsonCompact)
            .with_writer(Vec::<u8>::new());

        assert_eq!(config.log_level, LogLevel::Error);
        assert!(config.std_out);
        assert_eq!(config.format, Some(OutputFormat::JsonCompact));
        assert!(config.writer.is_some());

        let debug = format!("{:?}", config);
        assert!(debug.contains("has_writer: true"));
    }
}
