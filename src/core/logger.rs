//! Main logger implementation

use super::{
    config::LoggerConfig,
    error::{LoggerError, Result},
    fields::{FieldMapping, Fields},
    formatter::Formatter,
    hooks::{Hook, HookRegistry},
    log::Log,
    log_event::LogEvent,
    log_level::LogLevel,
    scoped::ScopedLogger,
    timestamp::{self, Timestamp},
};
use crate::formatters::TextFormatter;
use crate::sinks::open_log_file;
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Exit status passed to the exit handler after a fatal event
pub const FATAL_EXIT_CODE: i32 = 1;

/// Initial capacity of the reusable formatting buffer
const BUFFER_CAPACITY: usize = 512;

/// Buffers grown beyond this by one large event are not kept for reuse
const MAX_RETAINED_BUFFER: usize = 64 * 1024;

/// Destination for formatted log lines
pub type Sink = Box<dyn Write + Send>;

/// Invoked with [`FATAL_EXIT_CODE`] after every fatal event
pub type ExitHandler = Arc<dyn Fn(i32) + Send + Sync>;

fn exit_process(code: i32) {
    std::process::exit(code)
}

/// Everything guarded by the logger lock
struct LoggerState {
    writer: Option<Sink>,
    std_out: bool,
    formatter: Arc<dyn Formatter>,
    fields: Arc<Fields>,
    field_mapping: Arc<FieldMapping>,
    hooks: HookRegistry,
    exit_handler: ExitHandler,
    buffer: Vec<u8>,
}

/// State shared by a logger, its clones, and every scope derived from it
pub(crate) struct LoggerShared {
    /// Mirrors the configured level so the early-exit check needs no lock.
    /// Only written while `state` is locked.
    min_level: AtomicU8,
    state: Mutex<LoggerState>,
}

impl LoggerShared {
    #[inline]
    pub(crate) fn min_level(&self) -> LogLevel {
        LogLevel::from_u8(self.min_level.load(Ordering::Relaxed))
    }

    #[inline]
    fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level()
    }

    /// Entry point of every leveled emission.
    ///
    /// The message is only rendered once the level check passes. Fatal events
    /// terminate after the pipeline returns, whatever happened during the write.
    pub(crate) fn dispatch(
        &self,
        level: LogLevel,
        args: fmt::Arguments<'_>,
        scope: Option<(&Fields, &FieldMapping)>,
    ) {
        if self.is_enabled(level) {
            let message = fmt::format(args);
            self.write_with_fields(level, &message, scope);
        }

        if level == LogLevel::Fatal {
            self.terminate();
        }
    }

    /// Format, write and run hooks for one event.
    ///
    /// `scope` carries the fields and mapping of a scoped logger; `None` uses the
    /// logger's own, read under the same lock as the write.
    fn write_with_fields(
        &self,
        level: LogLevel,
        message: &str,
        scope: Option<(&Fields, &FieldMapping)>,
    ) {
        if !self.is_enabled(level) {
            return;
        }

        let now = timestamp::now();

        let hooks = {
            let mut guard = self.state.lock();
            let state = &mut *guard;

            let (fields, field_mapping) = match scope {
                Some((fields, field_mapping)) => (fields, field_mapping),
                None => (&*state.fields, &*state.field_mapping),
            };

            state.buffer.clear();
            let event = LogEvent::new(level, message, &now, fields, field_mapping);
            if let Err(e) = state.formatter.format(&mut state.buffer, &event) {
                eprintln!(
                    "[LOGGER ERROR] Formatter '{}' failed: {}",
                    state.formatter.name(),
                    e
                );
            }

            if let Some(writer) = state.writer.as_mut() {
                if let Err(e) = writer.write_all(&state.buffer) {
                    eprintln!("[LOGGER ERROR] Could not write log entry to writer: {}", e);
                }
            }

            if state.std_out {
                Self::write_std_stream(level, &state.buffer);
            }

            if state.buffer.capacity() > MAX_RETAINED_BUFFER {
                state.buffer = Vec::with_capacity(BUFFER_CAPACITY);
            }

            state.hooks.snapshot(level)
        };

        if let Some(hooks) = hooks {
            Self::run_hooks(&hooks, &now, level, message);
        }
    }

    /// Error and Fatal go to stderr, everything else to stdout
    fn write_std_stream(level: LogLevel, bytes: &[u8]) {
        let result = if level.writes_to_stderr() {
            io::stderr().lock().write_all(bytes)
        } else {
            io::stdout().lock().write_all(bytes)
        };

        if let Err(e) = result {
            let stream = if level.writes_to_stderr() { "stderr" } else { "stdout" };
            eprintln!("[LOGGER ERROR] Could not write log entry to {}: {}", stream, e);
        }
    }

    fn run_hooks(
        hooks: &[Hook],
        now: &Timestamp,
        level: LogLevel,
        message: &str,
    ) {
        for hook in hooks {
            hook(now, level, message);
        }
    }

    fn terminate(&self) {
        let exit_handler = Arc::clone(&self.state.lock().exit_handler);
        exit_handler(FATAL_EXIT_CODE);
    }
}

/// Core logger: owns the configuration and performs every physical write.
///
/// `Logger` is a cheap handle; clones share the same state, so a mutation made
/// through one clone is seen by all of them. Emission methods come from the
/// [`Log`] trait.
///
/// # Example
///
/// ```
/// use scopelog::prelude::*;
///
/// let buffer = SharedBuffer::new();
/// let logger = Logger::new(Some(Box::new(buffer.clone())), LogLevel::Info, false);
///
/// logger.warning("low disk");
/// logger.debug("suppressed");
///
/// let output = buffer.contents_string();
/// assert!(output.ends_with(" WRN low disk\n"));
/// assert_eq!(output.lines().count(), 1);
/// ```
#[derive(Clone)]
pub struct Logger {
    shared: Arc<LoggerShared>,
}

impl Logger {
    /// Create a logger with the text formatter, no fields and no mapping
    #[must_use]
    pub fn new(writer: Option<Sink>, level: LogLevel, std_out: bool) -> Self {
        let state = LoggerState {
            writer,
            std_out,
            formatter: Arc::new(TextFormatter::new()),
            fields: Arc::new(Fields::new()),
            field_mapping: Arc::new(FieldMapping::new()),
            hooks: HookRegistry::new(),
            exit_handler: Arc::new(exit_process),
            buffer: Vec::with_capacity(BUFFER_CAPACITY),
        };

        Self {
            shared: Arc::new(LoggerShared {
                min_level: AtomicU8::new(level as u8),
                state: Mutex::new(state),
            }),
        }
    }

    pub(crate) fn from_shared(shared: Arc<LoggerShared>) -> Self {
        Self { shared }
    }

    pub fn set_log_level(&self, level: LogLevel) {
        let _guard = self.shared.state.lock();
        self.shared.min_level.store(level as u8, Ordering::Relaxed);
    }

    /// Enable or disable the copy of every line on stdout/stderr
    pub fn set_std_out(&self, enable: bool) {
        self.shared.state.lock().std_out = enable;
    }

    pub fn std_out(&self) -> bool {
        self.shared.state.lock().std_out
    }

    /// Set or clear (`None`) the writer sink
    pub fn set_writer(&self, writer: Option<Sink>) {
        self.shared.state.lock().writer = writer;
    }

    pub fn set_formatter<F: Formatter + 'static>(&self, formatter: F) {
        self.set_shared_formatter(Arc::new(formatter));
    }

    pub fn set_shared_formatter(&self, formatter: Arc<dyn Formatter>) {
        self.shared.state.lock().formatter = formatter;
    }

    pub fn formatter(&self) -> Arc<dyn Formatter> {
        Arc::clone(&self.shared.state.lock().formatter)
    }

    /// Replace the logger's field set; `None` clears it.
    ///
    /// Scopes derived before this call keep the fields they were created with.
    pub fn set_fields(&self, fields: Option<Fields>) {
        let fields = Arc::new(fields.unwrap_or_default());
        self.shared.state.lock().fields = fields;
    }

    /// Merge `mapping` into the active field mapping.
    ///
    /// Entries whose short name starts with `@` are dropped with a warning on
    /// stderr. An existing entry for the same key is kept.
    pub fn add_field_mapping(&self, mapping: FieldMapping) {
        let rejected = {
            let mut state = self.shared.state.lock();
            let mut merged = FieldMapping::clone(&state.field_mapping);
            let rejected = merged.merge(&mapping);
            state.field_mapping = Arc::new(merged);
            rejected
        };
        Self::report_rejected(&rejected);
    }

    /// Replace the active field mapping, dropping entries with reserved names
    pub fn set_field_mapping(&self, mapping: FieldMapping) {
        let (validated, rejected) = FieldMapping::validated(&mapping);
        self.shared.state.lock().field_mapping = Arc::new(validated);
        Self::report_rejected(&rejected);
    }

    fn report_rejected(rejected: &[LoggerError]) {
        for err in rejected {
            eprintln!("[LOGGER WARNING] {}", err);
        }
    }

    /// Install a hook called after every emission at exactly `level`.
    ///
    /// Hooks run on the emitting thread in installation order, after the lock
    /// has been released.
    pub fn install_hook<F>(&self, level: LogLevel, hook: F)
    where
        F: Fn(&Timestamp, LogLevel, &str) + Send + Sync + 'static,
    {
        self.shared.state.lock().hooks.install(level, hook);
    }

    pub fn hook_count(&self, level: LogLevel) -> usize {
        self.shared.state.lock().hooks.count(level)
    }

    /// Replace what happens after a fatal event (default: `std::process::exit`)
    pub fn set_exit_handler<F>(&self, handler: F)
    where
        F: Fn(i32) + Send + Sync + 'static,
    {
        self.shared.state.lock().exit_handler = Arc::new(handler);
    }

    /// Apply a configuration.
    ///
    /// A `path` takes precedence over `writer`; the file is truncated or
    /// appended to per `truncate_on_start`. If it cannot be opened the error is
    /// logged at fatal level, which terminates the process. Without a path the
    /// writer is replaced by `writer`, or cleared if none is given.
    pub fn configure(&self, config: LoggerConfig) {
        let LoggerConfig {
            log_level,
            path,
            truncate_on_start,
            std_out,
            format,
            formatter,
            writer,
        } = config;

        self.set_log_level(log_level);
        self.set_std_out(std_out);

        if let Some(formatter) = formatter.or_else(|| format.map(|f| f.formatter())) {
            self.set_shared_formatter(formatter);
        }

        match path.filter(|p| !p.as_os_str().is_empty()) {
            Some(path) => match open_log_file(&path, truncate_on_start) {
                Ok(file) => self.set_writer(Some(Box::new(file))),
                Err(e) => self.fatal(e),
            },
            None => self.set_writer(writer),
        }
    }

    /// Flush the writer sink and the standard streams
    pub fn flush(&self) -> Result<()> {
        let mut state = self.shared.state.lock();
        if let Some(writer) = state.writer.as_mut() {
            writer
                .flush()
                .map_err(|e| LoggerError::io_operation("flushing log output", "writer sink", e))?;
        }
        if state.std_out {
            io::stdout()
                .flush()
                .map_err(|e| LoggerError::io_operation("flushing log output", "stdout", e))?;
            io::stderr()
                .flush()
                .map_err(|e| LoggerError::io_operation("flushing log output", "stderr", e))?;
        }
        Ok(())
    }
}

impl Log for Logger {
    fn log_level(&self) -> LogLevel {
        self.shared.min_level()
    }

    fn log_args(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        self.shared.dispatch(level, args, None);
    }

    fn fields(&self) -> Arc<Fields> {
        Arc::clone(&self.shared.state.lock().fields)
    }

    fn field_mapping(&self) -> Arc<FieldMapping> {
        Arc::clone(&self.shared.state.lock().field_mapping)
    }

    fn with_scope(&self, fields: Fields) -> ScopedLogger {
        let (scope_fields, field_mapping) = {
            let state = self.shared.state.lock();
            (
                state.fields.merged(&fields),
                Arc::clone(&state.field_mapping),
            )
        };
        ScopedLogger::new(
            Arc::clone(&self.shared),
            Arc::new(scope_fields),
            field_mapping,
        )
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(None, LogLevel::Info, true)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state.lock();
        f.debug_struct("Logger")
            .field("min_level", &self.shared.min_level())
            .field("std_out", &state.std_out)
            .field("has_writer", &state.writer.is_some())
            .field("formatter", &state.formatter.name())
            .field("fields", &state.fields)
            .field("field_mapping", &state.field_mapping)
            .field("hooks", &state.hooks)
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use scopelog::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .std_out(false)
///     .formatter(JsonFormatter::compact())
///     .fields(Fields::new().with_field("service", "api"))
///     .field_mapping(FieldMapping::new().with_mapping("service", "svc"))
///     .hook(LogLevel::Error, |_, _, message| eprintln!("ALERT: {}", message))
///     .build();
///
/// assert_eq!(logger.log_level(), LogLevel::Debug);
/// assert_eq!(logger.hook_count(LogLevel::Error), 1);
/// ```
pub struct LoggerBuilder {
    min_level: LogLevel,
    writer: Option<Sink>,
    std_out: bool,
    formatter: Option<Arc<dyn Formatter>>,
    fields: Fields,
    field_mapping: FieldMapping,
    hooks: HookRegistry,
    exit_handler: Option<ExitHandler>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Info,
            writer: None,
            std_out: true,
            formatter: None,
            fields: Fields::new(),
            field_mapping: FieldMapping::new(),
            hooks: HookRegistry::new(),
            exit_handler: None,
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set the writer sink
    #[must_use = "builder methods return a new value"]
    pub fn writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.writer = Some(Box::new(writer));
        self
    }

    /// Enable or disable standard stream output (default: enabled)
    #[must_use = "builder methods return a new value"]
    pub fn std_out(mut self, enable: bool) -> Self {
        self.std_out = enable;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn fields(mut self, fields: Fields) -> Self {
        self.fields = fields;
        self
    }

    /// Merge a field mapping; reserved short names are dropped with a warning
    #[must_use = "builder methods return a new value"]
    pub fn field_mapping(mut self, mapping: FieldMapping) -> Self {
        let rejected = self.field_mapping.merge(&mapping);
        Logger::report_rejected(&rejected);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn hook<F>(mut self, level: LogLevel, hook: F) -> Self
    where
        F: Fn(&Timestamp, LogLevel, &str) + Send + Sync + 'static,
    {
        self.hooks.install(level, hook);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn exit_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(i32) + Send + Sync + 'static,
    {
        self.exit_handler = Some(Arc::new(handler));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let logger = Logger::new(self.writer, self.min_level, self.std_out);

        {
            let mut state = logger.shared.state.lock();
            if let Some(formatter) = self.formatter {
                state.formatter = formatter;
            }
            state.fields = Arc::new(self.fields);
            state.field_mapping = Arc::new(self.field_mapping);
            state.hooks = self.hooks;
            if let Some(exit_handler) = self.exit_handler {
                state.exit_handler = exit_handler;
            }
        }

        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
