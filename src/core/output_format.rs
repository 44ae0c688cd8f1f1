//! Output format selection for configuration
//!
//! Names the built-in formatters so a format can be chosen from a config file:
//! - Text: Human-readable format (default)
//! - Json: One JSON object per line with full key names
//! - JsonCompact: JSON with `@m`/`@t`/`@l` and mapped field names

use super::formatter::Formatter;
use crate::formatters::{JsonFormatter, TextFormatter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Output format for log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable text format (default)
    ///
    /// Example: `2025-01-08 10:30:45:123456 NFO Request processed [user: 42]`
    #[default]
    Text,

    /// JSON format for machine processing
    ///
    /// Example: `{"message":"Request processed","timestamp":"2025-01-08 10:30:45:123456","level":"Info"}`
    Json,

    /// Compact JSON format
    ///
    /// Example: `{"@m":"Request processed","@t":"2025-01-08 10:30:45:123456","@l":"Info"}`
    JsonCompact,
}

impl OutputFormat {
    /// Build the formatter for this output format
    pub fn formatter(&self) -> Arc<dyn Formatter> {
        match self {
            OutputFormat::Text => Arc::new(TextFormatter::new()),
            OutputFormat::Json => Arc::new(JsonFormatter::new()),
            OutputFormat::JsonCompact => Arc::new(JsonFormatter::compact()),
        }
    }
}
