//! JSON formatter for structured logging

use crate::core::{format_timestamp, Formatter, LogEvent, Result};
use serde_json::{Map, Value};
use std::io;

pub const MESSAGE_KEY: &str = "message";
pub const TIMESTAMP_KEY: &str = "timestamp";
pub const LEVEL_KEY: &str = "level";

pub const COMPACT_MESSAGE_KEY: &str = "@m";
pub const COMPACT_TIMESTAMP_KEY: &str = "@t";
pub const COMPACT_LEVEL_KEY: &str = "@l";

/// JSON formatter, one object per line (JSONL).
///
/// Built-in keys come first in the order message, timestamp, level, followed by
/// the custom fields. Custom fields are inserted last, so a custom field named
/// like a built-in key replaces the built-in value.
///
/// In compact mode the built-in keys become `@m`, `@t` and `@l` and custom keys
/// are renamed through the logger's [`FieldMapping`](crate::FieldMapping).
///
/// Custom fields are written in two passes, each sorted by original key: first
/// the fields that keep their name, then the renamed ones. When a renamed field
/// lands on the name of another field, the renamed field wins; when two fields
/// are renamed to the same name, the one with the greater original key wins.
///
/// # Example
///
/// ```
/// use scopelog::prelude::*;
///
/// let buffer = SharedBuffer::new();
/// let logger = Logger::new(Some(Box::new(buffer.clone())), LogLevel::Info, false);
/// logger.set_formatter(JsonFormatter::new());
/// logger.set_fields(Some(Fields::new().with_field("userId", "abc")));
///
/// logger.info("hello");
///
/// let line = buffer.contents_string();
/// assert!(line.starts_with(r#"{"message":"hello","timestamp":""#));
/// assert!(line.ends_with("\"level\":\"Info\",\"userId\":\"abc\"}\n"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    compact: bool,
}

impl JsonFormatter {
    /// Non-compact formatter: full built-in names, custom keys never renamed
    pub fn new() -> Self {
        Self { compact: false }
    }

    /// Compact formatter: `@m`/`@t`/`@l` and mapped custom keys
    pub fn compact() -> Self {
        Self { compact: true }
    }

    pub fn is_compact(&self) -> bool {
        self.compact
    }

    fn builtin_keys(&self) -> (&'static str, &'static str, &'static str) {
        if self.compact {
            (COMPACT_MESSAGE_KEY, COMPACT_TIMESTAMP_KEY, COMPACT_LEVEL_KEY)
        } else {
            (MESSAGE_KEY, TIMESTAMP_KEY, LEVEL_KEY)
        }
    }

    /// Build the JSON object for an event without serializing it
    pub fn to_json_object(&self, event: &LogEvent<'_>) -> Map<String, Value> {
        let (message_key, timestamp_key, level_key) = self.builtin_keys();
        let mut json_obj = Map::with_capacity(3 + event.fields.len());

        json_obj.insert(
            message_key.to_string(),
            Value::String(event.message.to_string()),
        );
        json_obj.insert(
            timestamp_key.to_string(),
            Value::String(format_timestamp(event.timestamp)),
        );
        json_obj.insert(
            level_key.to_string(),
            Value::String(event.level.to_str().to_string()),
        );

        let mut kept = Vec::with_capacity(event.fields.len());
        let mut renamed = Vec::new();
        for (key, value) in event.fields.iter() {
            let name = if self.compact {
                event.field_mapping.resolve(key)
            } else {
                key.as_str()
            };
            if name == key.as_str() {
                kept.push((key.as_str(), name, value));
            } else {
                renamed.push((key.as_str(), name, value));
            }
        }
        kept.sort_unstable_by_key(|(key, _, _)| *key);
        renamed.sort_unstable_by_key(|(key, _, _)| *key);

        for (_, name, value) in kept.into_iter().chain(renamed) {
            json_obj.insert(name.to_string(), value.to_json_value());
        }

        json_obj
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, out: &mut dyn io::Write, event: &LogEvent<'_>) -> Result<()> {
        let json_obj = self.to_json_object(event);
        serde_json::to_writer(&mut *out, &json_obj)?;
        out.write_all(b"\n")?;
        Ok(())
    }

    fn name(&self) -> &str {
        if self.compact {
            "json-compact"
        } else {
            "json"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FieldMapping, Fields, LogLevel, Timestamp};
    use chrono::{Local, TimeZone};

    fn fixed_timestamp() -> Timestamp {
        Local
            .with_ymd_and_hms(2024, 3, 5, 7, 8, 9)
            .single()
            .expect("valid local datetime")
            + chrono::Duration::microseconds(42)
    }

    fn render(formatter: JsonFormatter, fields: &Fields, mapping: &FieldMapping) -> String {
        let ts = fixed_timestamp();
        let event = LogEvent::new(LogLevel::Info, "hello", &ts, fields, mapping);
        let mut buf = Vec::new();
        formatter.format(&mut buf, &event).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_non_compact_exact_line() {
        let fields = Fields::new().with_field("userId", "abc");
        let line = render(JsonFormatter::new(), &fields, &FieldMapping::new());
        assert_eq!(
            line,
            "{\"message\":\"hello\",\"timestamp\":\"2024-03-05 07:08:09:000042\",\"level\":\"Info\",\"userId\":\"abc\"}\n"
        );
    }

    #[test]
    fn test_non_compact_ignores_mapping() {
        let fields = Fields::new().with_field("name", "bob");
        let mapping = FieldMapping::new().with_mapping("name", "n");
        let line = render(JsonFormatter::new(), &fields, &mapping);

        let parsed: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["name"], "bob");
        assert!(parsed.get("n").is_none());
    }

    #[test]
    fn test_compact_renames_builtins_and_mapped_fields() {
        let fields = Fields::new().with_field("name", "bob").with_field("extra", "x");
        let mapping = FieldMapping::new().with_mapping("name", "n");
        let line = render(JsonFormatter::compact(), &fields, &mapping);

        assert!(line.starts_with(
            "{\"@m\":\"hello\",\"@t\":\"2024-03-05 07:08:09:000042\",\"@l\":\"Info\","
        ));
        assert!(line.ends_with("}\n"));

        let parsed: Map<String, Value> = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed.len(), 5);
        assert_eq!(parsed["n"], "bob");
        assert_eq!(parsed["extra"], "x");
        assert!(!parsed.contains_key("name"));
        assert!(!parsed.contains_key("message"));
    }

    #[test]
    fn test_custom_field_overrides_builtin() {
        let fields = Fields::new().with_field("level", "custom");
        let line = render(JsonFormatter::new(), &fields, &FieldMapping::new());

        let parsed: Map<String, Value> = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed["level"], "custom");
        assert_eq!(parsed.keys().nth(2).map(String::as_str), Some("level"));
    }

    #[test]
    fn test_field_value_types() {
        let fields = Fields::new()
            .with_field("count", 3)
            .with_field("ratio", 0.5)
            .with_field("ok", true)
            .with_field("none", None::<i64>);
        let line = render(JsonFormatter::new(), &fields, &FieldMapping::new());

        let parsed: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["count"], 3);
        assert_eq!(parsed["ratio"], 0.5);
        assert_eq!(parsed["ok"], true);
        assert!(parsed["none"].is_null());
    }

    #[test]
    fn test_renamed_field_wins_name_collision() {
        let mapping = FieldMapping::new().with_mapping("name", "n");

        for _ in 0..64 {
            // A fresh map per iteration gets a fresh hash seed
            let fields = Fields::new().with_field("name", "bob").with_field("n", "other");
            let line = render(JsonFormatter::compact(), &fields, &mapping);

            let parsed: Map<String, Value> = serde_json::from_str(&line).unwrap();
            assert_eq!(parsed["n"], "bob");
            assert!(!parsed.contains_key("name"));
            assert_eq!(parsed.len(), 4);
        }
    }

    #[test]
    fn test_two_fields_renamed_to_same_name() {
        let mapping = FieldMapping::new()
            .with_mapping("alpha", "x")
            .with_mapping("beta", "x");

        for _ in 0..64 {
            let fields = Fields::new().with_field("beta", 2).with_field("alpha", 1);
            let line = render(JsonFormatter::compact(), &fields, &mapping);

            let parsed: Value = serde_json::from_str(&line).unwrap();
            assert_eq!(parsed["x"], 2);
        }
    }

    #[test]
    fn test_custom_fields_sorted_by_key() {
        let fields = Fields::new()
            .with_field("zeta", 1)
            .with_field("alpha", 2)
            .with_field("mid", 3);
        let line = render(JsonFormatter::new(), &fields, &FieldMapping::new());

        let parsed: Map<String, Value> = serde_json::from_str(&line).unwrap();
        let keys: Vec<&str> = parsed.keys().skip(3).map(String::as_str).collect();
        assert_eq!(keys, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_names() {
        assert_eq!(JsonFormatter::new().name(), "json");
        assert_eq!(JsonFormatter::compact().name(), "json-compact");
    }
}
