//! File logging example
//!
//! Demonstrates configuring a logger from JSON to write to a file.
//!
//! Run with: cargo run --example file_logging

use scopelog::prelude::*;

fn main() -> Result<()> {
    println!("=== scopelog - File Logging Example ===\n");

    let log_path = std::env::temp_dir().join("scopelog_example.log");

    let config_json = format!(
        r#"{{ "log_level": "Debug", "path": {}, "truncate_on_start": true, "std_out": true, "format": "json" }}"#,
        serde_json::to_string(&log_path.display().to_string())?
    );
    let config: LoggerConfig = serde_json::from_str(&config_json)?;
    println!("Configuration: {:?}\n", config);

    let logger = Logger::default();
    logger.configure(config);
    logger.set_fields(Some(Fields::new().with_field("pid", std::process::id())));

    println!("Writing log messages to {}", log_path.display());

    for i in 1..=5 {
        logger.infof(format_args!("Log message #{}", i));
    }
    logger.warning("This is a warning");
    logger.error("This is an error");
    logger.flush()?;

    let content = std::fs::read_to_string(&log_path)?;
    println!("\nFile now holds {} lines", content.lines().count());

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
