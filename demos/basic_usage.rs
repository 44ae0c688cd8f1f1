//! Basic logger usage example
//!
//! Demonstrates leveled logging to the standard streams, level filtering and
//! the formatting macros.
//!
//! Run with: cargo run --example basic_usage

use scopelog::prelude::*;
use scopelog::{info, warning};

fn main() -> Result<()> {
    println!("=== scopelog - Basic Usage Example ===\n");

    // Debug and up, printed to stdout (Debug/Info/Warning) or stderr (Error/Fatal)
    let logger = Logger::new(None, LogLevel::Debug, true);

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warning("This is a warning message");
    logger.error("This is an error message");

    println!("\n2. Logging with a higher minimum level:");
    logger.set_log_level(LogLevel::Warning);
    println!("   Minimum level set to Warning - debug and info won't show:");
    logger.debug("Debug message (hidden)");
    logger.info("Info message (hidden)");
    logger.warning("Warning message (visible)");

    println!("\n3. Formatting macros:");
    logger.set_log_level(LogLevel::Info);
    let port = 8080;
    info!(logger, "Server listening on port {}", port);
    warning!(logger, "{} of {} workers busy", 7, 8);

    println!("\n4. Fields on every line:");
    logger.set_fields(Some(Fields::new().with_field("service", "demo")));
    logger.info("Fields are appended in brackets");

    println!("\n5. Fatal with a custom exit handler:");
    logger.set_exit_handler(|code| println!("   (would exit with status {})", code));
    logger.fatal("This is a fatal message");

    logger.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
