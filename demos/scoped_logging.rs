//! Scoped logging example
//!
//! Demonstrates scoped child loggers, compact JSON with field mappings and
//! level hooks.
//!
//! Run with: cargo run --example scoped_logging

use scopelog::prelude::*;
use scopelog::{fields, info};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn handle_request(logger: &impl Log, request_id: u64, user: &str) {
    let request = logger.with_scope(fields! { "request_id" => request_id, "user" => user });
    request.info("Request received");

    let db = request.with_scope(fields! { "component" => "db" });
    db.debug("Query planned");
    info!(db, "Fetched {} rows", 3);

    if user == "mallory" {
        request.error("Permission denied");
    }
}

fn main() -> Result<()> {
    println!("=== scopelog - Scoped Logging Example ===\n");

    let errors = Arc::new(AtomicUsize::new(0));
    let errors_clone = Arc::clone(&errors);

    let logger = Logger::builder()
        .min_level(LogLevel::Debug)
        .formatter(JsonFormatter::compact())
        .fields(fields! { "service" => "accounts", "version" => "1.4.2" })
        .field_mapping(
            FieldMapping::new()
                .with_mapping("request_id", "rid")
                .with_mapping("service", "svc"),
        )
        .hook(LogLevel::Error, move |_, _, message| {
            errors_clone.fetch_add(1, Ordering::Relaxed);
            eprintln!("   [alert] {}", message);
        })
        .build();

    println!("1. Root logger:");
    logger.info("Service started");

    println!("\n2. Request scopes:");
    handle_request(&logger, 1, "alice");
    handle_request(&logger, 2, "mallory");

    println!("\n3. Scopes keep their fields after the root changes:");
    let worker = logger.with_scope(fields! { "worker" => 1 });
    logger.set_fields(Some(fields! { "service" => "accounts-v2" }));
    worker.info("Still reports the original service");
    logger.info("Root reports the new service");

    println!("\nErrors seen by hook: {}", errors.load(Ordering::Relaxed));
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
