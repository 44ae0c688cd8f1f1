//! Stress tests for concurrent logging
//!
//! These tests verify:
//! - Lines from many threads are never interleaved or lost
//! - Scopes derived while the root is being reconfigured stay consistent
//! - Hooks see every emission under contention

use scopelog::prelude::*;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

const THREADS: usize = 8;
const PER_THREAD: usize = 500;

/// Every line written concurrently must parse as a whole JSON object
#[test]
fn test_concurrent_json_lines_intact() {
    let buffer = SharedBuffer::new();
    let logger = Logger::builder()
        .writer(buffer.clone())
        .std_out(false)
        .formatter(JsonFormatter::new())
        .build();

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let scope = logger.with_scope(Fields::new().with_field("thread", thread_id));
            thread::spawn(move || {
                for seq in 0..PER_THREAD {
                    scope.infof(format_args!("message {} from {}", seq, thread_id));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let lines = buffer.lines();
    assert_eq!(lines.len(), THREADS * PER_THREAD);

    let mut seen = HashSet::new();
    for line in &lines {
        let parsed: serde_json::Value =
            serde_json::from_str(line).expect("interleaved or truncated line");
        let thread_id = parsed["thread"].as_u64().expect("thread field");
        let message = parsed["message"].as_str().expect("message").to_string();
        assert!(message.ends_with(&format!("from {}", thread_id)));
        assert!(seen.insert(message));
    }
}

/// Per-thread ordering is preserved in the file
#[test]
fn test_concurrent_file_logging_ordered_per_thread() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("stress.log");

    let logger = Logger::default();
    logger.configure(
        LoggerConfig::new()
            .with_path(&log_file)
            .with_truncate_on_start(true)
            .with_log_level(LogLevel::Debug),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let logger = logger.clone();
            thread::spawn(move || {
                for seq in 0..PER_THREAD {
                    logger.debugf(format_args!("t{} seq {}", thread_id, seq));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("logging thread panicked");
    }
    logger.flush().expect("Failed to flush");

    let content = std::fs::read_to_string(&log_file).expect("Failed to read log file");
    let mut next_seq = vec![0usize; THREADS];
    let mut total = 0;

    for line in content.lines() {
        let body = line.split(" DBG ").nth(1).expect("malformed line");
        let (thread_part, seq_part) = body.split_once(" seq ").expect("malformed body");
        let thread_id: usize = thread_part.trim_start_matches('t').parse().unwrap();
        let seq: usize = seq_part.parse().unwrap();

        assert_eq!(seq, next_seq[thread_id], "out of order for thread {}", thread_id);
        next_seq[thread_id] += 1;
        total += 1;
    }

    assert_eq!(total, THREADS * PER_THREAD);
}

/// Scopes derived during concurrent `set_fields` see one complete field set
#[test]
fn test_scope_derivation_during_set_fields() {
    let buffer = SharedBuffer::new();
    let logger = Logger::new(Some(Box::new(buffer.clone())), LogLevel::Info, false);
    logger.set_formatter(JsonFormatter::new());
    logger.set_fields(Some(
        Fields::new().with_field("generation", 0).with_field("check", 0),
    ));

    let writer = {
        let logger = logger.clone();
        thread::spawn(move || {
            for generation in 1..=200 {
                logger.set_fields(Some(
                    Fields::new()
                        .with_field("generation", generation)
                        .with_field("check", generation),
                ));
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let logger = logger.clone();
            thread::spawn(move || {
                for _ in 0..200 {
                    logger
                        .with_scope(Fields::new().with_field("reader", true))
                        .info("tick");
                }
            })
        })
        .collect();

    writer.join().expect("writer panicked");
    for reader in readers {
        reader.join().expect("reader panicked");
    }

    let lines = buffer.lines();
    assert_eq!(lines.len(), 800);
    for line in &lines {
        let parsed: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(parsed["generation"], parsed["check"]);
        assert_eq!(parsed["reader"], true);
    }
}

#[test]
fn test_hooks_under_contention() {
    let logger = Logger::builder().std_out(false).build();
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_clone = Arc::clone(&calls);
    logger.install_hook(LogLevel::Warning, move |_, _, _| {
        calls_clone.fetch_add(1, Ordering::Relaxed);
    });

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let logger = logger.clone();
            thread::spawn(move || {
                for _ in 0..PER_THREAD {
                    logger.warning("contended");
                    logger.info("no hook");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    assert_eq!(calls.load(Ordering::Relaxed), THREADS * PER_THREAD);
}

/// Level changes racing with emission never produce partial output
#[test]
fn test_level_changes_during_logging() {
    let buffer = SharedBuffer::new();
    let logger = Logger::new(Some(Box::new(buffer.clone())), LogLevel::Debug, false);

    let toggler = {
        let logger = logger.clone();
        thread::spawn(move || {
            for i in 0..1000 {
                let level = if i % 2 == 0 { LogLevel::Error } else { LogLevel::Debug };
                logger.set_log_level(level);
            }
        })
    };

    let emitters: Vec<_> = (0..4)
        .map(|_| {
            let logger = logger.clone();
            thread::spawn(move || {
                for _ in 0..PER_THREAD {
                    logger.info("maybe");
                    logger.error("always");
                }
            })
        })
        .collect();

    toggler.join().expect("toggler panicked");
    for emitter in emitters {
        emitter.join().expect("emitter panicked");
    }

    let lines = buffer.lines();
    let errors = lines.iter().filter(|l| l.ends_with(" ERR always")).count();
    let infos = lines.iter().filter(|l| l.ends_with(" NFO maybe")).count();
    assert_eq!(errors, 4 * PER_THREAD);
    assert_eq!(errors + infos, lines.len());
}
