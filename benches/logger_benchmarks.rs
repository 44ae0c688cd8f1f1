//! Criterion benchmarks for scopelog

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use scopelog::prelude::*;
use std::io;

fn sink_logger(level: LogLevel) -> Logger {
    Logger::new(Some(Box::new(io::sink())), level, false)
}

fn sample_fields() -> Fields {
    Fields::new()
        .with_field("service", "checkout")
        .with_field("user_id", 12345)
        .with_field("latency_ms", 12.5)
        .with_field("cached", false)
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("new", |b| {
        b.iter(|| black_box(sink_logger(LogLevel::Info)));
    });

    group.bench_function("builder", |b| {
        b.iter(|| {
            let logger = Logger::builder()
                .writer(io::sink())
                .std_out(false)
                .fields(sample_fields())
                .build();
            black_box(logger)
        });
    });

    group.finish();
}

// ============================================================================
// Formatter Benchmarks
// ============================================================================

fn bench_formatters(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatters");
    group.throughput(Throughput::Elements(1));

    let formatters: [(&str, Box<dyn Fn(&Logger)>); 3] = [
        ("text", Box::new(|l: &Logger| l.set_formatter(TextFormatter::new()))),
        ("json", Box::new(|l: &Logger| l.set_formatter(JsonFormatter::new()))),
        (
            "json_compact",
            Box::new(|l: &Logger| l.set_formatter(JsonFormatter::compact())),
        ),
    ];

    for (name, install) in formatters.iter() {
        let logger = sink_logger(LogLevel::Info);
        install(&logger);
        logger.set_fields(Some(sample_fields()));
        logger.add_field_mapping(FieldMapping::new().with_mapping("service", "svc"));

        group.bench_function(*name, |b| {
            b.iter(|| logger.info(black_box("Request processed")));
        });
    }

    group.finish();
}

// ============================================================================
// Scope Benchmarks
// ============================================================================

fn bench_scopes(c: &mut Criterion) {
    let mut group = c.benchmark_group("scopes");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger(LogLevel::Info);
    logger.set_fields(Some(sample_fields()));

    group.bench_function("derive", |b| {
        b.iter(|| black_box(logger.with_scope(Fields::new().with_field("request_id", 7))));
    });

    let scope = logger.with_scope(Fields::new().with_field("request_id", 7));
    group.bench_function("emit", |b| {
        b.iter(|| scope.info(black_box("Scoped message")));
    });

    group.finish();
}

// ============================================================================
// Level Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger(LogLevel::Warning);

    group.bench_function("below_threshold", |b| {
        b.iter(|| logger.debug(black_box("This should be filtered")));
    });

    group.bench_function("below_threshold_formatted", |b| {
        b.iter(|| logger.debugf(format_args!("value {}", black_box(42))));
    });

    group.bench_function("above_threshold", |b| {
        b.iter(|| logger.error(black_box("This should be logged")));
    });

    group.finish();
}

// ============================================================================
// Concurrent Logging Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    let logger = sink_logger(LogLevel::Info);

    group.bench_function("multi_thread_4", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let logger = logger.clone();
                    std::thread::spawn(move || {
                        for _ in 0..100 {
                            logger.info(black_box("Concurrent message"));
                        }
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_logger_creation,
    bench_formatters,
    bench_scopes,
    bench_level_filtering,
    bench_concurrent_logging
);

criterion_main!(benches);
