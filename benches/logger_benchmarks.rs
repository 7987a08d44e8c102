//! Criterion benchmarks for logfmt_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use logfmt_logger::prelude::*;

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("builder", |b| {
        b.iter(|| {
            let logger = Logger::builder().appender(NoopAppender).build();
            black_box(logger)
        });
    });

    group.bench_function("sub", |b| {
        let logger = Logger::builder().appender(NoopAppender).build();
        b.iter(|| black_box(logger.sub("worker")));
    });

    group.bench_function("sub_with_labels", |b| {
        let logger = Logger::builder().appender(NoopAppender).build();
        b.iter(|| {
            black_box(
                logger.sub_with("worker", Labels::new().with_label("request_id", "abc-123")),
            )
        });
    });

    group.finish();
}

fn bench_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("emission");
    group.throughput(Throughput::Elements(1));

    let sink = BufferSink::new();
    let logger = Logger::builder()
        .appender(LogfmtAppender::new(sink.clone()))
        .build();

    group.bench_function("logfmt_plain", |b| {
        b.iter(|| {
            logger.info(black_box("benchmark message")).unwrap();
            sink.clear();
        });
    });

    let labeled = logger.sub_with(
        "bench",
        Labels::new()
            .with_label("worker", 3)
            .with_label("request_id", "abc-123"),
    );
    group.bench_function("logfmt_labeled", |b| {
        b.iter(|| {
            labeled.info(black_box("benchmark message")).unwrap();
            sink.clear();
        });
    });

    let filtered = Logger::builder()
        .level(LogLevel::Error)
        .appender(LogfmtAppender::new(sink.clone()))
        .build();
    group.bench_function("filtered_out", |b| {
        b.iter(|| {
            filtered.debug(black_box("dropped message")).unwrap();
        });
    });

    group.finish();
}

fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");
    group.throughput(Throughput::Elements(1));

    let formatter = LogfmtFormatter::new();
    let labels = Labels::new()
        .with_label("worker", 3)
        .with_label("request_id", "abc-123")
        .with_label("query", "SELECT * FROM users")
        .with_label("cached", true);

    group.bench_function("format_labels", |b| {
        b.iter(|| black_box(formatter.format_labels(labels.iter()).unwrap()));
    });

    let entry = LogEntry::new(LogLevel::Info, "benchmark message".to_string(), labels.clone());
    group.bench_function("format_entry", |b| {
        b.iter(|| black_box(formatter.format_entry(&entry).unwrap()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_logger_creation,
    bench_emission,
    bench_encoding
);
criterion_main!(benches);
