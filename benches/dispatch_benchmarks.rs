//! Criterion benchmarks for logmux

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use logmux::prelude::*;

/// Discards everything; isolates dispatch cost from sink cost.
struct NullStream;

impl LogStream for NullStream {
    fn write(&mut self, text: &str) -> Result<usize> {
        Ok(text.len())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

fn bench_format_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_render");
    group.throughput(Throughput::Elements(1));

    let format = RecordFormat::default();
    let record = LogRecord::new(Severity::Info, "bench", "a log message of typical length");

    group.bench_function("default_template", |b| {
        b.iter(|| {
            let line = format.render(black_box(&record));
            black_box(line)
        });
    });

    let message_only = RecordFormat::message_only();
    group.bench_function("message_only", |b| {
        b.iter(|| {
            let line = message_only.render(black_box(&record));
            black_box(line)
        });
    });

    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    let registry = Registry::new();
    let _handler = Handler::attach(
        &registry,
        Box::new(NullStream),
        HandlerConfig::new(Severity::Debug),
    );
    let logger = Logger::new("bench", &registry);

    group.bench_function("single_handler", |b| {
        b.iter(|| {
            logger.info(black_box("Info message")).unwrap();
        });
    });

    let fanout = Registry::new();
    for min in [Severity::Debug, Severity::Info, Severity::Warning, Severity::Error] {
        let _handler = Handler::attach(&fanout, Box::new(NullStream), HandlerConfig::new(min));
    }
    let fanout_logger = Logger::new("bench", &fanout);

    group.bench_function("four_handlers", |b| {
        b.iter(|| {
            fanout_logger.error(black_box("Error message")).unwrap();
        });
    });

    group.finish();
}

fn bench_band_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("band_filtering");
    group.throughput(Throughput::Elements(1));

    let registry = Registry::new();
    let _handler = Handler::attach(
        &registry,
        Box::new(NullStream),
        HandlerConfig::new(Severity::Warning).with_max_level(Severity::Warning),
    );
    let logger = Logger::new("bench", &registry);

    group.bench_function("below_band", |b| {
        b.iter(|| {
            logger.debug(black_box("filtered out")).unwrap();
        });
    });

    group.bench_function("inside_band", |b| {
        b.iter(|| {
            logger.warning(black_box("delivered")).unwrap();
        });
    });

    group.bench_function("above_band", |b| {
        b.iter(|| {
            logger.critical(black_box("filtered out")).unwrap();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_format_render, bench_dispatch, bench_band_filtering);
criterion_main!(benches);
