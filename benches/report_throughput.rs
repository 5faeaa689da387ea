//! Report generation benchmarks
//!
//! Measures layout alone and layout plus PDF encoding for growing rosters.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rollbook::{PipelineBuilder, Record, ReportLabels};
use std::hint::black_box;
use std::io::Cursor;

fn roster(count: usize) -> Vec<Record> {
    (1..=count)
        .map(|i| Record::new(format!("S{:05}", i), format!("Student Number {}", i), i % 4 != 0))
        .collect()
}

fn labels() -> ReportLabels {
    ReportLabels::new("19-10-2026", "Oct 19, 2026 at 09:30")
}

fn benchmark_layout_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_only");
    let pipeline = PipelineBuilder::new().build().expect("Failed to build pipeline");
    let labels = labels();

    for record_count in [10, 100, 1_000, 10_000] {
        let records = roster(record_count);
        group.throughput(Throughput::Elements(record_count as u64));
        group.bench_with_input(BenchmarkId::new("records", record_count), &records, |b, records| {
            b.iter(|| black_box(pipeline.layout(records, &labels)));
        });
    }

    group.finish();
}

fn benchmark_full_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_export");
    let pipeline = PipelineBuilder::new().build().expect("Failed to build pipeline");
    let labels = labels();

    for record_count in [10, 100, 1_000] {
        let records = roster(record_count);
        group.throughput(Throughput::Elements(record_count as u64));
        group.bench_with_input(BenchmarkId::new("records", record_count), &records, |b, records| {
            b.iter(|| {
                pipeline
                    .generate(records, &labels, Cursor::new(Vec::new()))
                    .expect("Failed to generate PDF")
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_layout_only, benchmark_full_export);
criterion_main!(benches);
