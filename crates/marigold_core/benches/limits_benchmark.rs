//! # Interval Set Benchmark
//!
//! Measures insert cost for the span patterns a raycast scan produces:
//! - Scattered spans that stay disjoint until the set fills
//! - Left-to-right sweeps that merge into a single span
//! - A full scan of a 320-column surface through `ScanCoverage`
//!
//! Run with: `cargo bench --package marigold_core`

// Benchmarks don't need docs
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use marigold_core::{IntervalSet, ScanConfig, ScanCoverage};

/// Benchmark: fill a set with disjoint spans in shuffled order.
fn bench_disjoint_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("disjoint_fill");

    for capacity in [16usize, 120, 1024] {
        // Spans 4 wide with 4-column gaps, in a stride order so most inserts
        // land in the middle of the set.
        let spans: Vec<(i32, i32)> = (0..capacity)
            .map(|i| (i * 7919) % capacity)
            .map(|slot| {
                let start = i32::try_from(slot * 8).unwrap_or(i32::MAX - 8);
                (start, start + 3)
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(capacity), &spans, |b, spans| {
            let mut set: IntervalSet = IntervalSet::new(capacity).unwrap();
            b.iter(|| {
                set.reset();
                for &(start, end) in spans {
                    let _ = black_box(set.insert(start, end));
                }
                set.len()
            });
        });
    }

    group.finish();
}

/// Benchmark: adjacent spans collapsing into one.
fn bench_merging_sweep(c: &mut Criterion) {
    c.bench_function("merging_sweep_320", |b| {
        let mut set: IntervalSet = IntervalSet::new(120).unwrap();
        b.iter(|| {
            set.reset();
            for column in 0..320 {
                let _ = black_box(set.insert(column, column));
            }
            set.len()
        });
    });
}

/// Benchmark: a full scan with out-of-order column spans.
fn bench_scan_coverage(c: &mut Criterion) {
    c.bench_function("scan_coverage_320", |b| {
        let mut scan = ScanCoverage::new(ScanConfig::default()).unwrap();
        b.iter(|| {
            scan.next_scan();
            for step in 0..64 {
                let start = (step * 37) % 320;
                let _ = black_box(scan.mark(start, start + 9));
            }
            scan.is_complete()
        });
    });
}

criterion_group!(
    benches,
    bench_disjoint_fill,
    bench_merging_sweep,
    bench_scan_coverage,
);
criterion_main!(benches);
