//! Benchmark for slicing seekable and scan-only sequences.
//!
//! A slice of a seekable source jumps straight to each ordinal; a slice of
//! a filtered source has to walk past every skipped element. Both are
//! compared against slicing a plain `Vec` iterator.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lazyseq::prelude::*;
use std::hint::black_box;

// =============================================================================
// Tail slice Benchmark
// =============================================================================

fn benchmark_tail_slice(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("tail_slice");

    for size in [1_000, 10_000, 100_000] {
        let values: Vec<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("seek", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut slice = from_values(values.clone()).slice(-10, None).unwrap();
                black_box(slice.sum().unwrap())
            });
        });

        group.bench_with_input(BenchmarkId::new("scan", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut slice = from_values(values.clone())
                    .filter(|_, _| true)
                    .slice(size - 10, None)
                    .unwrap();
                black_box(slice.sum().unwrap())
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let total: i64 = values
                    .clone()
                    .into_iter()
                    .skip(usize::try_from(size - 10).unwrap_or(0))
                    .sum();
                black_box(total)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Stepped slice Benchmark
// =============================================================================

fn benchmark_stepped_slice(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("stepped_slice");

    for size in [1_000_i64, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("range", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut slice = range(0, black_box(size), 1)
                    .unwrap()
                    .slice_step(0, None, 7)
                    .unwrap();
                black_box(slice.sum().unwrap())
            });
        });

        group.bench_with_input(BenchmarkId::new("count_scan", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut slice = count(0, 1)
                    .filter(|_, _| true)
                    .slice_step(0, Some(black_box(size)), 7)
                    .unwrap();
                black_box(slice.sum().unwrap())
            });
        });

        group.bench_with_input(BenchmarkId::new("backwards", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut slice = range(0, black_box(size), 1)
                    .unwrap()
                    .slice_step(-1, None, -7)
                    .unwrap();
                black_box(slice.sum().unwrap())
            });
        });
    }

    group.finish();
}

// =============================================================================
// Pipeline Benchmark
// =============================================================================

fn benchmark_pipeline(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("pipeline");

    for size in [1_000_i64, 10_000] {
        group.bench_with_input(
            BenchmarkId::new("map_filter_unique", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut pipeline = range(0, size, 1)
                        .unwrap()
                        .map(|value, _| value % 97)
                        .filter(|value, _| value % 2 == 0)
                        .unique();
                    black_box(pipeline.count().unwrap())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_tail_slice,
    benchmark_stepped_slice,
    benchmark_pipeline
);
criterion_main!(benches);
