//! Benchmark for lazy iterator pipelines.
//!
//! Compares pipelines built from `LazyIterator` combinators with the
//! equivalent `std::iter` pipelines to measure the cost of the
//! `OptionalValue` exhaustion protocol.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use monadic_iter::iter::{self, LazyIterator, Terminal};
use monadic_iter::monad::OptionalValue;
use std::hint::black_box;

// =============================================================================
// 1. map / filter / sum
// =============================================================================

fn benchmark_map_filter_sum(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_filter_sum");

    for size in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("lazy", size), &size, |bencher, &size| {
            bencher.iter(|| {
                black_box(
                    iter::from_iter(0..size)
                        .map(|x: u64| x * 3)
                        .filter(|x| x % 2 == 0)
                        .sum(),
                )
            });
        });

        group.bench_with_input(BenchmarkId::new("std", size), &size, |bencher, &size| {
            bencher.iter(|| {
                black_box(
                    (0..size)
                        .map(|x: u64| x * 3)
                        .filter(|x| x % 2 == 0)
                        .sum::<u64>(),
                )
            });
        });
    }

    group.finish();
}

// =============================================================================
// 2. Grouping Combinators
// =============================================================================

fn benchmark_grouping(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("grouping");
    let data: Vec<u32> = (0..4_096).collect();

    group.bench_function("chunk_8", |bencher| {
        bencher.iter(|| black_box(iter::from_iter(data.iter().copied()).chunk(8).count()));
    });

    group.bench_function("array_chunk_8", |bencher| {
        bencher.iter(|| {
            black_box(iter::from_iter(data.iter().copied()).array_chunk::<8>().count())
        });
    });

    group.bench_function("map_windows_4", |bencher| {
        bencher.iter(|| {
            black_box(
                iter::from_iter(data.iter().copied())
                    .map_windows(4, |window| window.iter().sum::<u32>())
                    .max(),
            )
        });
    });

    group.bench_function("group_by_mod_16", |bencher| {
        bencher.iter(|| {
            black_box(
                iter::from_iter(data.iter().copied())
                    .group_by(|x| x / 16)
                    .count(),
            )
        });
    });

    group.finish();
}

// =============================================================================
// 3. Nested Pipelines
// =============================================================================

fn benchmark_flat_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("flat_map");

    group.bench_function("lazy_flat_map_optional", |bencher| {
        bencher.iter(|| {
            black_box(
                iter::from_iter(0..10_000u32)
                    .flat_map(|x| {
                        if x % 3 == 0 {
                            OptionalValue::Absent
                        } else {
                            OptionalValue::Present(x)
                        }
                    })
                    .count(),
            )
        });
    });

    group.bench_function("std_flat_map_option", |bencher| {
        bencher.iter(|| {
            black_box(
                (0..10_000u32)
                    .flat_map(|x| if x % 3 == 0 { None } else { Some(x) })
                    .count(),
            )
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_map_filter_sum, benchmark_grouping, benchmark_flat_map);
criterion_main!(benches);
