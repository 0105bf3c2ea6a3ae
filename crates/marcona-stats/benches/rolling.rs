//! Rolling-mean throughput benchmark.
//!
//! Run with: `cargo bench --package marcona-stats`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use marcona_stats::moving_average;

fn rolling_benchmark(c: &mut Criterion) {
    let values: Vec<f64> = (0..100_000)
        .map(|i| 100.0 + f64::from(i % 251) * 0.25)
        .collect();

    let mut group = c.benchmark_group("moving_average");
    group.throughput(Throughput::Elements(values.len() as u64));

    for window in [5usize, 20, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(window), &window, |b, &w| {
            b.iter(|| moving_average(black_box(&values), w));
        });
    }

    group.finish();
}

criterion_group!(benches, rolling_benchmark);
criterion_main!(benches);
