use std::hint::black_box;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use othello_core::perft::perft_root;

/// (depth, leaf count) pairs measured from the initial position.
const CASES: [(u32, u64); 3] = [(6, 8_200), (8, 390_216), (9, 3_005_320)];

fn perft_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_root");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(8));

    for (depth, expected) in CASES {
        assert_eq!(perft_root(depth), expected, "leaf count at depth {depth}");

        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| black_box(perft_root(black_box(depth))));
        });
    }

    group.finish();
}

criterion_group!(benches, perft_benchmark);
criterion_main!(benches);
