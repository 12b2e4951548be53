use hotpath_bench::{fast_sum8, slow_compute};
use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use std::hint::black_box;

#[library_benchmark]
#[bench::small(1, 2_000)]
#[bench::medium(1, 20_000)]
fn bench_slow_compute(seed: i64, iterations: i32) -> i64 {
    slow_compute(black_box(seed), black_box(iterations))
}

#[library_benchmark]
fn bench_fast_sum8() -> i64 {
    fast_sum8(
        black_box(1),
        black_box(2),
        black_box(3),
        black_box(4),
        black_box(5),
        black_box(6),
        black_box(7),
        black_box(8),
    )
}

library_benchmark_group!(name = benches; benchmarks = bench_slow_compute, bench_fast_sum8);
main!(library_benchmark_groups = benches);
