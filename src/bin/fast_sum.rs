use hotpath_bench::{harness, init_logging, BenchConfig};

fn main() {
    init_logging();
    let config = BenchConfig::from_env();
    println!("{}", harness::fast_sum_report(config.fast_calls));
}
