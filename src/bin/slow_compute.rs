use hotpath_bench::{harness, init_logging, BenchConfig};

fn main() {
    init_logging();
    let config = BenchConfig::from_env();
    println!(
        "{}",
        harness::slow_compute_report(config.slow_calls, config.slow_iterations)
    );
}
