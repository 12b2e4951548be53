use hotpath_bench::{harness, init_logging, BenchConfig};

fn main() {
    init_logging();
    let config = BenchConfig::from_env();
    log::debug!("{config:?}");

    println!("Rust Native Benchmark");
    println!("=====================\n");
    println!("{}\n", harness::fast_sum_report(config.fast_calls));
    println!(
        "{}",
        harness::slow_compute_report(config.slow_calls, config.slow_iterations)
    );
}
