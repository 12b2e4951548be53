pub mod config;
pub mod error;
pub mod harness;
pub mod rectangle;
pub mod workload;

pub use config::BenchConfig;
pub use error::{Error, Result};
pub use harness::{measure, PerCallUnit, Report, Sample};
pub use rectangle::Rectangle;
pub use workload::{fast_sum8, slow_compute};

/// Initialise `env_logger` for a binary, defaulting to `warn`.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}
