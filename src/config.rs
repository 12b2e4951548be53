use std::env;
use std::num::NonZeroU64;
use std::str::FromStr;

use log::warn;

pub const DEFAULT_FAST_CALLS: NonZeroU64 = match NonZeroU64::new(1_000_000) {
    Some(n) => n,
    None => unreachable!(),
};
pub const DEFAULT_SLOW_CALLS: NonZeroU64 = match NonZeroU64::new(100) {
    Some(n) => n,
    None => unreachable!(),
};
pub const DEFAULT_SLOW_ITERATIONS: i32 = 1_000_000;

pub const FAST_CALLS_VAR: &str = "HOTPATH_FAST_CALLS";
pub const SLOW_CALLS_VAR: &str = "HOTPATH_SLOW_CALLS";
pub const SLOW_ITERATIONS_VAR: &str = "HOTPATH_SLOW_ITERATIONS";

/// Repetition counts for the benchmark binaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    pub fast_calls: NonZeroU64,
    pub slow_calls: NonZeroU64,
    pub slow_iterations: i32,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            fast_calls: DEFAULT_FAST_CALLS,
            slow_calls: DEFAULT_SLOW_CALLS,
            slow_iterations: DEFAULT_SLOW_ITERATIONS,
        }
    }
}

impl BenchConfig {
    /// Defaults, overridden by any valid `HOTPATH_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) but reads values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            fast_calls: parse_or(&lookup, FAST_CALLS_VAR, defaults.fast_calls),
            slow_calls: parse_or(&lookup, SLOW_CALLS_VAR, defaults.slow_calls),
            slow_iterations: parse_or(&lookup, SLOW_ITERATIONS_VAR, defaults.slow_iterations),
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Copy,
    T::Err: std::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(err) => {
            warn!("ignoring {key}={raw:?}: {err}");
            default
        }
    }
}
