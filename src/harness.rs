use std::fmt;
use std::hint::black_box;
use std::num::NonZeroU64;
use std::time::{Duration, Instant};

use log::debug;

use crate::workload::{fast_sum8, slow_compute};

/// Elapsed wall-clock time over a fixed number of workload calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub label: String,
    pub elapsed: Duration,
    pub calls: NonZeroU64,
    /// Last value the workload returned, kept so the calls stay observable.
    pub checksum: i64,
}

impl Sample {
    pub fn total_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    pub fn per_call_ns(&self) -> f64 {
        self.elapsed.as_nanos() as f64 / self.calls.get() as f64
    }

    pub fn per_call_ms(&self) -> f64 {
        self.total_ms() / self.calls.get() as f64
    }
}

/// Runs `workload` `calls` times back to back and times the whole loop.
///
/// The workload receives the zero-based call index. Every result goes through
/// [`black_box`], so none of the calls can be optimised away.
pub fn measure<F>(label: impl Into<String>, calls: NonZeroU64, mut workload: F) -> Sample
where
    F: FnMut(u64) -> i64,
{
    let label = label.into();
    debug!("measuring {label}: {calls} calls");

    let mut result = 0_i64;
    let start = Instant::now();
    for i in 0..calls.get() {
        result = black_box(workload(black_box(i)));
    }
    let elapsed = start.elapsed();
    let checksum = black_box(result);

    Sample {
        label,
        elapsed,
        calls,
        checksum,
    }
}

/// Unit used for the per-call line of a [`Report`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerCallUnit {
    Nanos,
    Millis,
}

/// Human-readable rendering of a [`Sample`].
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub sample: Sample,
    pub unit: PerCallUnit,
}

impl Report {
    pub fn per_call(&self) -> f64 {
        match self.unit {
            PerCallUnit::Nanos => self.sample.per_call_ns(),
            PerCallUnit::Millis => self.sample.per_call_ms(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.sample.label)?;
        let total_ms = self.sample.total_ms();
        if total_ms < 1.0 {
            writeln!(f, "  Total time:  {:8.2} µs", total_ms * 1000.0)?;
        } else {
            writeln!(f, "  Total time:  {:8.2} ms", total_ms)?;
        }
        let unit = match self.unit {
            PerCallUnit::Nanos => "ns",
            PerCallUnit::Millis => "ms",
        };
        write!(f, "  Per call:    {:8.2} {unit}", self.per_call())
    }
}

/// Times `calls` invocations of [`fast_sum8`] over the constants `1..=8`.
pub fn fast_sum_report(calls: NonZeroU64) -> Report {
    let sample = measure(format!("fast_sum8 ({calls} calls)"), calls, |_| {
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
    });
    Report {
        sample,
        unit: PerCallUnit::Nanos,
    }
}

/// Times `calls` invocations of [`slow_compute`], seeding each with its call index.
pub fn slow_compute_report(calls: NonZeroU64, iterations: i32) -> Report {
    let label = format!("slow_compute ({calls} calls, {iterations} iters each)");
    let sample = measure(label, calls, |i| {
        slow_compute(black_box(i as i64), black_box(iterations))
    });
    Report {
        sample,
        unit: PerCallUnit::Millis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nz(n: u64) -> NonZeroU64 {
        NonZeroU64::new(n).unwrap()
    }

    fn sample(elapsed: Duration, calls: u64) -> Sample {
        Sample {
            label: "test".to_owned(),
            elapsed,
            calls: nz(calls),
            checksum: 0,
        }
    }

    #[test]
    fn measure_runs_every_call() {
        let mut seen = Vec::new();
        let sample = measure("count", nz(5), |i| {
            seen.push(i);
            i as i64 * 2
        });
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
        assert_eq!(sample.checksum, 8);
        assert_eq!(sample.calls.get(), 5);
        assert_eq!(sample.label, "count");
    }

    #[test]
    fn average_is_total_over_calls() {
        let s = sample(Duration::from_millis(250), 1_000);
        assert!((s.total_ms() - 250.0).abs() < 1e-9);
        assert!((s.per_call_ms() - 0.25).abs() < 1e-12);
        assert!((s.per_call_ns() - 250_000.0).abs() < 1e-6);
    }

    #[test]
    fn measured_totals_are_consistent() {
        let report = slow_compute_report(nz(3), 1_000);
        let s = &report.sample;
        assert!(s.total_ms() >= 0.0);
        assert!((s.per_call_ms() * 3.0 - s.total_ms()).abs() < 1e-9);
        assert_eq!(s.checksum, slow_compute(2, 1_000));
    }

    #[test]
    fn fast_sum_checksum() {
        let report = fast_sum_report(nz(10));
        assert_eq!(report.sample.checksum, 36);
        assert_eq!(report.unit, PerCallUnit::Nanos);
        assert!(report.per_call() >= 0.0);
    }

    #[test]
    fn report_in_millis() {
        let report = Report {
            sample: sample(Duration::from_millis(1234), 100),
            unit: PerCallUnit::Millis,
        };
        assert_eq!(
            report.to_string(),
            "test:\n  Total time:   1234.00 ms\n  Per call:       12.34 ms"
        );
    }

    #[test]
    fn report_switches_to_micros_below_a_millisecond() {
        let report = Report {
            sample: sample(Duration::from_micros(500), 1_000),
            unit: PerCallUnit::Nanos,
        };
        assert_eq!(
            report.to_string(),
            "test:\n  Total time:    500.00 µs\n  Per call:      500.00 ns"
        );
    }
}
