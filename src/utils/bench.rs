//! Shared benchmark utilities.
//!
//! Statistics over measured rounds and the small helpers the report uses to
//! present them.

use std::time::Duration;

/// Measurement value type. Rounds are timed with a monotonic wall clock.
pub type Measurement = Duration;

/// Convert a measurement to fractional milliseconds for display
pub fn to_millis(m: Measurement) -> f64 {
    m.as_secs_f64() * 1000.0
}

/// Format a measurement the way the report prints it
pub fn format_measurement(m: Measurement) -> String {
    format!("{:.2} ms", to_millis(m))
}

/// Calculate sample standard deviation from a list of durations
pub fn calculate_std_dev(times: &[Duration], mean: Duration) -> Duration {
    if times.len() < 2 {
        return Duration::ZERO;
    }

    let mean_ns = mean.as_nanos() as f64;
    let variance: f64 = times
        .iter()
        .map(|t| {
            let diff = t.as_nanos() as f64 - mean_ns;
            diff * diff
        })
        .sum::<f64>()
        / (times.len() - 1) as f64;

    Duration::from_nanos(variance.sqrt() as u64)
}

/// Summary of a set of measured rounds
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: Duration,
    pub mean: Duration,
    pub min: Duration,
    pub max: Duration,
    pub std_dev: Duration,
}

/// Compute timing statistics from a list of durations.
///
/// The mean is the total divided by the number of rounds.
pub fn compute_stats(times: &[Duration]) -> Stats {
    let (Some(&min), Some(&max)) = (times.iter().min(), times.iter().max()) else {
        return Stats::default();
    };

    let total: Duration = times.iter().sum();
    let mean = total / times.len() as u32;

    Stats {
        total,
        mean,
        min,
        max,
        std_dev: calculate_std_dev(times, mean),
    }
}

/// Get a seed from current time for randomization
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}
