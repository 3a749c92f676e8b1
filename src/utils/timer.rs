//! Measurement protocol for sort routines.
//!
//! Each call to [`measure`] runs one algorithm on one dataset:
//! 1. warms up on throwaway copies of the dataset,
//! 2. times a fixed number of rounds, each on a fresh copy,
//! 3. checks the first measured round's output for ordering,
//! 4. reports the mean over the measured rounds.
//!
//! Rounds never see each other's output: re-sorting an already sorted copy
//! would flatter every comparison sort on the sorted inputs.

use std::hint::black_box;
use std::time::{Duration, Instant};

use super::bench::{compute_stats, format_measurement, Measurement};
use super::cpu_affinity::CpuPinGuard;
use crate::error::BenchError;
use crate::sorting::int_sort::first_unsorted;

// ============================================================================
// Configuration
// ============================================================================

/// CPU pinning strategy during measurements
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinStrategy {
    /// Never pin
    None,
    /// Pin once for the whole measurement phase
    Global,
    /// Pin around each measured round
    #[default]
    PerExecution,
}

/// Configuration for timing measurements
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimingConfig {
    /// Untimed rounds before measuring (default: 3)
    pub warmup_rounds: usize,
    /// Timed rounds averaged into the result (default: 5)
    pub measure_rounds: usize,
    /// CPU pinning strategy (default: PerExecution)
    pub pin_strategy: PinStrategy,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            warmup_rounds: 3,
            measure_rounds: 5,
            pin_strategy: PinStrategy::default(),
        }
    }
}

impl TimingConfig {
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.measure_rounds == 0 {
            return Err(BenchError::InvalidConfig(
                "measure_rounds must be at least 1".to_string(),
            ));
        }
        if u32::try_from(self.measure_rounds).is_err() {
            return Err(BenchError::InvalidConfig(format!(
                "measure_rounds {} is too large",
                self.measure_rounds
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Clocks
// ============================================================================

/// Monotonic time source for the harness.
///
/// Readings are offsets from an arbitrary fixed origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall clock backed by [`Instant`]
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[inline(always)]
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

// ============================================================================
// Results
// ============================================================================

/// One measured round
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrialResult {
    pub algorithm: String,
    pub elapsed: Measurement,
    /// Only the first measured round is checked
    pub verified: Option<bool>,
}

/// Aggregate of all measured rounds for one (dataset, algorithm) pair
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeasureResult {
    pub algorithm: String,
    pub input_size: usize,
    pub rounds: usize,
    pub total_time: Duration,
    pub mean_time: Duration,
    pub min_time: Duration,
    pub max_time: Duration,
    pub std_dev: Duration,
    /// Outcome of the correctness check on the first measured round
    pub verification: Result<(), BenchError>,
}

impl MeasureResult {
    pub fn is_correct(&self) -> bool {
        self.verification.is_ok()
    }

    fn from_trials(
        algorithm: &str,
        input_size: usize,
        trials: &[TrialResult],
        verification: Result<(), BenchError>,
    ) -> Self {
        let times: Vec<Measurement> = trials.iter().map(|t| t.elapsed).collect();
        let stats = compute_stats(&times);
        Self {
            algorithm: algorithm.to_string(),
            input_size,
            rounds: trials.len(),
            total_time: stats.total,
            mean_time: stats.mean,
            min_time: stats.min,
            max_time: stats.max,
            std_dev: stats.std_dev,
            verification,
        }
    }
}

// ============================================================================
// Protocol
// ============================================================================

/// Measure `sort` on copies of `dataset` with the wall clock.
pub fn measure<F>(
    algorithm: &str,
    dataset: &[i32],
    sort: F,
    config: &TimingConfig,
) -> Result<MeasureResult, BenchError>
where
    F: FnMut(&mut [i32]),
{
    measure_with_clock(algorithm, dataset, sort, config, &MonotonicClock::new())
}

/// Measure `sort` on copies of `dataset`, reading time from `clock`.
///
/// Only an invalid configuration is an error. A routine that leaves its
/// output unsorted still gets timed; the failure is logged and recorded in
/// [`MeasureResult::verification`].
pub fn measure_with_clock<F, C>(
    algorithm: &str,
    dataset: &[i32],
    mut sort: F,
    config: &TimingConfig,
    clock: &C,
) -> Result<MeasureResult, BenchError>
where
    F: FnMut(&mut [i32]),
    C: Clock + ?Sized,
{
    config.validate()?;

    for _ in 0..config.warmup_rounds {
        let mut copy = dataset.to_vec();
        sort(copy.as_mut_slice());
        black_box(&copy);
    }

    let _global_pin = (config.pin_strategy == PinStrategy::Global).then(CpuPinGuard::new);

    let mut trials = Vec::with_capacity(config.measure_rounds);
    let mut verification = Ok(());

    for round in 0..config.measure_rounds {
        let mut copy = dataset.to_vec();
        let _per_exec_pin =
            (config.pin_strategy == PinStrategy::PerExecution).then(CpuPinGuard::new);

        let start = clock.now();
        sort(black_box(copy.as_mut_slice()));
        let end = clock.now();

        let verified = (round == 0).then(|| {
            verification = verify_sorted(algorithm, &copy);
            verification.is_ok()
        });

        trials.push(TrialResult {
            algorithm: algorithm.to_string(),
            elapsed: end.saturating_sub(start),
            verified,
        });
    }

    let result = MeasureResult::from_trials(algorithm, dataset.len(), &trials, verification);
    tracing::debug!(
        algorithm,
        size = result.input_size,
        mean = %format_measurement(result.mean_time),
        "measured"
    );
    Ok(result)
}

/// Check that `data` is non-decreasing, logging the failure if not.
pub fn verify_sorted(algorithm: &str, data: &[i32]) -> Result<(), BenchError> {
    match first_unsorted(data) {
        None => Ok(()),
        Some(index) => {
            let err = BenchError::NotSorted {
                algorithm: algorithm.to_string(),
                index,
                prev: data[index],
                next: data[index + 1],
            };
            tracing::error!("{}", err);
            Err(err)
        }
    }
}
