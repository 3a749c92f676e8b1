//! Runs every registered algorithm against every dataset distribution.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::bench::time_seed;
use super::dataset::{Dataset, Distribution};
use super::timer::{MeasureResult, TimingConfig};
use crate::error::BenchError;
use crate::registry::AlgorithmRegistry;
use crate::sorting::int_sort::bench::run_benchmark;

/// Default number of elements per dataset
pub const DEFAULT_INPUT_SIZE: usize = 1_000_000;

/// Configuration for a full benchmark run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchConfig {
    /// Dataset size for algorithms without their own override
    pub input_size: usize,
    pub timing: TimingConfig,
    /// Seed for dataset generation; time-based when `None`
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            input_size: DEFAULT_INPUT_SIZE,
            timing: TimingConfig::default(),
            seed: None,
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.input_size > i32::MAX as usize {
            return Err(BenchError::InvalidConfig(format!(
                "input_size {} does not fit the i32 value range",
                self.input_size
            )));
        }
        self.timing.validate()
    }
}

/// Progress notifications, in the order the report prints them
#[derive(Debug)]
pub enum RunEvent<'a> {
    DatasetStarted(Distribution),
    Measured(Distribution, &'a MeasureResult),
    DatasetFinished(Distribution),
}

/// All results for one distribution
#[derive(Clone, Debug)]
pub struct DatasetReport {
    pub distribution: Distribution,
    pub results: Vec<MeasureResult>,
}

impl DatasetReport {
    pub fn failures(&self) -> impl Iterator<Item = &MeasureResult> {
        self.results.iter().filter(|r| !r.is_correct())
    }
}

/// Run the full dataset × algorithm matrix.
///
/// Each distribution gets one dataset per distinct input size, generated the
/// first time an algorithm needs it and shared by every later algorithm of
/// the same size. A correctness failure is recorded and the run goes on.
pub fn run_all_algorithms<F>(
    registry: &AlgorithmRegistry,
    config: &BenchConfig,
    mut on_event: F,
) -> Result<Vec<DatasetReport>, BenchError>
where
    F: FnMut(RunEvent<'_>),
{
    config.validate()?;

    let seed = config.seed.unwrap_or_else(time_seed);
    tracing::info!(seed, "starting benchmark run");
    let mut rng = StdRng::seed_from_u64(seed);

    let mut reports = Vec::with_capacity(Distribution::ALL.len());

    for distribution in Distribution::ALL {
        on_event(RunEvent::DatasetStarted(distribution));

        let mut datasets: HashMap<usize, Dataset> = HashMap::new();
        let mut results = Vec::with_capacity(registry.all().len());

        for algo in registry.all() {
            let size = algo.effective_size(config.input_size);
            let dataset = datasets
                .entry(size)
                .or_insert_with(|| Dataset::generate(distribution, size, &mut rng));

            let result = run_benchmark(algo, dataset, &config.timing)?;
            on_event(RunEvent::Measured(distribution, &result));
            results.push(result);
        }

        on_event(RunEvent::DatasetFinished(distribution));
        reports.push(DatasetReport {
            distribution,
            results,
        });
    }

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{build_registry, SortAlgorithm};
    use crate::utils::timer::PinStrategy;

    fn small_config() -> BenchConfig {
        BenchConfig {
            input_size: 2_000,
            timing: TimingConfig {
                warmup_rounds: 1,
                measure_rounds: 2,
                pin_strategy: PinStrategy::None,
            },
            seed: Some(1234),
        }
    }

    #[test]
    fn test_matrix_covers_every_pair() {
        let mut registry = AlgorithmRegistry::new();
        for algo in build_registry().all() {
            let algo = match algo.input_size {
                Some(_) => algo.with_input_size(300),
                None => *algo,
            };
            registry.register(algo);
        }

        let mut events = Vec::new();
        let reports = run_all_algorithms(&registry, &small_config(), |event| {
            events.push(match event {
                RunEvent::DatasetStarted(d) => format!("start {}", d),
                RunEvent::Measured(_, r) => format!("{} {}", r.algorithm, r.input_size),
                RunEvent::DatasetFinished(d) => format!("end {}", d),
            });
        })
        .unwrap();

        assert_eq!(reports.len(), 4);
        for report in &reports {
            assert_eq!(report.results.len(), 4);
            assert_eq!(report.failures().count(), 0);
        }
        assert_eq!(
            &events[..6],
            &[
                "start Random",
                "bubble 300",
                "quicksort 2000",
                "radix_lsd 2000",
                "std_sort 2000",
                "end Random",
            ]
        );
        assert_eq!(events.len(), 4 * 6);
    }

    #[test]
    fn test_failure_does_not_stop_the_run() {
        fn broken(data: &mut [i32]) {
            data.sort_unstable();
            data.reverse();
        }

        let mut registry = AlgorithmRegistry::new();
        registry.register(SortAlgorithm::new("broken", "sorts descending", broken));
        registry.register(SortAlgorithm::new(
            "radix_lsd",
            "",
            crate::sorting::int_sort::radix_lsd::sort,
        ));

        let reports = run_all_algorithms(&registry, &small_config(), |_| {}).unwrap();

        assert_eq!(reports.len(), 4);
        for report in &reports {
            let failed: Vec<_> = report.failures().map(|r| r.algorithm.as_str()).collect();
            assert_eq!(failed, vec!["broken"]);
            assert!(report.results[1].is_correct());
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = small_config();
        config.timing.measure_rounds = 0;
        let err = run_all_algorithms(&build_registry(), &config, |_| {}).unwrap_err();
        assert!(matches!(err, BenchError::InvalidConfig(_)));
    }
}
