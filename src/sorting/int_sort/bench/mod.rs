//! Benchmark driver for integer sorts.

use crate::error::BenchError;
use crate::registry::SortAlgorithm;
use crate::utils::dataset::Dataset;
use crate::utils::timer::{measure, MeasureResult, TimingConfig};

/// Measure one algorithm on one dataset.
pub fn run_benchmark(
    algo: &SortAlgorithm,
    dataset: &Dataset,
    config: &TimingConfig,
) -> Result<MeasureResult, BenchError> {
    tracing::debug!(
        algorithm = algo.name,
        dataset = dataset.label(),
        size = dataset.len(),
        "running"
    );
    measure(algo.name, &dataset.data, algo.function, config)
}
