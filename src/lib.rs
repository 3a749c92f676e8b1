//! # sort-bench
//!
//! Integer sorting routines and a wall-clock harness that compares them on
//! random, sorted, reverse and nearly sorted inputs.

pub mod error;
pub mod registry;
pub mod sorting;
pub mod utils;

/// Re-export tui from utils
pub use utils::tui;

/// Re-export run_all_algorithms from utils::runner
pub use utils::runner::run_all_algorithms;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::error::BenchError;
    pub use crate::registry::{build_registry, AlgorithmRegistry, SortAlgorithm};
    pub use crate::sorting::int_sort;
    pub use crate::utils::{BenchConfig, Dataset, Distribution, TimingConfig};
}
