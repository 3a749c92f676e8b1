//! Utility modules for benchmarking and execution.

pub mod bench;
pub mod cpu_affinity;
pub mod dataset;
pub mod runner;
pub mod timer;
pub mod tui;

// Re-export commonly used items
pub use bench::{calculate_std_dev, compute_stats, time_seed, Stats};
pub use cpu_affinity::CpuPinGuard;
pub use dataset::{Dataset, Distribution};
pub use runner::{BenchConfig, DatasetReport, RunEvent};
pub use timer::{measure, MeasureResult, PinStrategy, TimingConfig};

/// Information about an algorithm implementation variant.
/// Generic over F which is the function signature.
pub struct VariantInfo<F> {
    /// Unique identifier for this variant (e.g., "quicksort", "radix_lsd")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The specific implementation function
    pub function: F,
}
