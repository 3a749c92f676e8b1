//! Error types shared by the harness, the registry and the configuration.

use thiserror::Error;

/// Everything that can go wrong while benchmarking.
///
/// Correctness failures never abort a run: they are reported next to the
/// timing and the benchmark moves on to the next algorithm. An invalid
/// configuration is rejected before anything is measured.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BenchError {
    /// A sort routine left its output out of order.
    #[error("{algorithm} failed correctness check: element {index} ({prev}) > element {next_index} ({next})", next_index = .index + 1)]
    NotSorted {
        algorithm: String,
        index: usize,
        prev: i32,
        next: i32,
    },

    /// A sort routine disagreed with the reference implementation.
    #[error("{algorithm} differs from {reference} at index {index}")]
    Mismatch {
        algorithm: String,
        reference: String,
        index: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl BenchError {
    /// Name of the algorithm this error is about, if any.
    pub fn algorithm(&self) -> Option<&str> {
        match self {
            BenchError::NotSorted { algorithm, .. } | BenchError::Mismatch { algorithm, .. } => {
                Some(algorithm)
            }
            BenchError::InvalidConfig(_) => None,
        }
    }
}
