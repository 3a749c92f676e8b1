//! Algorithm registry.
//!
//! Holds the sort routines the benchmark measures, each as a plain function
//! value with a name, plus an optional input size that overrides the run's
//! default. The quadratic baseline uses that override to stay on a smaller
//! input than everything else.

use crate::error::BenchError;
use crate::sorting::int_sort::{self, SortFn, REFERENCE_VARIANT};
use crate::utils::dataset::Distribution;
use crate::utils::VariantInfo;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Input size the bubble sort baseline runs on
pub const BUBBLE_INPUT_SIZE: usize = 50_000;

/// A sort routine the harness can measure
#[derive(Clone, Copy, Debug)]
pub struct SortAlgorithm {
    pub name: &'static str,
    pub description: &'static str,
    pub function: SortFn,
    /// Replaces the run's default input size when set
    pub input_size: Option<usize>,
}

impl SortAlgorithm {
    pub fn new(name: &'static str, description: &'static str, function: SortFn) -> Self {
        Self {
            name,
            description,
            function,
            input_size: None,
        }
    }

    pub fn with_input_size(mut self, size: usize) -> Self {
        self.input_size = Some(size);
        self
    }

    /// Input size this algorithm runs on, given the run's default
    pub fn effective_size(&self, default_size: usize) -> usize {
        self.input_size.unwrap_or(default_size)
    }

    #[inline]
    pub fn sort(&self, data: &mut [i32]) {
        (self.function)(data)
    }
}

impl From<VariantInfo<SortFn>> for SortAlgorithm {
    fn from(variant: VariantInfo<SortFn>) -> Self {
        SortAlgorithm::new(variant.name, variant.description, variant.function)
    }
}

/// Registry of all algorithms, in run order
#[derive(Clone, Debug, Default)]
pub struct AlgorithmRegistry {
    algorithms: Vec<SortAlgorithm>,
}

impl AlgorithmRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an algorithm
    pub fn register(&mut self, algo: SortAlgorithm) {
        self.algorithms.push(algo);
    }

    /// Get all registered algorithms
    pub fn all(&self) -> &[SortAlgorithm] {
        &self.algorithms
    }

    /// Find algorithm by name
    pub fn find(&self, name: &str) -> Option<&SortAlgorithm> {
        self.algorithms.iter().find(|a| a.name == name)
    }

    /// List algorithm names
    pub fn list_names(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.name).collect()
    }

    /// Distinct input sizes the registered algorithms need, given a default
    pub fn input_sizes(&self, default_size: usize) -> Vec<usize> {
        let mut sizes: Vec<usize> = self
            .algorithms
            .iter()
            .map(|a| a.effective_size(default_size))
            .collect();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }

    /// Check every algorithm against the reference sort.
    ///
    /// Runs each one on every distribution plus a mixed-sign sample of
    /// `size` values and compares outputs element by element.
    pub fn verify(&self, size: usize, seed: u64) -> Result<(), BenchError> {
        let reference = self
            .find(REFERENCE_VARIANT)
            .ok_or_else(|| BenchError::InvalidConfig(format!("no '{}' variant registered", REFERENCE_VARIANT)))?;

        let mut rng = StdRng::seed_from_u64(seed);
        let mut inputs: Vec<Vec<i32>> = Distribution::ALL
            .iter()
            .map(|d| d.generate(size, &mut rng))
            .collect();
        inputs.push(
            (0..size as i32)
                .map(|i| if i % 2 == 0 { -i } else { i })
                .collect(),
        );

        for input in &inputs {
            let mut expected = input.clone();
            reference.sort(&mut expected);

            for algo in &self.algorithms {
                let mut actual = input.clone();
                algo.sort(&mut actual);
                if let Some(index) = expected.iter().zip(&actual).position(|(e, a)| e != a) {
                    return Err(BenchError::Mismatch {
                        algorithm: algo.name.to_string(),
                        reference: reference.name.to_string(),
                        index,
                    });
                }
            }
        }

        Ok(())
    }
}

/// Build the default registry with all algorithms
pub fn build_registry() -> AlgorithmRegistry {
    let mut registry = AlgorithmRegistry::new();

    for variant in int_sort::available_variants() {
        let mut algo = SortAlgorithm::from(variant);
        if algo.name == "bubble" {
            algo = algo.with_input_size(BUBBLE_INPUT_SIZE);
        }
        registry.register(algo);
    }

    registry
}
