//! Input datasets for the benchmark.
//!
//! Every generator takes the RNG explicitly, so a run seeded with the same
//! value produces the same datasets.

use rand::Rng;

/// Shape of a generated dataset
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Distribution {
    /// Uniform over the whole `i32` range
    Random,
    /// `0, 1, ..., n - 1`
    Sorted,
    /// `n, n - 1, ..., 1`
    Reverse,
    /// Sorted, then roughly 1% of positions disturbed by random swaps
    NearlySorted,
}

impl Distribution {
    /// All distributions, in report order
    pub const ALL: [Distribution; 4] = [
        Distribution::Random,
        Distribution::Sorted,
        Distribution::Reverse,
        Distribution::NearlySorted,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Distribution::Random => "Random",
            Distribution::Sorted => "Sorted",
            Distribution::Reverse => "Reverse",
            Distribution::NearlySorted => "Nearly Sorted",
        }
    }

    /// Generate `n` values with this distribution.
    pub fn generate<R: Rng>(self, n: usize, rng: &mut R) -> Vec<i32> {
        match self {
            Distribution::Random => (0..n).map(|_| rng.random::<i32>()).collect(),
            Distribution::Sorted => ascending(n),
            Distribution::Reverse => (1..=n).rev().map(|v| v as i32).collect(),
            Distribution::NearlySorted => {
                let mut data = ascending(n);
                if n > 0 {
                    for _ in 0..nearly_sorted_swaps(n) {
                        let a = rng.random_range(0..n);
                        let b = rng.random_range(0..n);
                        data.swap(a, b);
                    }
                }
                data
            }
        }
    }
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Number of random swaps applied to a nearly sorted dataset of `n` values.
///
/// 1% of `n`, at least one. The two indices of a swap may coincide, so this
/// is an upper bound on the number of displaced pairs.
pub fn nearly_sorted_swaps(n: usize) -> usize {
    (n / 100).max(1)
}

fn ascending(n: usize) -> Vec<i32> {
    (0..n).map(|v| v as i32).collect()
}

/// A generated dataset, shared read-only by every algorithm measured on it
#[derive(Clone, Debug)]
pub struct Dataset {
    pub distribution: Distribution,
    pub data: Vec<i32>,
}

impl Dataset {
    pub fn generate<R: Rng>(distribution: Distribution, n: usize, rng: &mut R) -> Self {
        tracing::debug!(distribution = distribution.label(), size = n, "generating dataset");
        Self {
            distribution,
            data: distribution.generate(n, rng),
        }
    }

    pub fn label(&self) -> &'static str {
        self.distribution.label()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
