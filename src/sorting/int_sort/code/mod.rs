//! Integer sort implementations.
//!
//! This module contains every variant the benchmark can measure. All of them
//! share the [`SortFn`] shape: sort an `i32` slice in place, ascending.

pub mod bubble;
pub mod quicksort;
pub mod radix_lsd;
pub mod std_sort;

use crate::utils::VariantInfo;

/// Type alias for the sort function signature
pub type SortFn = fn(&mut [i32]);

/// Name of the variant every other variant is checked against
pub const REFERENCE_VARIANT: &str = "std_sort";

/// Get all available variants, in the order they are benchmarked
pub fn available_variants() -> Vec<VariantInfo<SortFn>> {
    vec![
        VariantInfo {
            name: "bubble",
            description: "Bubble sort with early exit (quadratic baseline)",
            function: bubble::sort,
        },
        VariantInfo {
            name: "quicksort",
            description: "Hybrid quicksort: median-of-three, insertion cutoff at 32",
            function: quicksort::sort,
        },
        VariantInfo {
            name: "radix_lsd",
            description: "LSD radix sort, 4 byte passes with sign correction",
            function: radix_lsd::sort,
        },
        VariantInfo {
            name: REFERENCE_VARIANT,
            description: "Standard library sort_unstable (pdqsort)",
            function: std_sort::sort,
        },
    ]
}

/// Check if a slice is sorted in ascending order.
#[inline]
pub fn is_sorted(data: &[i32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Index of the first element that is greater than its successor.
pub fn first_unsorted(data: &[i32]) -> Option<usize> {
    data.windows(2).position(|w| w[0] > w[1])
}
