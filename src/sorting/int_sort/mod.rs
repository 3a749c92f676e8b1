//! # Integer Sorting
//!
//! In-place ascending sorts of `i32` slices, compared across input shapes.
//!
//! ## Variants
//!
//! - **bubble**: quadratic baseline, run on a smaller input
//! - **quicksort**: hybrid quicksort with median-of-three pivots, Lomuto
//!   partitioning and an insertion-sort cutoff; iterative, with a worklist
//!   bounded by `log2(n)`
//! - **radix_lsd**: four 8-bit counting passes, least significant byte first,
//!   with the sign bit flipped on the last pass
//! - **std_sort**: the standard library's `sort_unstable`, used as reference

pub mod bench;
pub mod code;
#[cfg(test)]
pub mod test;

pub use code::*;
