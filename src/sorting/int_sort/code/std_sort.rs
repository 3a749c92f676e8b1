//! Standard library sort, used as the reference implementation.

/// Sort a slice in place using the standard library's unstable sort.
///
/// Rust's built-in pattern-defeating quicksort, with a heap sort fallback
/// that guarantees O(n log n) worst case.
#[inline]
pub fn sort(data: &mut [i32]) {
    data.sort_unstable();
}
