//! Quadratic baseline.

/// Bubble sort with early exit once a pass makes no swap.
///
/// Only useful as a slow reference point; the benchmark runs it on a
/// smaller input than the other variants.
pub fn sort(data: &mut [i32]) {
    let mut end = data.len();
    while end > 1 {
        let mut last_swap = 0;
        for i in 1..end {
            if data[i - 1] > data[i] {
                data.swap(i - 1, i);
                last_swap = i;
            }
        }
        // Everything from the last swap onwards is already in place
        end = last_swap;
    }
}
