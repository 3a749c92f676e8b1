//! Hybrid quicksort.
//!
//! Median-of-three pivot selection, Lomuto partitioning and an insertion-sort
//! cutoff for small ranges. Ranges are kept on an explicit worklist instead of
//! the call stack: after every partition the larger side is deferred and the
//! smaller side is processed next, so the worklist never holds more than
//! `ceil(log2(n))` pending ranges whatever the pivots turn out to be.

/// Ranges of at most this many elements are finished with insertion sort.
pub const INSERTION_CUTOFF: usize = 32;

/// Observes the work done by a sort. The unit impl compiles away.
pub(crate) trait Probe {
    fn compare(&mut self);
    fn pending(&mut self, depth: usize);
}

impl Probe for () {
    #[inline(always)]
    fn compare(&mut self) {}
    #[inline(always)]
    fn pending(&mut self, _depth: usize) {}
}

/// Counts comparisons and the deepest the worklist got.
#[cfg(test)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SortStats {
    pub comparisons: u64,
    pub peak_pending: usize,
}

#[cfg(test)]
impl Probe for SortStats {
    fn compare(&mut self) {
        self.comparisons += 1;
    }

    fn pending(&mut self, depth: usize) {
        self.peak_pending = self.peak_pending.max(depth);
    }
}

/// Sort a slice in place, ascending, using hybrid quicksort.
///
/// Empty and single-element slices are returned untouched.
///
/// # Example
/// ```
/// use sort_bench::sorting::int_sort::quicksort;
///
/// let mut data = [5, -3, 9, 0, -3];
/// quicksort::sort(&mut data);
/// assert_eq!(data, [-3, -3, 0, 5, 9]);
/// ```
pub fn sort(data: &mut [i32]) {
    sort_with_probe(data, &mut ());
}

/// Same as [`sort`], but reports what the sort did.
#[cfg(test)]
pub(crate) fn sort_with_stats(data: &mut [i32]) -> SortStats {
    let mut stats = SortStats::default();
    sort_with_probe(data, &mut stats);
    stats
}

fn sort_with_probe<P: Probe>(data: &mut [i32], probe: &mut P) {
    if data.len() < 2 {
        return;
    }

    let mut pending: Vec<&mut [i32]> = Vec::new();
    let mut current = data;

    loop {
        if current.len() <= INSERTION_CUTOFF {
            insertion_sort(current, probe);
            match pending.pop() {
                Some(next) => {
                    current = next;
                    continue;
                }
                None => break,
            }
        }

        let range = current;
        let pivot = partition(range, probe);
        let (left, rest) = range.split_at_mut(pivot);
        let right = &mut rest[1..];

        // Defer the larger side
        if left.len() < right.len() {
            pending.push(right);
            current = left;
        } else {
            pending.push(left);
            current = right;
        }
        probe.pending(pending.len());
    }
}

/// Stable in-place insertion sort.
fn insertion_sort<P: Probe>(v: &mut [i32], probe: &mut P) {
    for i in 1..v.len() {
        let key = v[i];
        let mut j = i;
        while j > 0 {
            probe.compare();
            if v[j - 1] <= key {
                break;
            }
            v[j] = v[j - 1];
            j -= 1;
        }
        v[j] = key;
    }
}

/// Lomuto partition around the median of the first, middle and last values.
///
/// Returns the final index of the pivot. Everything before it is `<=` the
/// pivot, everything after it is `>`.
fn partition<P: Probe>(v: &mut [i32], probe: &mut P) -> usize {
    let high = v.len() - 1;
    let mid = high / 2;
    let pivot_index = median_of_three(v, 0, mid, high, probe);

    v.swap(pivot_index, high);
    let pivot = v[high];

    let mut store = 0;
    for j in 0..high {
        probe.compare();
        if v[j] <= pivot {
            v.swap(store, j);
            store += 1;
        }
    }

    v.swap(store, high);
    store
}

/// Index of the median among `v[a]`, `v[b]` and `v[c]`.
fn median_of_three<P: Probe>(v: &[i32], a: usize, b: usize, c: usize, probe: &mut P) -> usize {
    probe.compare();
    probe.compare();
    if v[a] > v[b] {
        if v[b] > v[c] {
            b
        } else if v[a] > v[c] {
            c
        } else {
            a
        }
    } else if v[a] > v[c] {
        a
    } else if v[b] > v[c] {
        c
    } else {
        b
    }
}
