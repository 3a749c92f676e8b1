//! Tests for the integer sort implementations.

use super::code::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

fn random_data(n: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random::<i32>()).collect()
}

fn assert_sorts_like_std(sort: SortFn, input: &[i32], label: &str) {
    let mut expected = input.to_vec();
    expected.sort_unstable();
    let mut actual = input.to_vec();
    sort(&mut actual);
    assert_eq!(actual, expected, "{}", label);
}

/// Runs a check against every variant.
fn for_each_variant(mut check: impl FnMut(SortFn, &str)) {
    for variant in available_variants() {
        check(variant.function, variant.name);
    }
}

#[test]
fn test_empty() {
    for_each_variant(|sort, name| {
        let mut data: Vec<i32> = vec![];
        sort(&mut data);
        assert!(data.is_empty(), "{}", name);
    });
}

#[test]
fn test_single() {
    for_each_variant(|sort, name| {
        let mut data = vec![42];
        sort(&mut data);
        assert_eq!(data, vec![42], "{}", name);
    });
}

#[test]
fn test_sorted_and_reverse() {
    for_each_variant(|sort, name| {
        let ascending: Vec<i32> = (0..1000).collect();
        let descending: Vec<i32> = (0..1000).rev().collect();
        assert_sorts_like_std(sort, &ascending, name);
        assert_sorts_like_std(sort, &descending, name);
    });
}

#[test]
fn test_random() {
    let data = random_data(5000, 11);
    for_each_variant(|sort, name| assert_sorts_like_std(sort, &data, name));
}

#[test]
fn test_duplicates() {
    for_each_variant(|sort, name| {
        let mut data = vec![5, 3, 5, 1, 3, 5, 1, 1];
        sort(&mut data);
        assert_eq!(data, vec![1, 1, 1, 3, 3, 5, 5, 5], "{}", name);
    });
}

#[test]
fn test_all_same() {
    for_each_variant(|sort, name| {
        let mut data = vec![-7; 500];
        sort(&mut data);
        assert!(data.iter().all(|&x| x == -7), "{}", name);
    });
}

#[test]
fn test_extreme_values() {
    for_each_variant(|sort, name| {
        let mut data = vec![i32::MAX, 0, i32::MIN, -1, 1, i32::MIN + 1, i32::MAX - 1];
        sort(&mut data);
        assert_eq!(
            data,
            vec![i32::MIN, i32::MIN + 1, -1, 0, 1, i32::MAX - 1, i32::MAX],
            "{}",
            name
        );
    });
}

#[test]
fn test_radix_sign_handling() {
    let mut data = vec![-5, 3, -1, 0, 2147483647, -2147483648];
    radix_lsd::sort(&mut data);
    assert_eq!(data, vec![-2147483648, -5, -1, 0, 3, 2147483647]);
}

#[test]
fn test_radix_negatives_before_non_negatives() {
    let data = random_data(10_000, 5);
    let mut sorted = data.clone();
    radix_lsd::sort(&mut sorted);

    let split = sorted.iter().position(|&x| x >= 0).unwrap_or(sorted.len());
    assert!(sorted[..split].iter().all(|&x| x < 0));
    assert!(sorted[split..].iter().all(|&x| x >= 0));
    assert!(is_sorted(&sorted));
}

#[test]
fn test_radix_large_array() {
    let data = random_data(100_000, 99);
    assert_sorts_like_std(radix_lsd::sort, &data, "radix_lsd");
}

#[test]
fn test_quicksort_cutoff_boundary() {
    let cutoff = quicksort::INSERTION_CUTOFF;
    for n in [cutoff - 1, cutoff, cutoff + 1, cutoff + 2] {
        let descending: Vec<i32> = (0..n as i32).rev().collect();
        assert_sorts_like_std(quicksort::sort, &descending, &format!("descending n={}", n));
        let random = random_data(n, n as u64);
        assert_sorts_like_std(quicksort::sort, &random, &format!("random n={}", n));
    }
}

#[test]
fn test_quicksort_pivot_robustness() {
    let n = 10_000usize;
    let log2_n = (usize::BITS - n.leading_zeros()) as u64;
    let quadratic = (n as u64 * n as u64) / 4;

    for (label, mut data) in [
        ("ascending", (0..n as i32).collect::<Vec<_>>()),
        ("descending", (0..n as i32).rev().collect::<Vec<_>>()),
    ] {
        let stats = quicksort::sort_with_stats(&mut data);
        assert!(is_sorted(&data), "{} not sorted", label);
        assert!(
            stats.comparisons < 40 * n as u64 * log2_n,
            "{}: {} comparisons is not n log n",
            label,
            stats.comparisons
        );
        assert!(stats.comparisons < quadratic / 10, "{}: {}", label, stats.comparisons);
    }
}

#[test]
fn test_quicksort_sorted_input_time_budget() {
    let mut data: Vec<i32> = (0..10_000).collect();
    let start = Instant::now();
    quicksort::sort(&mut data);
    let elapsed = start.elapsed();

    assert!(is_sorted(&data));
    assert!(
        elapsed < Duration::from_millis(500),
        "10k sorted elements took {:?}",
        elapsed
    );
}

#[test]
fn test_quicksort_many_duplicates() {
    let mut rng = StdRng::seed_from_u64(17);
    let data: Vec<i32> = (0..5000).map(|_| rng.random_range(0..8)).collect();
    assert_sorts_like_std(quicksort::sort, &data, "few distinct values");
}

#[test]
fn test_bubble_nearly_sorted() {
    let mut data: Vec<i32> = (0..200).collect();
    data.swap(10, 150);
    data.swap(0, 199);
    assert_sorts_like_std(bubble::sort, &data, "bubble nearly sorted");
}

#[test]
fn test_is_sorted() {
    assert!(is_sorted(&[1, 2, 3, 4, 5]));
    assert!(is_sorted(&[1, 1, 1, 1]));
    assert!(is_sorted(&[-3, -1, 0]));
    assert!(is_sorted(&[1]));
    assert!(is_sorted(&[]));
    assert!(!is_sorted(&[5, 4, 3, 2, 1]));
    assert!(!is_sorted(&[1, 3, 2]));
}

#[test]
fn test_first_unsorted() {
    assert_eq!(first_unsorted(&[1, 2, 3]), None);
    assert_eq!(first_unsorted(&[1, 3, 2, 0]), Some(1));
    assert_eq!(first_unsorted(&[]), None);
}
