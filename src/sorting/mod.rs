//! Sorting algorithms.

pub mod int_sort;
