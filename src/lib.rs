//! # Triosort
//!
//! `triosort` is an adaptive, in-place, comparison-based sorting library for
//! mutable slices.
//!
//! It implements a hybrid introsort: quicksort with three-way partitioning
//! and median-of-three pivots, a recursion budget that hands pathological
//! inputs over to heapsort, and binary-insertion sort for short ranges, all
//! driven iteratively over an explicit work stack.
//!
//! ## Key Features
//!
//! - **Adaptive**: a single `O(n)` pre-scan recognizes already-sorted input
//!   (returned untouched) and reverse-sorted input (reversed in place).
//! - **Duplicate-friendly**: the three-way (Dutch national flag) partition
//!   collapses runs of equal elements in one pass, so few-unique inputs sort
//!   in `O(n log k)` comparisons for `k` distinct values.
//! - **Worst-case bounded**: a depth budget of `2 * ceil(log2(n))` partitions
//!   per sub-range guarantees `O(n log n)` even on adversarial input, with
//!   heapsort finishing whatever exhausts the budget.
//! - **No host-stack risk**: the driver iterates over its own work stack and
//!   always defers the smaller half, keeping the stack logarithmic.
//! - **Key sorting without repeated projection**: [`sort_by_key`] evaluates
//!   the key exactly once per element and applies the resulting permutation
//!   in place by cycle-following, never allocating a second element array.
//!
//! ## Usage
//!
//! ### Basic usage
//!
//! ```rust
//! let mut data = vec![5, 2, 8, 1, 9];
//! triosort::sort(&mut data);
//!
//! assert_eq!(data, vec![1, 2, 5, 8, 9]);
//! ```
//!
//! ### Custom orderings
//!
//! Any strict weak ordering works, passed as an `is_less` predicate:
//!
//! ```rust
//! let mut data = vec![-5i32, 3, -1, 4, -2];
//! triosort::sort_with(&mut data, |a, b| a.abs() < b.abs());
//!
//! assert!(data.windows(2).all(|w| w[0].abs() <= w[1].abs()));
//! ```
//!
//! ### Key sorting
//!
//! When the ordering derives from an expensive projection, [`sort_by_key`]
//! computes it once per element (a Schwartzian transform):
//!
//! ```rust
//! let mut words = vec!["sorting", "by", "length", "is", "neat"];
//! triosort::sort_by_key(&mut words, |w| w.len());
//!
//! assert_eq!(words.iter().map(|w| w.len()).collect::<Vec<_>>(), vec![2, 2, 4, 6, 7]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Best case**: `O(n)` for sorted, reverse-sorted, or all-equal input.
//! - **Average**: `O(n log n)`; `O(n log k)` with `k` distinct values.
//! - **Worst case**: `O(n log n)`, guaranteed by the heapsort fallback.
//! - **Memory**: `O(log n)` work-stack frames; [`sort_by_key`] adds `O(n)`
//!   decorated records.
//! - **Not stable**: equal elements may be reordered. Use the standard
//!   library's `slice::sort` when stability matters.

pub mod algo;
pub mod core;

pub use algo::{
    scan_sorted_reverse, sort, sort_by_key, sort_by_key_with, sort_with, sort_with_detect,
};

pub mod prelude {
    pub use crate::algo::{
        scan_sorted_reverse, sort, sort_by_key, sort_by_key_with, sort_with, sort_with_detect,
    };
}
