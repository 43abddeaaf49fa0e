//! Core sorting algorithms (adaptive hybrid introsort engine).
//!
//! This module implements the engine as five cooperating pieces:
//! - **Monotonicity scan**: one forward pass spotting already-sorted and
//!   reverse-sorted input.
//! - **Insertion sort**: binary-searched insertion for short ranges.
//! - **Three-way partition**: Dutch-national-flag split around a
//!   median-of-three pivot, collapsing runs of equal elements in one pass.
//! - **Heapsort**: the guaranteed `O(n log n)` fallback once the recursion
//!   budget runs out.
//! - **Iterative introsort driver**: an explicit work stack tying the above
//!   together with smaller-first scheduling.
//!
//! The main entry points are [`sort`], [`sort_with`] and [`sort_by_key`].

use crate::core::{depth_limit, Keyed, WorkFrame, INSERTION_THRESHOLD, WORK_STACK_RESERVE};
use std::ptr;

/// Sorts the slice in place under the element type's natural order.
///
/// The sort is unstable (equal elements may be reordered), in place, and
/// `O(n log n)` worst case. Already-sorted and reverse-sorted inputs are
/// detected in a single `O(n)` pre-pass and short-circuited.
///
/// # Examples
///
/// ```
/// let mut data = vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3];
/// triosort::sort(&mut data);
///
/// assert_eq!(data, vec![1, 1, 2, 3, 3, 4, 5, 5, 6, 9]);
/// ```
pub fn sort<T: Ord>(data: &mut [T]) {
    sort_with_detect(data, |a, b| a.lt(b), true);
}

/// Sorts the slice in place under a caller-supplied `is_less` predicate.
///
/// `is_less` must be a strict weak ordering: irreflexive, asymmetric,
/// transitive, and with transitive equivalence (`!is_less(a, b) &&
/// !is_less(b, a)`). If it is not, the slice ends up in some unspecified
/// permutation of its input, but memory safety is never affected.
///
/// Detection of sorted/reverse-sorted input is enabled; use
/// [`sort_with_detect`] to control it.
///
/// # Arguments
///
/// * `data` - The slice to sort.
/// * `is_less` - Strict-weak-order predicate; `is_less(a, b)` means `a`
///   sorts before `b`.
///
/// # Examples
///
/// ```
/// let mut data = vec![1, 5, 3, 9, 2];
/// triosort::sort_with(&mut data, |a, b| b < a);
///
/// assert_eq!(data, vec![9, 5, 3, 2, 1]);
/// ```
pub fn sort_with<T, F>(data: &mut [T], is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    sort_with_detect(data, is_less, true);
}

/// [`sort_with`] with an explicit toggle for the monotonicity pre-scan.
///
/// With `detect_sorted` set, a single forward pass recognizes fully sorted
/// input (returned untouched) and fully reverse-sorted input (reversed in
/// `O(n)` and returned). Disabling it saves the pre-scan on inputs known to
/// be shuffled.
///
/// # Examples
///
/// ```
/// let mut data = vec![5, 4, 3, 2, 1];
/// triosort::sort_with_detect(&mut data, |a, b| a < b, false);
///
/// assert_eq!(data, vec![1, 2, 3, 4, 5]);
/// ```
pub fn sort_with_detect<T, F>(data: &mut [T], mut is_less: F, detect_sorted: bool)
where
    F: FnMut(&T, &T) -> bool,
{
    if data.len() <= 1 {
        return;
    }

    if detect_sorted {
        let (already_sorted, reversed) = scan_sorted_reverse(&*data, &mut is_less);
        if already_sorted {
            return;
        }
        if reversed {
            data.reverse();
            return;
        }
    }

    if data.len() <= INSERTION_THRESHOLD {
        insertion_sort(data, &mut is_less);
    } else {
        introsort(data, &mut is_less);
    }
}

/// Sorts the slice in place so that `key(data[0]), key(data[1]), ...` is
/// non-decreasing under the key type's natural order.
///
/// `key` is evaluated exactly once per element (a Schwartzian transform):
/// the keys are split off into a decorated side array, the decoration is
/// sorted, and the resulting permutation is applied to the slice by
/// following cycles, so elements move at most once. Costs `O(n)` auxiliary
/// memory for the decoration; the sort itself is unstable.
///
/// # Arguments
///
/// * `data` - The slice to sort.
/// * `key` - Projection from element to sort key, called once per element.
///
/// # Examples
///
/// ```
/// struct Person {
///     name: &'static str,
///     age: u32,
/// }
///
/// let mut people = vec![
///     Person { name: "Alice", age: 30 },
///     Person { name: "Bob", age: 25 },
///     Person { name: "Charlie", age: 35 },
///     Person { name: "David", age: 20 },
/// ];
///
/// triosort::sort_by_key(&mut people, |p| p.age);
///
/// let names: Vec<_> = people.iter().map(|p| p.name).collect();
/// assert_eq!(names, vec!["David", "Bob", "Alice", "Charlie"]);
/// ```
pub fn sort_by_key<T, K, KF>(data: &mut [T], key: KF)
where
    K: Ord,
    KF: FnMut(&T) -> K,
{
    sort_by_key_with(data, key, |a: &K, b: &K| a.lt(b));
}

/// [`sort_by_key`] with a caller-supplied strict weak ordering over the keys.
///
/// # Examples
///
/// ```
/// let mut data = vec![(1u32, "a"), (3, "b"), (2, "c")];
/// triosort::sort_by_key_with(&mut data, |pair| pair.0, |a, b| b < a);
///
/// assert_eq!(data, vec![(3, "b"), (2, "c"), (1, "a")]);
/// ```
pub fn sort_by_key_with<T, K, KF, F>(data: &mut [T], mut key: KF, mut key_less: F)
where
    KF: FnMut(&T) -> K,
    F: FnMut(&K, &K) -> bool,
{
    // 1. Decorate: one key evaluation per element, tagged with its home index.
    let mut decorated: Vec<Keyed<K>> = data
        .iter()
        .enumerate()
        .map(|(home, value)| Keyed {
            key: key(value),
            home,
        })
        .collect();

    // 2. Sort the decoration with the ordinary engine (detection enabled).
    sort_with(&mut decorated, |a, b| key_less(&a.key, &b.key));

    // 3. Undecorate: apply the recorded permutation to `data` in place.
    apply_permutation(data, &mut decorated);
}

/// Reports whether the slice is already non-decreasing and/or non-increasing
/// under `is_less`, in a single forward pass.
///
/// Returns `(is_sorted, is_reverse)`. Both are true for slices of length 0
/// or 1, and both can be true at once (all elements equivalent). The pass
/// stops early once both flags are cleared, so it costs at most two
/// comparisons per adjacent pair.
///
/// # Examples
///
/// ```
/// use triosort::scan_sorted_reverse;
///
/// assert_eq!(scan_sorted_reverse(&[1, 2, 2, 3], |a, b| a < b), (true, false));
/// assert_eq!(scan_sorted_reverse(&[3, 2, 1], |a, b| a < b), (false, true));
/// assert_eq!(scan_sorted_reverse(&[7, 7, 7], |a, b| a < b), (true, true));
/// assert_eq!(scan_sorted_reverse(&[1, 3, 2], |a, b| a < b), (false, false));
/// ```
pub fn scan_sorted_reverse<T, F>(data: &[T], mut is_less: F) -> (bool, bool)
where
    F: FnMut(&T, &T) -> bool,
{
    if data.len() <= 1 {
        return (true, true);
    }

    let mut is_sorted = true;
    let mut is_reverse = true;

    for pair in data.windows(2) {
        if is_less(&pair[1], &pair[0]) {
            is_sorted = false;
        }
        if is_less(&pair[0], &pair[1]) {
            is_reverse = false;
        }
        if !is_sorted && !is_reverse {
            break;
        }
    }

    (is_sorted, is_reverse)
}

/// Insertion sort with a binary-searched insertion point.
///
/// The binary search keeps comparisons at `O(n log n)` even though moves stay
/// quadratic; on the short ranges this runs on, comparison count is what
/// dominates for non-trivial element types.
fn insertion_sort<T, F>(data: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..data.len() {
        // Upper bound: first position in the sorted prefix data[..i] whose
        // element is strictly greater than data[i].
        let mut lo = 0;
        let mut hi = i;
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if is_less(&data[i], &data[mid]) {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }

        // Shift data[lo..i] one step right and drop the element into place.
        data[lo..=i].rotate_right(1);
    }
}

/// Index of the median of `data[a]`, `data[b]`, `data[c]` under `is_less`,
/// in at most three comparisons. Ties resolve to any of the tied positions.
fn median_of_three<T, F>(data: &[T], a: usize, b: usize, c: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    if is_less(&data[a], &data[b]) {
        if is_less(&data[b], &data[c]) {
            b // a < b < c
        } else if is_less(&data[a], &data[c]) {
            c // a < c <= b
        } else {
            a // c <= a < b
        }
    } else if is_less(&data[c], &data[b]) {
        b // c < b <= a
    } else if is_less(&data[c], &data[a]) {
        c // b <= c < a
    } else {
        a // b <= a <= c
    }
}

/// Three-way (Dutch national flag) partition around a median-of-three pivot.
///
/// On return `(lt, gt_end)` bound the three regions: `data[..lt]` is strictly
/// less than the pivot, `data[lt..gt_end]` is equivalent to it, and
/// `data[gt_end..]` is strictly greater. The equivalent middle never needs
/// sorting again, which collapses runs of duplicates in a single pass.
fn partition_3way<T, F>(data: &mut [T], is_less: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    debug_assert!(len >= 2);

    let pivot_at = median_of_three(data, 0, len / 2, len - 1, is_less);
    data.swap(0, pivot_at);

    // Park the pivot at the front and split it off, so it can be compared
    // against while the rest of the range is permuted.
    let Some((pivot, rest)) = data.split_first_mut() else {
        return (0, 0);
    };

    // Cursors over `rest`: rest[..lt] < pivot, rest[lt..i] == pivot,
    // rest[gt_end..] > pivot, rest[i..gt_end] still unexamined.
    let mut lt = 0;
    let mut i = 0;
    let mut gt_end = rest.len();

    while i < gt_end {
        if is_less(&rest[i], pivot) {
            rest.swap(lt, i);
            lt += 1;
            i += 1;
        } else if is_less(pivot, &rest[i]) {
            gt_end -= 1;
            rest.swap(i, gt_end);
            // The element swapped in from the back is unexamined; do not
            // advance i.
        } else {
            i += 1;
        }
    }

    // Fold the pivot into the equal region. Its swap partner is the last
    // element of the less region (or itself when that region is empty), so
    // both regions stay contiguous.
    data.swap(0, lt);
    (lt, gt_end + 1)
}

/// Heapsort fallback: in place, no auxiliary memory, `O(n log n)` worst case.
fn heapsort<T, F>(data: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    if len < 2 {
        return;
    }

    heapify(data, is_less);

    // Pop the maximum to the back and re-sink the new root, shrinking the
    // heap one slot at a time.
    let mut end = len - 1;
    while end > 0 {
        data.swap(0, end);
        sift_down(data, 0, end, is_less);
        end -= 1;
    }
}

/// Builds a max-heap under `is_less`: no parent is less than its children.
fn heapify<T, F>(data: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();

    // Seed from the last parent; counting down with a loop guard avoids the
    // unsigned underflow at zero.
    let mut root = (len - 2) / 2;
    loop {
        sift_down(data, root, len, is_less);
        if root == 0 {
            break;
        }
        root -= 1;
    }
}

/// Sinks `data[root]` into the heap occupying `data[..end]`.
fn sift_down<T, F>(data: &mut [T], mut root: usize, end: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            break;
        }

        // Pick the greater of the two children.
        if child + 1 < end && is_less(&data[child], &data[child + 1]) {
            child += 1;
        }

        if !is_less(&data[root], &data[child]) {
            break;
        }

        data.swap(root, child);
        root = child;
    }
}

/// Iterative introsort: quicksort on an explicit work stack with a recursion
/// budget, falling back to heapsort when the budget is spent and finishing
/// short tails with insertion sort.
///
/// Only the smaller outer sub-range of each partition is pushed; the loop
/// continues on the larger one. Together with the budget carried per frame
/// this keeps the stack within `depth_limit(len) + 1` frames.
fn introsort<T, F>(data: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();

    let mut stack: Vec<WorkFrame> = Vec::with_capacity(WORK_STACK_RESERVE);
    stack.push(WorkFrame {
        lo: 0,
        hi: len,
        budget: depth_limit(len),
    });

    while let Some(frame) = stack.pop() {
        let WorkFrame {
            mut lo,
            mut hi,
            mut budget,
        } = frame;

        while hi - lo > INSERTION_THRESHOLD {
            if budget == 0 {
                heapsort(&mut data[lo..hi], is_less);
                break;
            }
            budget -= 1;

            let (lt, gt_end) = partition_3way(&mut data[lo..hi], is_less);
            let lt = lo + lt;
            let gt_end = lo + gt_end;

            // Smaller-first: park the smaller outer sub-range, keep working
            // on the larger one. The equivalent middle is already in place.
            if lt - lo < hi - gt_end {
                if lt - lo > 1 {
                    stack.push(WorkFrame {
                        lo,
                        hi: lt,
                        budget,
                    });
                }
                lo = gt_end;
            } else {
                if hi - gt_end > 1 {
                    stack.push(WorkFrame {
                        lo: gt_end,
                        hi,
                        budget,
                    });
                }
                hi = lt;
            }

            debug_assert!(stack.len() <= depth_limit(len) as usize + 1);
        }

        if hi - lo > 1 {
            insertion_sort(&mut data[lo..hi], is_less);
        }
    }
}

/// Applies the permutation recorded in `decorated[i].home` (the index of the
/// element that belongs at position `i`) to `data`, following cycles so that
/// only one element is parked outside the slice at a time.
///
/// `home == i` marks a settled slot; the outer scan skips those, and each
/// cycle marks its slots settled before moving on, so every position is
/// visited once. Total element moves are at most `n` plus one per cycle.
fn apply_permutation<T, K>(data: &mut [T], decorated: &mut [Keyed<K>]) {
    debug_assert_eq!(data.len(), decorated.len());

    for i in 0..data.len() {
        if decorated[i].home == i {
            continue;
        }

        let base = data.as_mut_ptr();

        // SAFETY: the `home` fields form a permutation of 0..len, so every
        // read and write below is in bounds. `carry` moves data[i] out; each
        // subsequent write fills the slot vacated by the previous read, and
        // the final write returns `carry` to the last vacated slot. No user
        // code runs inside the loop, so nothing can observe (or unwind over)
        // the transiently empty slot, and no element is dropped or duplicated.
        unsafe {
            let carry = ptr::read(base.add(i));
            let mut current = i;
            loop {
                let src = decorated[current].home;
                if src == i {
                    ptr::write(base.add(current), carry);
                    decorated[current].home = current;
                    break;
                }

                ptr::write(base.add(current), ptr::read(base.add(src)));
                // Mark settled before moving on, closing the cycle behind us.
                decorated[current].home = current;
                current = src;
            }
        }
    }
}
