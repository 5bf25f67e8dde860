//! Stable top-down merge sort.

use crate::ranked::Ranked;

/// Sorts a slice into a freshly allocated ascending `Vec`.
///
/// Classic divide-and-conquer merge sort: split at the midpoint, sort each
/// half, merge the two sorted runs. The input slice is left untouched; the
/// result is a permutation of it, ordered by [`Ranked::ranks_before`].
///
/// The sort is *stable*: elements tied on their ordering key keep the
/// relative order they had in `input`. Comparisons and moves are
/// O(N log N) regardless of how the input is arranged, with O(N) scratch
/// space per merge level.
///
/// Slices of length 0 or 1 come back unchanged.
///
/// # Example
///
/// ```rust
/// use ladder_sort::{merge_sort, Ranked};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Quote(u32);
///
/// impl Ranked for Quote {
///     fn ranks_before(&self, other: &Self) -> bool {
///         self.0 < other.0
///     }
/// }
///
/// let quotes = vec![Quote(250), Quote(100), Quote(150)];
/// let sorted = merge_sort(&quotes);
///
/// assert_eq!(sorted, vec![Quote(100), Quote(150), Quote(250)]);
/// assert_eq!(quotes[0], Quote(250)); // input untouched
/// ```
#[must_use]
pub fn merge_sort<T: Ranked + Clone>(input: &[T]) -> Vec<T> {
    if input.len() <= 1 {
        return input.to_vec();
    }

    let mid = input.len() / 2;
    let left = merge_sort(&input[..mid]);
    let right = merge_sort(&input[mid..]);

    merge(&left, &right)
}

/// Merges two sorted runs into one sorted output.
///
/// Ties take the head of `left` first; that single rule is what makes the
/// whole sort stable.
fn merge<T: Ranked + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        if right[right_index].ranks_before(&left[left_index]) {
            merged.push(right[right_index].clone());
            right_index += 1;
        } else {
            merged.push(left[left_index].clone());
            left_index += 1;
        }
    }

    merged.extend_from_slice(&left[left_index..]);
    merged.extend_from_slice(&right[right_index..]);

    merged
}
