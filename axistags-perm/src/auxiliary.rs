//! Permutation helpers.

use std::cmp::Ordering;

/// Indices that sort `items` under `cmp`.
///
/// `items[result[0]]` is the smallest element. The sort is stable, so equal
/// elements keep their relative order.
pub fn index_sort_by<T, F>(items: &[T], mut cmp: F) -> Vec<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut result: Vec<usize> = (0..items.len()).collect();
    result.sort_by(|&a, &b| cmp(&items[a], &items[b]));
    result
}

/// Inverse of a permutation: `result[perm[i]] == i`.
///
/// `perm` must be a bijection on `[0, perm.len())`.
pub fn inverse_permutation(perm: &[usize]) -> Vec<usize> {
    let mut result = vec![0usize; perm.len()];
    for (i, &p) in perm.iter().enumerate() {
        result[p] = i;
    }
    result
}
