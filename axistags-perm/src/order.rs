//! Canonical ("normal") and storage ("numpy") axis orders.
//!
//! The normal order sorts axes by type flags, then by key (see
//! [`AxisInfo::normal_order_cmp`]): channels, space (x, y, z), angle, time,
//! the frequency-domain variants, edge axes, and unknown axes last. It does not
//! depend on memory layout.
//!
//! The numpy order is the order of the array's storage: the normal order for
//! column-major arrays and its reverse for row-major arrays.

use axistags_core::{AxisInfo, AxisTags, AxisType, StorageOrder};

use crate::auxiliary::{index_sort_by, inverse_permutation};

/// Permutation that brings the axes selected by `mask` into normal order.
///
/// Only axes matching `mask` (see [`AxisType::matches`]) take part; the
/// returned indices are positions among those axes, in their current order.
/// Pass [`AxisType::ALL_AXES`] to consider every axis. Axes that compare equal
/// keep their current relative order.
pub fn permutation_to_normal_order(tags: &AxisTags, mask: AxisType) -> Vec<usize> {
    let matching: Vec<&AxisInfo> = tags.iter().filter(|a| a.is_type(mask)).collect();
    index_sort_by(&matching, |a, b| a.normal_order_cmp(b))
}

/// Inverse of [`permutation_to_normal_order`] for the same `mask`.
pub fn permutation_from_normal_order(tags: &AxisTags, mask: AxisType) -> Vec<usize> {
    inverse_permutation(&permutation_to_normal_order(tags, mask))
}

/// Permutation that brings all axes into storage order.
pub fn permutation_to_numpy_order(tags: &AxisTags, order: StorageOrder) -> Vec<usize> {
    let mut perm = permutation_to_normal_order(tags, AxisType::ALL_AXES);
    if order.is_row_major() {
        perm.reverse();
    }
    perm
}

/// Inverse of [`permutation_to_numpy_order`].
pub fn permutation_from_numpy_order(tags: &AxisTags, order: StorageOrder) -> Vec<usize> {
    inverse_permutation(&permutation_to_numpy_order(tags, order))
}
