//! Axis-order permutations for axistags.
//!
//! This crate computes, without mutating anything, the permutations between an
//! [`AxisTags`](axistags_core::AxisTags)' current order, the layout-independent
//! normal order, and the storage (numpy) order selected by a
//! [`StorageOrder`](axistags_core::StorageOrder).
//!
//! # Dependency graph
//!
//! ```text
//! axistags-core -> axistags-perm -> axistags-index
//! ```
//!
//! # Example
//!
//! ```rust
//! use axistags_core::{AxisTags, AxisType};
//! use axistags_perm::{permutation_from_normal_order, permutation_to_normal_order};
//!
//! let tags = AxisTags::from_keys("tyxc").unwrap();
//! let to = permutation_to_normal_order(&tags, AxisType::ALL_AXES);
//! assert_eq!(to, vec![3, 2, 1, 0]); // c x y t
//! let from = permutation_from_normal_order(&tags, AxisType::ALL_AXES);
//! assert!((0..to.len()).all(|i| to[from[i]] == i));
//! ```

pub mod auxiliary;
pub mod order;

pub use auxiliary::{index_sort_by, inverse_permutation};
pub use axistags_core::is_permutation;
pub use order::{
    permutation_from_normal_order, permutation_from_numpy_order, permutation_to_normal_order,
    permutation_to_numpy_order,
};
