//! Axis metadata ("axistags") for N-dimensional arrays.
//!
//! This crate re-exports the axistags workspace under one roof:
//!
//! - [`axistags_core`]: [`AxisType`], [`AxisInfo`], [`AxisTags`] and the JSON codec
//! - [`axistags_perm`]: permutations to and from normal and storage order
//! - [`axistags_index`]: numpy-style index expressions applied to axistags
//!
//! # Primary API
//!
//! ## Building and editing
//!
//! - [`AxisTags::from_keys`], [`AxisTags::from_axes`]: construct from key letters or descriptors
//! - [`AxisTags::insert_channel_axis`], [`AxisTags::drop_channel_axis`]: manage the channel axis
//! - [`AxisTags::set_resolution`], [`AxisTags::set_description`]: edit by position or key
//! - [`AxisTags::to_frequency_domain`], [`AxisTags::from_frequency_domain`]: Fourier relabelling
//!
//! ## Reordering
//!
//! - [`permutation_to_normal_order`], [`permutation_from_normal_order`]
//! - [`permutation_to_numpy_order`], [`permutation_from_numpy_order`]
//! - [`AxisTags::permute`], [`AxisTags::transpose`], [`AxisTags::swap_axes`]
//!
//! ## Indexing
//!
//! - [`transform`]: axistags of `array[expr]`
//! - [`parse_index`]: parse `"[:, 2, ...]"` into [`IndexItem`]s
//!
//! ## Serialization
//!
//! - [`AxisTags::to_json`], [`AxisTags::from_json`]; `AxisTags` also implements
//!   `serde::Serialize` and `serde::Deserialize`
//!
//! # Example
//!
//! ```rust
//! use axistags::{
//!     parse_index, permutation_to_numpy_order, transform, AxisTags, StorageOrder,
//! };
//!
//! let mut tags = AxisTags::from_keys("xy").unwrap();
//! tags.insert_channel_axis(StorageOrder::ColumnMajor).unwrap();
//! assert_eq!(tags.to_string(), "c x y");
//!
//! let perm = permutation_to_numpy_order(&tags, StorageOrder::RowMajor);
//! tags.permute(&perm).unwrap();
//! assert_eq!(tags.to_string(), "y x c");
//!
//! let sliced = transform(&tags, &parse_index("[::2, 0]").unwrap(), 2).unwrap();
//! assert_eq!(sliced.to_string(), "y c");
//! ```

pub use axistags_core;
pub use axistags_index;
pub use axistags_perm;

pub use axistags_core::{
    AxisInfo, AxisSelector, AxisTags, AxisTagsError, AxisType, FftDirection, Result, StorageOrder,
};
pub use axistags_index::{output_rank, parse_index, transform, IndexItem, SliceSpec};
pub use axistags_perm::{
    inverse_permutation, is_permutation, permutation_from_normal_order,
    permutation_from_numpy_order, permutation_to_normal_order, permutation_to_numpy_order,
};
