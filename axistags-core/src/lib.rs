//! Axis metadata for N-dimensional arrays.
//!
//! An array's *axistags* describe what each of its axes means, independently of
//! how the data is laid out in memory. This crate provides the value types and
//! their mutation contract:
//!
//! - [`AxisType`]: bitmask classifying an axis (space, time, channels, ...)
//! - [`AxisInfo`]: one axis descriptor (key, type flags, resolution, description)
//! - [`AxisTags`]: ordered sequence of descriptors, addressable by position or key
//! - [`StorageOrder`]: row-major / column-major configuration for channel placement
//!
//! # Example
//!
//! ```rust
//! use axistags_core::{AxisInfo, AxisTags, StorageOrder};
//!
//! let mut tags = AxisTags::from_axes([AxisInfo::x(), AxisInfo::y()]).unwrap();
//! tags.insert_channel_axis(StorageOrder::RowMajor).unwrap();
//! assert_eq!(tags.to_string(), "x y c");
//!
//! tags.set_resolution("x", 0.5).unwrap();
//! let restored = AxisTags::from_json(&tags.to_json()).unwrap();
//! assert_eq!(restored, tags);
//! ```

mod axis_info;
mod axis_tags;
mod axis_type;
mod codec;
mod storage_order;

pub use axis_info::{AxisInfo, FftDirection};
pub use axis_tags::{is_permutation, AxisSelector, AxisTags};
pub use axis_type::AxisType;
pub use storage_order::StorageOrder;

// ============================================================================
// Error types
// ============================================================================

/// Errors that can occur while querying or rewriting axistags.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AxisTagsError {
    /// Position outside `[-len, len)`.
    #[error("invalid axis index {index} for {len} axes")]
    InvalidIndex { index: isize, len: usize },

    /// No axis carries the requested key.
    #[error("no axis with key '{0}'")]
    UnknownKey(String),

    /// The sequence is not in the state the operation requires.
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    /// A transpose argument is not a bijection on `[0, len)`.
    #[error("invalid permutation {perm:?} for {len} axes")]
    InvalidPermutation { perm: Vec<usize>, len: usize },

    /// An index expression cannot be reconciled with the old or new rank.
    #[error("malformed index expression: {0}")]
    MalformedExpression(String),

    /// Serialized or textual input is missing fields or has the wrong types.
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

/// Result type for axistags operations.
pub type Result<T> = std::result::Result<T, AxisTagsError>;
