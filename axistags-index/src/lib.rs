//! Numpy-style indexing applied to axistags.
//!
//! Given the axistags of an array and the index expression used to view it,
//! [`transform`] derives the axistags of the result. Expressions are built
//! from [`IndexItem`]s directly, through `From` conversions
//! (`IndexItem::from(..)`, `IndexItem::from(2)`), or parsed from text with
//! [`parse_index`].
//!
//! # Example
//!
//! ```rust
//! use axistags_core::AxisTags;
//! use axistags_index::{output_rank, parse_index, transform};
//!
//! let tags = AxisTags::from_keys("txyc").unwrap();
//! let expr = parse_index("[0, ::2, ...]").unwrap();
//! let rank = output_rank(tags.len(), &expr).unwrap();
//! let new = transform(&tags, &expr, rank).unwrap();
//! assert_eq!(new.to_string(), "x y c");
//! ```

pub mod expr;
pub mod parse;
pub mod transform;

pub use expr::{IndexItem, SliceSpec};
pub use parse::parse_index;
pub use transform::{output_rank, transform};
