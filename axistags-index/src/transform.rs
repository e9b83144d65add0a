//! Derive the axistags of an indexed array.
//!
//! The walk keeps a cursor into the old axes. Integer indices drop the axis at
//! the cursor, slices keep it (multiplying the resolution by the step),
//! `NewAxis` and `Insert` add an axis without moving the cursor,
//! and an ellipsis copies every axis the other items leave unconsumed. An
//! expression without an ellipsis that consumes fewer axes than exist gets an
//! implicit one appended.

use axistags_core::{AxisInfo, AxisTags, AxisTagsError, Result};

use crate::expr::IndexItem;

struct Resolved {
    /// Number of old axes covered by the ellipsis.
    span: usize,
    implicit_ellipsis: bool,
    rank: usize,
}

fn resolve(old_len: usize, expr: &[IndexItem]) -> Result<Resolved> {
    let mut consumed = 0usize;
    let mut emitted = 0usize;
    let mut ellipses = 0usize;
    for item in expr {
        match item {
            IndexItem::Index(_) => consumed += 1,
            IndexItem::Slice(spec) => {
                if spec.step == Some(0) {
                    return Err(AxisTagsError::MalformedExpression(
                        "slice step cannot be zero".into(),
                    ));
                }
                consumed += 1;
                emitted += 1;
            }
            IndexItem::Axis(_) => {
                consumed += 1;
                emitted += 1;
            }
            IndexItem::NewAxis | IndexItem::Insert(_) => emitted += 1,
            IndexItem::Ellipsis => ellipses += 1,
        }
    }
    if ellipses > 1 {
        return Err(AxisTagsError::MalformedExpression(format!(
            "at most one ellipsis allowed, found {ellipses}"
        )));
    }
    if consumed > old_len {
        return Err(AxisTagsError::MalformedExpression(format!(
            "expression indexes {consumed} axes but only {old_len} exist"
        )));
    }
    let span = old_len - consumed;
    Ok(Resolved {
        span,
        implicit_ellipsis: ellipses == 0 && span > 0,
        rank: emitted + span,
    })
}

/// Number of axes an array of rank `old_len` has after indexing with `expr`.
pub fn output_rank(old_len: usize, expr: &[IndexItem]) -> Result<usize> {
    Ok(resolve(old_len, expr)?.rank)
}

/// Axistags of `old[expr]`.
///
/// `new_rank` is the rank of the indexed array and must agree with what the
/// expression yields.
///
/// # Errors
///
/// * [`AxisTagsError::MalformedExpression`] for more than one ellipsis, a zero
///   slice step, more consuming items than axes, or a rank mismatch.
/// * [`AxisTagsError::PreconditionViolation`] if the result would hold two
///   channel axes.
///
/// # Example
///
/// ```rust
/// use axistags_core::AxisTags;
/// use axistags_index::{transform, IndexItem};
///
/// let old = AxisTags::from_keys("xyc").unwrap();
/// let expr = [IndexItem::from(..), IndexItem::Index(2), IndexItem::Ellipsis];
/// let new = transform(&old, &expr, 2).unwrap();
/// assert_eq!(new.to_string(), "x c");
/// ```
pub fn transform(old: &AxisTags, expr: &[IndexItem], new_rank: usize) -> Result<AxisTags> {
    let resolved = resolve(old.len(), expr)?;
    if resolved.rank != new_rank {
        return Err(AxisTagsError::MalformedExpression(format!(
            "expression yields {} axes, expected {new_rank}",
            resolved.rank
        )));
    }
    tracing::trace!(
        old_rank = old.len(),
        new_rank,
        ellipsis_span = resolved.span,
        implicit_ellipsis = resolved.implicit_ellipsis,
        "transforming axistags"
    );

    let ellipsis = IndexItem::Ellipsis;
    let trailing = resolved.implicit_ellipsis.then_some(&ellipsis);

    let mut new_tags = AxisTags::new();
    let mut cursor = 0usize;
    for item in expr.iter().chain(trailing) {
        match item {
            IndexItem::Index(_) => cursor += 1,
            IndexItem::Slice(spec) => {
                let mut info = old[cursor].clone();
                if let Some(factor) = spec.resolution_factor() {
                    info.scale_resolution(factor);
                }
                new_tags.push(info)?;
                cursor += 1;
            }
            IndexItem::Axis(info) => {
                new_tags.push(info.clone())?;
                cursor += 1;
            }
            IndexItem::NewAxis => new_tags.push(AxisInfo::default())?,
            IndexItem::Insert(info) => new_tags.push(info.clone())?,
            IndexItem::Ellipsis => {
                for _ in 0..resolved.span {
                    new_tags.push(old[cursor].clone())?;
                    cursor += 1;
                }
            }
        }
    }
    debug_assert_eq!(cursor, old.len());
    debug_assert_eq!(new_tags.len(), new_rank);
    Ok(new_tags)
}
