//! Parser for numpy-style index strings.
//!
//! Accepts comma-separated items, optionally wrapped in `[...]` or `(...)`:
//! integers, slices `start:stop:step` with any part omitted, `...`, and
//! `None` / `newaxis` / `np.newaxis`. Whitespace is ignored and one trailing
//! comma is allowed.

use axistags_core::{AxisTagsError, Result};

use crate::expr::{IndexItem, SliceSpec};

/// Parse an index string like `"[:, 2, ...]"` or `"None, 1::2"`.
pub fn parse_index(s: &str) -> Result<Vec<IndexItem>> {
    // Strip all whitespace
    let s: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    let body = strip_brackets(&s)?;
    if body.is_empty() {
        return Ok(Vec::new());
    }
    let body = if body.len() > 1 {
        body.strip_suffix(',').unwrap_or(body)
    } else {
        body
    };

    let mut items = Vec::new();
    for (pos, part) in body.split(',').enumerate() {
        items.push(parse_item(part, pos)?);
    }
    Ok(items)
}

fn strip_brackets(s: &str) -> Result<&str> {
    for (open, close) in [('[', ']'), ('(', ')')] {
        match (s.starts_with(open), s.ends_with(close)) {
            (true, true) if s.len() >= 2 => return Ok(&s[1..s.len() - 1]),
            (false, false) => {}
            _ => {
                return Err(AxisTagsError::MalformedExpression(format!(
                    "unbalanced '{open}{close}' in index expression"
                )))
            }
        }
    }
    Ok(s)
}

fn parse_item(part: &str, pos: usize) -> Result<IndexItem> {
    match part {
        "" => Err(AxisTagsError::MalformedExpression(format!(
            "empty item at position {pos}"
        ))),
        "..." | "Ellipsis" => Ok(IndexItem::Ellipsis),
        "None" | "newaxis" | "np.newaxis" => Ok(IndexItem::NewAxis),
        _ if part.contains(':') => parse_slice(part).map(IndexItem::Slice),
        _ => parse_int(part).map(IndexItem::Index),
    }
}

fn parse_slice(part: &str) -> Result<SliceSpec> {
    let fields: Vec<&str> = part.split(':').collect();
    if fields.len() > 3 {
        return Err(AxisTagsError::MalformedExpression(format!(
            "slice '{part}' has more than three fields"
        )));
    }
    let bound = |f: &str| -> Result<Option<isize>> {
        if f.is_empty() {
            Ok(None)
        } else {
            parse_int(f).map(Some)
        }
    };
    let start = bound(fields[0])?;
    let stop = bound(fields[1])?;
    let step = match fields.get(2) {
        Some(f) => bound(f)?,
        None => None,
    };
    if step == Some(0) {
        return Err(AxisTagsError::MalformedExpression(format!(
            "slice '{part}' has zero step"
        )));
    }
    Ok(SliceSpec::new(start, stop, step))
}

fn parse_int(s: &str) -> Result<isize> {
    s.parse::<isize>()
        .map_err(|_| AxisTagsError::MalformedExpression(format!("invalid index '{s}'")))
}
