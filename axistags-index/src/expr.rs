//! Index-expression items.

use std::fmt;
use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use axistags_core::AxisInfo;

/// A slice `start:stop:step`; every part is optional.
///
/// Only the step matters for axis metadata: a stepped slice multiplies the
/// axis resolution by the step, sign included.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SliceSpec {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}

impl SliceSpec {
    /// The full range `:`.
    pub fn full() -> Self {
        Self::default()
    }

    pub fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Self { start, stop, step }
    }

    pub fn with_step(mut self, step: isize) -> Self {
        self.step = Some(step);
        self
    }

    /// Factor applied to the resolution of the sliced axis, if any.
    pub fn resolution_factor(&self) -> Option<f64> {
        self.step.map(|s| s as f64)
    }
}

impl fmt::Display for SliceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(start) = self.start {
            write!(f, "{start}")?;
        }
        f.write_str(":")?;
        if let Some(stop) = self.stop {
            write!(f, "{stop}")?;
        }
        if let Some(step) = self.step {
            write!(f, ":{step}")?;
        }
        Ok(())
    }
}

/// One item of a numpy-style multi-index.
#[derive(Clone, Debug, PartialEq)]
pub enum IndexItem {
    /// Integer index: selects one position and drops the axis.
    Index(isize),
    /// Slice: keeps the axis.
    Slice(SliceSpec),
    /// `...`: keeps as many axes as the other items leave unconsumed.
    Ellipsis,
    /// `None` / `newaxis`: inserts an axis of unknown type.
    NewAxis,
    /// Keeps the axis at the cursor but replaces its descriptor.
    Axis(AxisInfo),
    /// Inserts a new axis with the given descriptor.
    Insert(AxisInfo),
}

impl IndexItem {
    /// Whether the item uses up one axis of the indexed array.
    pub fn consumes_axis(&self) -> bool {
        matches!(
            self,
            IndexItem::Index(_) | IndexItem::Slice(_) | IndexItem::Axis(_)
        )
    }
}

impl fmt::Display for IndexItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexItem::Index(i) => write!(f, "{i}"),
            IndexItem::Slice(spec) => write!(f, "{spec}"),
            IndexItem::Ellipsis => f.write_str("..."),
            IndexItem::NewAxis => f.write_str("None"),
            IndexItem::Axis(info) => write!(f, "axis('{}')", info.key()),
            IndexItem::Insert(info) => write!(f, "insert('{}')", info.key()),
        }
    }
}

impl From<isize> for IndexItem {
    fn from(i: isize) -> Self {
        IndexItem::Index(i)
    }
}

impl From<i32> for IndexItem {
    fn from(i: i32) -> Self {
        IndexItem::Index(i as isize)
    }
}

impl From<SliceSpec> for IndexItem {
    fn from(spec: SliceSpec) -> Self {
        IndexItem::Slice(spec)
    }
}

impl From<RangeFull> for IndexItem {
    fn from(_: RangeFull) -> Self {
        IndexItem::Slice(SliceSpec::full())
    }
}

impl From<Range<isize>> for IndexItem {
    fn from(r: Range<isize>) -> Self {
        IndexItem::Slice(SliceSpec::new(Some(r.start), Some(r.end), None))
    }
}

impl From<RangeFrom<isize>> for IndexItem {
    fn from(r: RangeFrom<isize>) -> Self {
        IndexItem::Slice(SliceSpec::new(Some(r.start), None, None))
    }
}

impl From<RangeTo<isize>> for IndexItem {
    fn from(r: RangeTo<isize>) -> Self {
        IndexItem::Slice(SliceSpec::new(None, Some(r.end), None))
    }
}

impl From<AxisInfo> for IndexItem {
    fn from(info: AxisInfo) -> Self {
        IndexItem::Axis(info)
    }
}
