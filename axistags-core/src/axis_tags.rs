//! Ordered axis-descriptor sequence.
//!
//! An [`AxisTags`] owns one [`AxisInfo`] per array dimension. Entries are
//! addressed either by position (negative positions count from the end) or by
//! key (first match). At most one entry may be a channel axis.
//!
//! Instances are plain values: concurrent mutation of the same instance must be
//! serialized by the caller.

use std::fmt;
use std::ops::Index;

use crate::{AxisInfo, AxisTagsError, AxisType, FftDirection, Result, StorageOrder};

// ============================================================================
// Selectors
// ============================================================================

/// Something that resolves to a position in an [`AxisTags`].
///
/// Implemented for signed and unsigned integers (positions, negative counting
/// from the end) and for keys (`&str`, `String`, `char`).
pub trait AxisSelector {
    /// Resolve to a position in `[0, tags.len())`.
    fn resolve(&self, tags: &AxisTags) -> Result<usize>;
}

impl AxisSelector for isize {
    fn resolve(&self, tags: &AxisTags) -> Result<usize> {
        tags.normalize(*self)
    }
}

impl AxisSelector for i32 {
    fn resolve(&self, tags: &AxisTags) -> Result<usize> {
        tags.normalize(*self as isize)
    }
}

impl AxisSelector for usize {
    fn resolve(&self, tags: &AxisTags) -> Result<usize> {
        tags.normalize(isize::try_from(*self).unwrap_or(isize::MAX))
    }
}

impl AxisSelector for str {
    fn resolve(&self, tags: &AxisTags) -> Result<usize> {
        tags.index_of(self)
            .ok_or_else(|| AxisTagsError::UnknownKey(self.to_string()))
    }
}

impl AxisSelector for String {
    fn resolve(&self, tags: &AxisTags) -> Result<usize> {
        self.as_str().resolve(tags)
    }
}

impl AxisSelector for char {
    fn resolve(&self, tags: &AxisTags) -> Result<usize> {
        let mut buf = [0u8; 4];
        self.encode_utf8(&mut buf).resolve(tags)
    }
}

impl<S: AxisSelector + ?Sized> AxisSelector for &S {
    fn resolve(&self, tags: &AxisTags) -> Result<usize> {
        (**self).resolve(tags)
    }
}

/// Whether `perm` is a bijection on `[0, len)`.
pub fn is_permutation(perm: &[usize], len: usize) -> bool {
    if perm.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    for &p in perm {
        if p >= len || seen[p] {
            return false;
        }
        seen[p] = true;
    }
    true
}

// ============================================================================
// AxisTags
// ============================================================================

/// Axis descriptors of one array, in axis order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisTags {
    axes: Vec<AxisInfo>,
}

impl AxisTags {
    /// Empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// `len` axes of unknown type.
    pub fn with_len(len: usize) -> Self {
        Self {
            axes: vec![AxisInfo::default(); len],
        }
    }

    /// Build from descriptors in axis order.
    pub fn from_axes<I>(axes: I) -> Result<Self>
    where
        I: IntoIterator<Item = AxisInfo>,
    {
        let mut tags = Self::new();
        for info in axes {
            tags.push(info)?;
        }
        Ok(tags)
    }

    /// Build from a string of conventional keys, e.g. `"xyc"`.
    ///
    /// Accepted characters are `x`, `y`, `z`, `t`, `c` and `e`.
    pub fn from_keys(keys: &str) -> Result<Self> {
        let mut tags = Self::new();
        for ch in keys.chars() {
            let info = match ch {
                'x' => AxisInfo::x(),
                'y' => AxisInfo::y(),
                'z' => AxisInfo::z(),
                't' => AxisInfo::t(),
                'c' => AxisInfo::c(),
                'e' => AxisInfo::e(),
                other => {
                    return Err(AxisTagsError::MalformedInput(format!(
                        "invalid axis key '{other}' in \"{keys}\""
                    )))
                }
            };
            tags.push(info)
                .map_err(|err| AxisTagsError::MalformedInput(err.to_string()))?;
        }
        Ok(tags)
    }

    /// Number of axes.
    #[inline]
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Descriptors in axis order.
    pub fn iter(&self) -> std::slice::Iter<'_, AxisInfo> {
        self.axes.iter()
    }

    /// Keys in axis order; duplicates are kept.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.axes.iter().map(AxisInfo::key)
    }

    /// Position of the first axis with `key`.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.axes.iter().position(|a| a.key() == key)
    }

    fn normalize(&self, index: isize) -> Result<usize> {
        let len = self.axes.len();
        let k = if index < 0 {
            index + len as isize
        } else {
            index
        };
        if k < 0 || k as usize >= len {
            return Err(AxisTagsError::InvalidIndex { index, len });
        }
        Ok(k as usize)
    }

    /// Reject a second channel axis. `replacing` is the slot being overwritten.
    fn check_channel(&self, info: &AxisInfo, replacing: Option<usize>) -> Result<()> {
        if !info.is_channel() {
            return Ok(());
        }
        match self.channel_index() {
            Some(k) if Some(k) != replacing => Err(AxisTagsError::PreconditionViolation(
                format!("already has a channel axis at position {k}"),
            )),
            _ => Ok(()),
        }
    }

    // ------------------------------------------------------------------------
    // Element access
    // ------------------------------------------------------------------------

    /// Descriptor at a position or key.
    ///
    /// Positions may be negative (counted from the end, `[-len, len)`);
    /// otherwise [`AxisTagsError::InvalidIndex`]. A key resolves to the first
    /// axis carrying it, or [`AxisTagsError::UnknownKey`].
    pub fn get<S: AxisSelector>(&self, sel: S) -> Result<&AxisInfo> {
        let k = sel.resolve(self)?;
        Ok(&self.axes[k])
    }

    /// Replace the descriptor at `sel`.
    pub fn set<S: AxisSelector>(&mut self, sel: S, info: AxisInfo) -> Result<()> {
        let k = sel.resolve(self)?;
        self.check_channel(&info, Some(k))?;
        self.axes[k] = info;
        Ok(())
    }

    /// Insert before position `index`; `index == len` appends.
    pub fn insert(&mut self, index: isize, info: AxisInfo) -> Result<()> {
        let k = if index == self.axes.len() as isize {
            self.axes.len()
        } else {
            self.normalize(index)?
        };
        self.check_channel(&info, None)?;
        self.axes.insert(k, info);
        Ok(())
    }

    /// Append at the end.
    pub fn push(&mut self, info: AxisInfo) -> Result<()> {
        self.check_channel(&info, None)?;
        self.axes.push(info);
        Ok(())
    }

    /// Remove and return the descriptor at `sel`.
    pub fn drop_axis<S: AxisSelector>(&mut self, sel: S) -> Result<AxisInfo> {
        let k = sel.resolve(self)?;
        Ok(self.axes.remove(k))
    }

    // ------------------------------------------------------------------------
    // Channel axis
    // ------------------------------------------------------------------------

    /// Position of the channel axis, if there is one.
    pub fn channel_index(&self) -> Option<usize> {
        self.axes.iter().position(AxisInfo::is_channel)
    }

    /// Insert a channel axis where `order` keeps channels: front for column-major,
    /// back for row-major.
    pub fn insert_channel_axis(&mut self, order: StorageOrder) -> Result<()> {
        if let Some(k) = self.channel_index() {
            return Err(AxisTagsError::PreconditionViolation(format!(
                "already has a channel axis at position {k}"
            )));
        }
        let k = order.channel_position(self.axes.len());
        tracing::debug!(position = k, %order, "inserting channel axis");
        self.axes.insert(k, AxisInfo::c());
        Ok(())
    }

    /// Remove the channel axis, if any.
    pub fn drop_channel_axis(&mut self) -> Option<AxisInfo> {
        self.channel_index().map(|k| self.axes.remove(k))
    }

    /// Set the description of the channel axis.
    ///
    /// Fails with [`AxisTagsError::PreconditionViolation`] when there is no
    /// channel axis.
    pub fn set_channel_description(&mut self, description: impl Into<String>) -> Result<()> {
        let k = self.channel_index().ok_or_else(|| {
            AxisTagsError::PreconditionViolation("no channel axis to describe".to_string())
        })?;
        self.axes[k].set_description(description);
        Ok(())
    }

    /// Non-channel axis that comes first in normal order (first one on ties).
    pub fn major_nonchannel_index(&self) -> Option<usize> {
        self.axes
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_type(AxisType::NON_CHANNEL))
            .min_by(|(_, a), (_, b)| a.normal_order_cmp(b))
            .map(|(k, _)| k)
    }

    /// Number of axes selected by `mask` (see [`AxisType::matches`]).
    pub fn axis_type_count(&self, mask: AxisType) -> usize {
        self.axes.iter().filter(|a| a.is_type(mask)).count()
    }

    // ------------------------------------------------------------------------
    // Reordering
    // ------------------------------------------------------------------------

    /// Exchange two axes addressed by position or key.
    pub fn swap_axes<A: AxisSelector, B: AxisSelector>(&mut self, i: A, j: B) -> Result<()> {
        let i = i.resolve(self)?;
        let j = j.resolve(self)?;
        self.axes.swap(i, j);
        Ok(())
    }

    /// Reverse the axis order.
    pub fn transpose(&mut self) {
        self.axes.reverse();
    }

    /// Reorder so that new entry `i` is old entry `perm[i]`.
    ///
    /// Fails with [`AxisTagsError::InvalidPermutation`] unless `perm` is a
    /// bijection on `[0, len)`.
    pub fn permute(&mut self, perm: &[usize]) -> Result<()> {
        if !is_permutation(perm, self.axes.len()) {
            return Err(AxisTagsError::InvalidPermutation {
                perm: perm.to_vec(),
                len: self.axes.len(),
            });
        }
        self.axes = perm.iter().map(|&p| self.axes[p].clone()).collect();
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Resolution and description
    // ------------------------------------------------------------------------

    /// Resolution of the axis at `sel`; `0.0` means unknown.
    pub fn resolution<S: AxisSelector>(&self, sel: S) -> Result<f64> {
        Ok(self.get(sel)?.resolution())
    }

    /// Set the resolution of the axis at `sel`.
    pub fn set_resolution<S: AxisSelector>(&mut self, sel: S, resolution: f64) -> Result<()> {
        let k = sel.resolve(self)?;
        self.axes[k].set_resolution(resolution);
        Ok(())
    }

    /// Multiply the resolution at `sel` by `factor`.
    pub fn scale_resolution<S: AxisSelector>(&mut self, sel: S, factor: f64) -> Result<()> {
        let k = sel.resolve(self)?;
        self.axes[k].scale_resolution(factor);
        Ok(())
    }

    /// Description of the axis at `sel`.
    pub fn description<S: AxisSelector>(&self, sel: S) -> Result<&str> {
        Ok(self.get(sel)?.description())
    }

    /// Set the description of the axis at `sel`.
    pub fn set_description<S: AxisSelector>(
        &mut self,
        sel: S,
        description: impl Into<String>,
    ) -> Result<()> {
        let k = sel.resolve(self)?;
        self.axes[k].set_description(description);
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Frequency domain
    // ------------------------------------------------------------------------

    /// Apply [`AxisInfo::to_frequency_domain`] to the axis at `sel`.
    pub fn to_frequency_domain<S: AxisSelector>(
        &mut self,
        sel: S,
        size: usize,
        direction: FftDirection,
    ) -> Result<()> {
        let k = sel.resolve(self)?;
        self.axes[k] = self.axes[k].to_frequency_domain(size, direction)?;
        Ok(())
    }

    /// Inverse of [`AxisTags::to_frequency_domain`] for the axis at `sel`.
    pub fn from_frequency_domain<S: AxisSelector>(&mut self, sel: S, size: usize) -> Result<()> {
        self.to_frequency_domain(sel, size, FftDirection::Inverse)
    }

    // ------------------------------------------------------------------------
    // Comparison
    // ------------------------------------------------------------------------

    /// Same length and pairwise [`AxisInfo::compatible`].
    pub fn compatible(&self, other: &AxisTags) -> bool {
        self.axes.len() == other.axes.len()
            && self
                .axes
                .iter()
                .zip(other.axes.iter())
                .all(|(a, b)| a.compatible(b))
    }
}

impl Index<usize> for AxisTags {
    type Output = AxisInfo;

    fn index(&self, index: usize) -> &AxisInfo {
        &self.axes[index]
    }
}

impl TryFrom<Vec<AxisInfo>> for AxisTags {
    type Error = AxisTagsError;

    fn try_from(axes: Vec<AxisInfo>) -> Result<Self> {
        Self::from_axes(axes)
    }
}

impl IntoIterator for AxisTags {
    type Item = AxisInfo;
    type IntoIter = std::vec::IntoIter<AxisInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.axes.into_iter()
    }
}

impl<'a> IntoIterator for &'a AxisTags {
    type Item = &'a AxisInfo;
    type IntoIter = std::slice::Iter<'a, AxisInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.axes.iter()
    }
}

/// Keys separated by spaces, e.g. `x y c`.
impl fmt::Display for AxisTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, info) in self.axes.iter().enumerate() {
            if k > 0 {
                f.write_str(" ")?;
            }
            f.write_str(info.key())?;
        }
        Ok(())
    }
}
