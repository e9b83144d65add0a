//! Single-axis descriptor.

use std::cmp::Ordering;
use std::fmt;

use crate::{AxisTagsError, AxisType, Result};

/// Direction of a discrete Fourier transform applied along an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FftDirection {
    /// Spatial/temporal domain to frequency domain.
    #[default]
    Forward,
    /// Frequency domain back to the spatial/temporal domain.
    Inverse,
}

impl FftDirection {
    /// Map the integer sign convention: `1` is forward, anything else inverse.
    pub fn from_sign(sign: i32) -> Self {
        if sign == 1 {
            FftDirection::Forward
        } else {
            FftDirection::Inverse
        }
    }
}

/// Metadata for one array axis.
///
/// `key` and `type_flags` are fixed at construction. `resolution` (the sampling
/// distance) and `description` may be changed in place.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisInfo {
    key: String,
    flags: AxisType,
    resolution: f64,
    description: String,
}

impl Default for AxisInfo {
    fn default() -> Self {
        Self {
            key: "?".to_string(),
            flags: AxisType::UNKNOWN,
            resolution: 0.0,
            description: String::new(),
        }
    }
}

impl AxisInfo {
    /// Descriptor with every field given explicitly.
    pub fn new(
        key: impl Into<String>,
        flags: AxisType,
        resolution: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            flags,
            resolution,
            description: description.into(),
        }
    }

    fn of(key: &str, flags: AxisType) -> Self {
        Self::new(key, flags, 0.0, "")
    }

    /// Spatial `x` axis.
    pub fn x() -> Self {
        Self::of("x", AxisType::SPACE)
    }

    pub fn y() -> Self {
        Self::of("y", AxisType::SPACE)
    }

    pub fn z() -> Self {
        Self::of("z", AxisType::SPACE)
    }

    /// Time axis.
    pub fn t() -> Self {
        Self::of("t", AxisType::TIME)
    }

    /// Channel axis.
    pub fn c() -> Self {
        Self::of("c", AxisType::CHANNELS)
    }

    /// Edge axis.
    pub fn e() -> Self {
        Self::of("e", AxisType::EDGE)
    }

    /// Spatial `x` axis in the frequency domain.
    pub fn fx() -> Self {
        Self::of("x", AxisType::SPACE | AxisType::FREQUENCY)
    }

    pub fn fy() -> Self {
        Self::of("y", AxisType::SPACE | AxisType::FREQUENCY)
    }

    pub fn fz() -> Self {
        Self::of("z", AxisType::SPACE | AxisType::FREQUENCY)
    }

    pub fn ft() -> Self {
        Self::of("t", AxisType::TIME | AxisType::FREQUENCY)
    }

    /// Copy of `self` with a different resolution.
    pub fn with_resolution(mut self, resolution: f64) -> Self {
        self.resolution = resolution;
        self
    }

    /// Copy of `self` with a different description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn type_flags(&self) -> AxisType {
        self.flags
    }

    #[inline]
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// `0.0` marks the resolution as unknown.
    pub fn set_resolution(&mut self, resolution: f64) {
        self.resolution = resolution;
    }

    /// Multiply the resolution by `factor`.
    pub fn scale_resolution(&mut self, factor: f64) {
        self.resolution *= factor;
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// See [`AxisType::matches`].
    #[inline]
    pub fn is_type(&self, mask: AxisType) -> bool {
        self.flags.matches(mask)
    }

    /// No type bit set.
    pub fn is_unknown(&self) -> bool {
        self.is_type(AxisType::UNKNOWN)
    }

    pub fn is_spatial(&self) -> bool {
        self.is_type(AxisType::SPACE)
    }

    pub fn is_temporal(&self) -> bool {
        self.is_type(AxisType::TIME)
    }

    pub fn is_channel(&self) -> bool {
        self.is_type(AxisType::CHANNELS)
    }

    pub fn is_frequency(&self) -> bool {
        self.is_type(AxisType::FREQUENCY)
    }

    pub fn is_angular(&self) -> bool {
        self.is_type(AxisType::ANGLE)
    }

    pub fn is_edge(&self) -> bool {
        self.is_type(AxisType::EDGE)
    }

    /// Descriptor of this axis after a Fourier transform of length `size`.
    ///
    /// The frequency bit is set going forward and cleared going back. The new
    /// resolution is `1 / (resolution * size)`, or `0.0` (unknown) when either
    /// factor is not positive.
    pub fn to_frequency_domain(&self, size: usize, direction: FftDirection) -> Result<AxisInfo> {
        let flags = match direction {
            FftDirection::Forward => {
                if self.is_frequency() {
                    return Err(AxisTagsError::PreconditionViolation(format!(
                        "axis '{}' is already in the frequency domain",
                        self.key
                    )));
                }
                self.flags | AxisType::FREQUENCY
            }
            FftDirection::Inverse => {
                if !self.is_frequency() {
                    return Err(AxisTagsError::PreconditionViolation(format!(
                        "axis '{}' is not in the frequency domain",
                        self.key
                    )));
                }
                self.flags - AxisType::FREQUENCY
            }
        };
        let resolution = if self.resolution > 0.0 && size > 0 {
            1.0 / (self.resolution * size as f64)
        } else {
            0.0
        };
        Ok(AxisInfo {
            key: self.key.clone(),
            flags,
            resolution,
            description: self.description.clone(),
        })
    }

    /// Same as [`AxisInfo::to_frequency_domain`] with [`FftDirection::Inverse`].
    pub fn from_frequency_domain(&self, size: usize) -> Result<AxisInfo> {
        self.to_frequency_domain(size, FftDirection::Inverse)
    }

    /// Whether two axes describe the same kind of dimension.
    ///
    /// Unknown axes are compatible with anything. Otherwise keys must be equal
    /// and flags must agree apart from the frequency bit. Resolution and
    /// description are ignored.
    pub fn compatible(&self, other: &AxisInfo) -> bool {
        self.is_unknown()
            || other.is_unknown()
            || (self.flags - AxisType::FREQUENCY == other.flags - AxisType::FREQUENCY
                && self.key == other.key)
    }

    /// Ordering used for the canonical axis order: flags value first, then key.
    ///
    /// Unknown axes rank after every typed axis, so channels always come first.
    pub fn normal_order_cmp(&self, other: &AxisInfo) -> Ordering {
        self.order_rank()
            .cmp(&other.order_rank())
            .then_with(|| self.key.cmp(&other.key))
    }

    fn order_rank(&self) -> u64 {
        if self.is_unknown() {
            u64::from(AxisType::ALL_AXES.bits()) + 1
        } else {
            u64::from(self.flags.bits())
        }
    }
}

impl fmt::Display for AxisInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AxisInfo: '{}' (type: {}", self.key, self.flags)?;
        if self.resolution > 0.0 {
            write!(f, ", resolution={}", self.resolution)?;
        }
        f.write_str(")")?;
        if !self.description.is_empty() {
            write!(f, " {}", self.description)?;
        }
        Ok(())
    }
}
