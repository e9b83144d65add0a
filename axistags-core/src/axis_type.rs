//! Axis type classification.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Bitmask describing what an axis measures.
    ///
    /// Combinations are meaningful: a spatial axis after a Fourier transform is
    /// `SPACE | FREQUENCY`. The empty mask is [`AxisType::UNKNOWN`].
    /// [`AxisType::NON_CHANNEL`] and [`AxisType::ALL_AXES`] are query masks and
    /// are never stored on a descriptor by the constructors of this crate. Both
    /// select unknown axes as well (see [`AxisType::matches`]).
    ///
    /// The numeric values are part of the serialized form.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct AxisType: u32 {
        const CHANNELS = 1;
        const SPACE = 1 << 1;
        const ANGLE = 1 << 2;
        const TIME = 1 << 3;
        const FREQUENCY = 1 << 4;
        const EDGE = 1 << 5;
        const NON_CHANNEL = Self::SPACE.bits()
            | Self::ANGLE.bits()
            | Self::TIME.bits()
            | Self::FREQUENCY.bits()
            | Self::EDGE.bits();
        const ALL_AXES = Self::CHANNELS.bits() | Self::NON_CHANNEL.bits();
    }
}

/// Single-bit flags in declaration order, with their display names.
const NAMED: [(AxisType, &str); 6] = [
    (AxisType::CHANNELS, "Channels"),
    (AxisType::SPACE, "Space"),
    (AxisType::ANGLE, "Angle"),
    (AxisType::TIME, "Time"),
    (AxisType::FREQUENCY, "Frequency"),
    (AxisType::EDGE, "Edge"),
];

impl AxisType {
    /// No classification.
    pub const UNKNOWN: AxisType = AxisType::empty();

    /// Whether an axis with flags `self` is selected by the query `mask`.
    ///
    /// Typed axes are selected by masks sharing a bit with them. Unknown axes
    /// count as non-channel: they are selected by `UNKNOWN` and by any mask
    /// covering all of `NON_CHANNEL` (so `NON_CHANNEL` and `ALL_AXES`).
    pub fn matches(self, mask: AxisType) -> bool {
        if self.is_empty() {
            mask.is_empty() || mask.contains(AxisType::NON_CHANNEL)
        } else {
            self.intersects(mask)
        }
    }
}

impl Default for AxisType {
    fn default() -> Self {
        AxisType::UNKNOWN
    }
}

impl fmt::Display for AxisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Unknown");
        }
        let mut first = true;
        for (flag, name) in NAMED {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}
