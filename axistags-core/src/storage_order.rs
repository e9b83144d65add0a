//! Memory-layout convention used for channel placement and storage-order permutations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AxisTagsError;

/// Default memory order of the arrays an [`AxisTags`](crate::AxisTags) describes.
///
/// Callers fix this once where arrays are constructed and pass it explicitly to
/// the order-dependent operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StorageOrder {
    /// C order: the last index varies fastest. Channels go last.
    #[default]
    #[serde(rename = "C")]
    RowMajor,
    /// Fortran order: the first index varies fastest. Channels go first.
    #[serde(rename = "F")]
    ColumnMajor,
}

impl StorageOrder {
    /// Position at which a new channel axis is inserted into `len` axes.
    #[inline]
    pub fn channel_position(self, len: usize) -> usize {
        match self {
            StorageOrder::RowMajor => len,
            StorageOrder::ColumnMajor => 0,
        }
    }

    #[inline]
    pub fn is_row_major(self) -> bool {
        self == StorageOrder::RowMajor
    }
}

impl fmt::Display for StorageOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageOrder::RowMajor => f.write_str("C"),
            StorageOrder::ColumnMajor => f.write_str("F"),
        }
    }
}

impl FromStr for StorageOrder {
    type Err = AxisTagsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "row-major" | "row_major" => Ok(StorageOrder::RowMajor),
            "f" | "column-major" | "column_major" | "col-major" => Ok(StorageOrder::ColumnMajor),
            other => Err(AxisTagsError::MalformedInput(format!(
                "unknown storage order '{other}': expected C or F"
            ))),
        }
    }
}
