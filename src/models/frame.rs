//! Layout outputs.

use serde::{Deserialize, Serialize};

/// Absolute horizontal placement of one item inside its resource column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    /// Offset from the column's left edge (px).
    pub left_px: f64,
    /// Block width (px), never negative.
    pub width_px: f64,
    /// Paint order; higher draws on top.
    pub z_index: i64,
}

impl Frame {
    /// Creates a frame, clamping a negative width to zero.
    pub fn new(left_px: f64, width_px: f64, z_index: i64) -> Self {
        Self {
            left_px,
            width_px: width_px.max(0.0),
            z_index,
        }
    }

    /// Right edge (px).
    #[inline]
    pub fn right_px(&self) -> f64 {
        self.left_px + self.width_px
    }
}

/// Abstract column placement inside one overlap cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSlot {
    /// Own column (0-based).
    pub left_index: usize,
    /// Total columns in the cluster.
    pub render_column_count: usize,
    /// Columns occupied, own column included (>= 1).
    pub span_columns: usize,
}
