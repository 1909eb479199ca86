//! Side-by-side column layout.
//!
//! # Algorithm
//!
//! Per overlap cluster:
//! 1. Stable sort by start minute.
//! 2. Greedy interval partitioning: each item goes into the first
//!    column holding no item it overlaps; otherwise a new column opens
//!    on the right. For same-day items every earlier member of a column
//!    ends before its last member starts, so this is the classic
//!    "last item does not overlap" test; overnight items can also reach
//!    back to the early-morning members.
//! 3. Right-fill: an item widens into each following column that holds
//!    no item overlapping it, stopping at the first blocked column.
//!
//! Column slots are then mapped to pixels against the container width.
//!
//! # Reference
//! Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1 (Interval Partitioning)

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::cluster::group_by_overlap;
use crate::models::{overlaps, ColumnSlot, Frame, ItemId, Timed};

/// Base paint order for column frames.
pub const COLUMN_Z_BASE: i64 = 1000;

/// Pixel mapping configuration for column layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnsConfig {
    /// Spacing between adjacent columns (px).
    pub gutter_px: f64,
    /// Left inset of the container (px).
    pub pad_left_px: f64,
    /// Right inset of the container (px).
    pub pad_right_px: f64,
}

impl Default for ColumnsConfig {
    fn default() -> Self {
        Self {
            gutter_px: 2.0,
            pad_left_px: 0.0,
            pad_right_px: 0.0,
        }
    }
}

impl ColumnsConfig {
    /// Sets the gutter.
    pub fn with_gutter(mut self, gutter_px: f64) -> Self {
        self.gutter_px = gutter_px;
        self
    }

    /// Sets the left and right insets.
    pub fn with_padding(mut self, left_px: f64, right_px: f64) -> Self {
        self.pad_left_px = left_px;
        self.pad_right_px = right_px;
        self
    }
}

/// Assigns column slots to the members of one cluster.
///
/// Returns `(id, slot)` pairs in the cluster's input order.
pub fn assign_columns<T: Timed>(cluster: &[&T]) -> Vec<(ItemId, ColumnSlot)> {
    let mut by_start: Vec<usize> = (0..cluster.len()).collect();
    by_start.sort_by_key(|&i| cluster[i].from());

    // columns hold indices into `cluster`
    let mut columns: Vec<Vec<usize>> = Vec::new();
    let mut column_of = vec![0usize; cluster.len()];

    for &idx in &by_start {
        let item = cluster[idx];
        let free = columns
            .iter()
            .position(|col| col.iter().all(|&placed| !overlaps(cluster[placed], item)));
        let col = match free {
            Some(col) => col,
            None => {
                columns.push(Vec::new());
                columns.len() - 1
            }
        };
        columns[col].push(idx);
        column_of[idx] = col;
    }

    let render_column_count = columns.len();

    cluster
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let own = column_of[idx];
            let blocked_at = columns[own + 1..].iter().position(|col| {
                col.iter()
                    .any(|&other| other != idx && overlaps(cluster[other], *item))
            });
            let span_columns = 1 + blocked_at.unwrap_or(render_column_count - own - 1);
            (
                item.id(),
                ColumnSlot {
                    left_index: own,
                    render_column_count,
                    span_columns,
                },
            )
        })
        .collect()
}

/// Computes column slots for every item, cluster by cluster.
pub fn compute_columns<T: Timed>(items: &[T]) -> HashMap<ItemId, ColumnSlot> {
    let mut out = HashMap::with_capacity(items.len());
    for cluster in group_by_overlap(items) {
        let slots = assign_columns(&cluster);
        tracing::trace!(
            size = cluster.len(),
            columns = ?slots.first().map(|(_, s)| s.render_column_count),
            "column cluster"
        );
        out.extend(slots);
    }
    out
}

/// Maps one column slot to pixels.
pub fn slot_to_frame(slot: &ColumnSlot, container_width_px: f64, config: &ColumnsConfig) -> Frame {
    let count = slot.render_column_count.max(1) as f64;
    let total_gutters = (count - 1.0) * config.gutter_px;
    let inner_width = container_width_px - config.pad_left_px - config.pad_right_px - total_gutters;
    let col_width = inner_width / count;

    let left = config.pad_left_px + slot.left_index as f64 * (col_width + config.gutter_px);
    let span = slot.span_columns as f64;
    let width = col_width * span + config.gutter_px * (span - 1.0);

    Frame::new(left, width, COLUMN_Z_BASE + slot.left_index as i64)
}

/// Maps every column slot to pixels.
pub fn columns_to_pixels(
    slots: &HashMap<ItemId, ColumnSlot>,
    container_width_px: f64,
    config: &ColumnsConfig,
) -> HashMap<ItemId, Frame> {
    slots
        .iter()
        .map(|(&id, slot)| (id, slot_to_frame(slot, container_width_px, config)))
        .collect()
}
