//! Overlap layout for one resource's day.
//!
//! Given the events (or blackout blocks) of a single resource, assigns
//! each item a horizontal [`Frame`] so that items overlapping in time
//! never render on top of each other indistinguishably.
//!
//! # Modes
//!
//! | Mode | Overlapping items | Non-overlapping items |
//! |------|-------------------|-----------------------|
//! | `columns` | side by side, right-filling free columns | full width |
//! | `stacked` | indented per level, later on top | full width |
//!
//! # Usage
//!
//! ```
//! use u_calendar::layout::{compute_frames, LayoutMode, LayoutOptions};
//! use u_calendar::models::Interval;
//!
//! let items = vec![Interval::new(1, 480, 540), Interval::new(2, 525, 570)];
//! let frames = compute_frames(&items, 200.0, LayoutMode::Columns, &LayoutOptions::default());
//! assert_eq!(frames[&1].left_px, 0.0);
//! assert!(frames[&2].left_px > 0.0);
//! ```
//!
//! Every call is a pure function of its inputs: no state survives the
//! call, and the caller owns the returned map.

mod cluster;
mod columns;
mod day;
mod stacked;

pub use cluster::group_by_overlap;
pub use columns::{
    assign_columns, columns_to_pixels, compute_columns, slot_to_frame, ColumnsConfig,
    COLUMN_Z_BASE,
};
pub use day::{layout_resource_day, ResourceDayLayout};
pub use stacked::{assign_levels, compute_stacked, StackedConfig, STACK_Z_BASE};

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{DisabledBlock, Event, Frame, ItemId, Timed};

/// How overlapping items share a resource column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Side-by-side columns.
    Columns,
    /// Indented stacking.
    #[default]
    Stacked,
}

impl LayoutMode {
    /// Lowercase mode name.
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutMode::Columns => "columns",
            LayoutMode::Stacked => "stacked",
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown layout mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLayoutModeError {
    input: String,
}

impl fmt::Display for ParseLayoutModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown layout mode '{}' (expected 'columns' or 'stacked')",
            self.input
        )
    }
}

impl std::error::Error for ParseLayoutModeError {}

impl FromStr for LayoutMode {
    type Err = ParseLayoutModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "columns" => Ok(LayoutMode::Columns),
            "stacked" => Ok(LayoutMode::Stacked),
            _ => Err(ParseLayoutModeError {
                input: s.to_string(),
            }),
        }
    }
}

/// Call-time layout configuration for both modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Used in `columns` mode.
    pub columns: ColumnsConfig,
    /// Used in `stacked` mode.
    pub stacked: StackedConfig,
}

impl LayoutOptions {
    /// Replaces the column configuration.
    pub fn with_columns(mut self, columns: ColumnsConfig) -> Self {
        self.columns = columns;
        self
    }

    /// Replaces the stacked configuration.
    pub fn with_stacked(mut self, stacked: StackedConfig) -> Self {
        self.stacked = stacked;
        self
    }
}

/// Computes a frame for every item.
///
/// `columns` mode clusters, partitions into columns and maps to pixels;
/// `stacked` mode clusters and assigns indent levels. An empty input
/// returns an empty map. With duplicate ids the later item's frame wins.
pub fn compute_frames<T: Timed>(
    items: &[T],
    container_width_px: f64,
    mode: LayoutMode,
    options: &LayoutOptions,
) -> HashMap<ItemId, Frame> {
    let span = tracing::debug_span!(
        "compute_frames",
        items = items.len(),
        %mode,
        width = container_width_px
    );
    let _enter = span.enter();

    if items.is_empty() {
        return HashMap::new();
    }

    match mode {
        LayoutMode::Columns => columns_to_pixels(
            &compute_columns(items),
            container_width_px,
            &options.columns,
        ),
        LayoutMode::Stacked => compute_stacked(items, container_width_px, &options.stacked),
    }
}

/// Computes frames for one resource's events.
pub fn compute_event_frames(
    events: &[Event],
    container_width_px: f64,
    mode: LayoutMode,
    options: &LayoutOptions,
) -> HashMap<ItemId, Frame> {
    compute_frames(events, container_width_px, mode, options)
}

/// Computes frames for one resource's blackout blocks.
///
/// Blocks always use column layout.
pub fn compute_disabled_block_frames(
    blocks: &[DisabledBlock],
    container_width_px: f64,
    config: &ColumnsConfig,
) -> HashMap<ItemId, Frame> {
    columns_to_pixels(&compute_columns(blocks), container_width_px, config)
}

/// Random day of items for the layout sweeps: mostly short same-day
/// items, with overnight items and zero-length markers mixed in.
#[cfg(test)]
pub(crate) fn random_day<R: rand::Rng>(rng: &mut R, max_items: ItemId) -> Vec<crate::models::Interval> {
    use crate::models::Interval;

    (0..rng.random_range(1..max_items))
        .map(|id| match rng.random_range(0..10) {
            0 => {
                let at = rng.random_range(0..1440);
                Interval::new(id, at, at)
            }
            1 | 2 => Interval::new(id, rng.random_range(1320..1440), rng.random_range(0..120)),
            _ => {
                let from = rng.random_range(0..1380);
                Interval::new(id, from, from + rng.random_range(1..60))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Interval;

    #[test]
    fn test_empty_input() {
        let opts = LayoutOptions::default();
        assert!(compute_frames::<Interval>(&[], 100.0, LayoutMode::Columns, &opts).is_empty());
        assert!(compute_frames::<Interval>(&[], 100.0, LayoutMode::Stacked, &opts).is_empty());
    }

    #[test]
    fn test_non_overlapping_full_width_both_modes() {
        let items = vec![Interval::new(1, 480, 540), Interval::new(2, 540, 600)];
        let opts = LayoutOptions::default();
        for mode in [LayoutMode::Columns, LayoutMode::Stacked] {
            let frames = compute_frames(&items, 150.0, mode, &opts);
            for f in frames.values() {
                assert_eq!(f.left_px, 0.0);
                assert_eq!(f.width_px, 150.0);
            }
        }
    }

    #[test]
    fn test_modes_differ() {
        let items = vec![Interval::new(1, 480, 540), Interval::new(2, 525, 570)];
        let opts = LayoutOptions::default();

        let cols = compute_frames(&items, 102.0, LayoutMode::Columns, &opts);
        assert_eq!(cols[&1].width_px, 50.0);
        assert_eq!(cols[&2].left_px, 52.0);

        let stacked = compute_frames(&items, 102.0, LayoutMode::Stacked, &opts);
        assert_eq!(stacked[&1].left_px, 0.0);
        assert_eq!(stacked[&2].left_px, 12.0);
        assert_eq!(stacked[&2].width_px, 90.0);
    }

    #[test]
    fn test_idempotent() {
        let items = vec![
            Interval::new(1, 600, 660),
            Interval::new(2, 645, 720),
            Interval::new(3, 690, 750),
        ];
        let opts = LayoutOptions::default();
        for mode in [LayoutMode::Columns, LayoutMode::Stacked] {
            let a = compute_frames(&items, 240.0, mode, &opts);
            let b = compute_frames(&items, 240.0, mode, &opts);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_overlapping_items_distinguishable() {
        let items = vec![
            Interval::new(1, 600, 700),
            Interval::new(2, 600, 700),
            Interval::new(3, 650, 720),
            Interval::new(4, 1380, 60),
            Interval::new(5, 0, 30),
        ];
        let opts = LayoutOptions::default();
        for mode in [LayoutMode::Columns, LayoutMode::Stacked] {
            let frames = compute_frames(&items, 300.0, mode, &opts);
            for a in &items {
                for b in &items {
                    if a.id != b.id && crate::models::overlaps(a, b) {
                        let fa = frames[&a.id];
                        let fb = frames[&b.id];
                        assert!(
                            (fa.left_px, fa.width_px) != (fb.left_px, fb.width_px),
                            "{mode}: {} and {} collide",
                            a.id,
                            b.id
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_mode_parse_and_display() {
        assert_eq!("columns".parse::<LayoutMode>(), Ok(LayoutMode::Columns));
        assert_eq!(" Stacked ".parse::<LayoutMode>(), Ok(LayoutMode::Stacked));
        assert!("grid".parse::<LayoutMode>().is_err());
        assert_eq!(LayoutMode::Columns.to_string(), "columns");
        assert_eq!(LayoutMode::default(), LayoutMode::Stacked);
    }

    #[test]
    fn test_options_json_defaults() {
        let opts: LayoutOptions =
            serde_json::from_str(r#"{"columns":{"gutterPx":4.0},"stacked":{"capIndentLevels":2}}"#)
                .unwrap();
        assert_eq!(opts.columns.gutter_px, 4.0);
        assert_eq!(opts.columns.pad_left_px, 0.0);
        assert_eq!(opts.stacked.indent_px, 12.0);
        assert_eq!(opts.stacked.min_width_px, 30.0);
        assert_eq!(opts.stacked.cap_indent_levels, 2);

        let empty: LayoutOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, LayoutOptions::default());

        let mode: LayoutMode = serde_json::from_str(r#""columns""#).unwrap();
        assert_eq!(mode, LayoutMode::Columns);
    }

    #[test]
    fn test_disabled_blocks_use_columns() {
        let blocks = vec![
            DisabledBlock::new(1, 1, 720, 780).with_title("Lunch"),
            DisabledBlock::new(2, 1, 750, 800).with_title("Admin"),
        ];
        let frames = compute_disabled_block_frames(&blocks, 102.0, &ColumnsConfig::default());
        assert_eq!(frames[&1].left_px, 0.0);
        assert_eq!(frames[&2].left_px, 52.0);
        assert_eq!(frames[&2].z_index, COLUMN_Z_BASE + 1);
    }
}
