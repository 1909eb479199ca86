//! Stacked (indented) layout.
//!
//! # Algorithm
//!
//! Per overlap cluster, sweep items by start minute:
//! 1. The active items are the already placed ones that still overlap
//!    the current item. For same-day items that is every item whose
//!    normalized end is `>` the current start; overnight items also
//!    reach back to the early-morning items placed before them.
//! 2. Take the lowest level not held by any active item.
//! 3. Indent by `min(level, cap) * indent_px`; shrink width to match,
//!    floored at `min_width_px`.
//!
//! Paint order is `9999 + start * stride + level`, so later starts and
//! deeper levels draw on top. `stride` is 10 unless some level reaches
//! 10, in which case it grows to the next power of ten.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use super::cluster::group_by_overlap;
use crate::models::{overlaps, Frame, ItemId, Minutes, Timed};

/// Base paint order for stacked frames.
pub const STACK_Z_BASE: i64 = 9999;

const MIN_Z_STRIDE: i64 = 10;

/// Configuration for stacked layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StackedConfig {
    /// Horizontal nudge per overlap level (px).
    pub indent_px: f64,
    /// Breathing room on the right edge (px).
    pub right_pad_px: f64,
    /// Floor on item width (px).
    pub min_width_px: f64,
    /// Deepest level that still indents.
    pub cap_indent_levels: usize,
}

impl Default for StackedConfig {
    fn default() -> Self {
        Self {
            indent_px: 12.0,
            right_pad_px: 0.0,
            min_width_px: 30.0,
            cap_indent_levels: 4,
        }
    }
}

impl StackedConfig {
    /// Sets the per-level indent.
    pub fn with_indent(mut self, indent_px: f64) -> Self {
        self.indent_px = indent_px;
        self
    }

    /// Sets the right padding.
    pub fn with_right_pad(mut self, right_pad_px: f64) -> Self {
        self.right_pad_px = right_pad_px;
        self
    }

    /// Sets the minimum width.
    pub fn with_min_width(mut self, min_width_px: f64) -> Self {
        self.min_width_px = min_width_px;
        self
    }

    /// Sets the indent cap.
    pub fn with_indent_cap(mut self, levels: usize) -> Self {
        self.cap_indent_levels = levels;
        self
    }
}

/// Level placement of one item, before paint order is fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Placement {
    id: ItemId,
    start: Minutes,
    level: usize,
    left_px: f64,
    width_px: f64,
}

/// Level sweep over one cluster; yields each item with its level in
/// start order.
fn sweep_levels<'a, T: Timed>(cluster: &[&'a T]) -> Vec<(&'a T, usize)> {
    let mut by_start: Vec<&T> = cluster.to_vec();
    by_start.sort_by_key(|item| item.from());

    let mut placed: Vec<(&T, usize)> = Vec::with_capacity(by_start.len());

    for item in by_start {
        let used: BTreeSet<usize> = placed
            .iter()
            .filter(|&&(other, _)| overlaps(other, item))
            .map(|&(_, level)| level)
            .collect();
        let level = (0..).find(|l| !used.contains(l)).unwrap_or(used.len());

        placed.push((item, level));
    }

    placed
}

/// Assigns overlap levels to the members of one cluster.
///
/// Returns `(id, level)` pairs in start order.
pub fn assign_levels<T: Timed>(cluster: &[&T]) -> Vec<(ItemId, usize)> {
    sweep_levels(cluster)
        .into_iter()
        .map(|(item, level)| (item.id(), level))
        .collect()
}

fn place<T: Timed>(
    cluster: &[&T],
    container_width_px: f64,
    config: &StackedConfig,
) -> Vec<Placement> {
    sweep_levels(cluster)
        .into_iter()
        .map(|(item, level)| {
            let visual_level = level.min(config.cap_indent_levels);
            let left_px = visual_level as f64 * config.indent_px;
            let available = container_width_px - left_px - config.right_pad_px;
            Placement {
                id: item.id(),
                start: item.from(),
                level,
                left_px,
                width_px: available.max(config.min_width_px),
            }
        })
        .collect()
}

/// Smallest power of ten strictly above every level, at least 10.
fn z_stride(max_level: usize) -> i64 {
    let mut stride = MIN_Z_STRIDE;
    while (max_level as i64) >= stride {
        stride *= 10;
    }
    stride
}

/// Computes stacked frames for every item, cluster by cluster.
pub fn compute_stacked<T: Timed>(
    items: &[T],
    container_width_px: f64,
    config: &StackedConfig,
) -> HashMap<ItemId, Frame> {
    let mut placements = Vec::with_capacity(items.len());
    for cluster in group_by_overlap(items) {
        let placed = place(&cluster, container_width_px, config);
        tracing::trace!(
            size = cluster.len(),
            max_level = ?placed.iter().map(|p| p.level).max(),
            "stacked cluster"
        );
        placements.extend(placed);
    }

    let stride = z_stride(placements.iter().map(|p| p.level).max().unwrap_or(0));

    placements
        .into_iter()
        .map(|p| {
            let z = STACK_Z_BASE + i64::from(p.start) * stride + p.level as i64;
            (p.id, Frame::new(p.left_px, p.width_px, z))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::random_day;
    use crate::models::Interval;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn levels(items: &[Interval]) -> HashMap<ItemId, usize> {
        group_by_overlap(items)
            .iter()
            .flat_map(|c| assign_levels(c))
            .collect()
    }

    #[test]
    fn test_two_overlapping_levels() {
        let items = vec![Interval::new(101, 480, 540), Interval::new(103, 525, 570)];
        let frames = compute_stacked(&items, 200.0, &StackedConfig::default());

        assert_eq!(frames[&101], Frame::new(0.0, 200.0, 9999 + 480 * 10));
        assert_eq!(frames[&103], Frame::new(12.0, 188.0, 9999 + 525 * 10 + 1));
    }

    #[test]
    fn test_level_reuse_after_end() {
        let items = vec![
            Interval::new(1, 600, 660),
            Interval::new(2, 630, 720),
            Interval::new(3, 660, 700), // 1 has ended, level 0 is free
        ];
        let lv = levels(&items);
        assert_eq!(lv[&1], 0);
        assert_eq!(lv[&2], 1);
        assert_eq!(lv[&3], 0);
    }

    #[test]
    fn test_lowest_free_level() {
        let items = vec![
            Interval::new(1, 600, 700), // 0
            Interval::new(2, 610, 630), // 1
            Interval::new(3, 620, 700), // 2
            Interval::new(4, 640, 690), // 2 is still held, 1 is free
        ];
        let lv = levels(&items);
        assert_eq!(lv[&4], 1);
    }

    #[test]
    fn test_overnight_item_stays_active() {
        let items = vec![
            Interval::new(1, 1380, 60), // 23:00-01:00
            Interval::new(2, 1400, 1430),
        ];
        let lv = levels(&items);
        assert_eq!(lv[&1], 0);
        assert_eq!(lv[&2], 1);
    }

    #[test]
    fn test_overnight_vs_early_morning() {
        // 00:00-00:30 sorts first but is still covered by 23:00-01:00
        let items = vec![Interval::new(1, 1380, 60), Interval::new(2, 0, 30)];
        let lv = levels(&items);
        assert_eq!(lv[&2], 0);
        assert_eq!(lv[&1], 1);
    }

    #[test]
    fn test_indent_cap_and_min_width() {
        let config = StackedConfig::default().with_indent(20.0).with_indent_cap(2);
        let items: Vec<Interval> = (0..5).map(|i| Interval::new(i, 600 + i as i32, 700)).collect();
        let frames = compute_stacked(&items, 80.0, &config);

        assert_eq!(frames[&0].left_px, 0.0);
        assert_eq!(frames[&2].left_px, 40.0);
        assert_eq!(frames[&4].left_px, 40.0); // capped
        assert_eq!(frames[&4].width_px, 40.0);
        assert!(frames[&4].z_index > frames[&3].z_index);

        let narrow = compute_stacked(&items, 50.0, &config);
        assert_eq!(narrow[&2].width_px, 30.0); // floored
    }

    #[test]
    fn test_z_stride_widens_for_deep_stacks() {
        assert_eq!(z_stride(0), 10);
        assert_eq!(z_stride(9), 10);
        assert_eq!(z_stride(10), 100);
        assert_eq!(z_stride(150), 1000);

        // twelve items all starting together: levels 0..=11
        let mut items: Vec<Interval> = (0..12).map(|i| Interval::new(i, 600, 700)).collect();
        items.push(Interval::new(99, 601, 700));
        let frames = compute_stacked(&items, 300.0, &StackedConfig::default());
        let max_at_600 = (0..12_i64).map(|i| frames[&i].z_index).max().unwrap();
        assert!(frames[&99].z_index > max_at_600);
    }

    #[test]
    fn test_zero_length_marker() {
        let items = vec![Interval::new(1, 600, 700), Interval::new(2, 650, 650)];
        let frames = compute_stacked(&items, 100.0, &StackedConfig::default());
        // separate cluster, no indent
        assert_eq!(frames[&2].left_px, 0.0);
    }

    #[test]
    fn test_overnight_item_avoids_level_of_early_morning_item() {
        let items = vec![
            Interval::new(1, 0, 30),    // level 0
            Interval::new(2, 20, 150),  // level 1
            Interval::new(3, 100, 200), // 1 has ended, level 0
            Interval::new(4, 1380, 60), // overlaps 1 and 2, not 3
        ];
        let lv = levels(&items);
        assert_eq!(lv[&3], 0);
        assert_eq!(lv[&4], 2);
    }

    #[test]
    fn test_placement_keeps_own_start_with_duplicate_ids() {
        let items = vec![Interval::new(7, 600, 700), Interval::new(7, 650, 720)];
        let cluster: Vec<&Interval> = items.iter().collect();
        let placed = place(&cluster, 200.0, &StackedConfig::default());

        let starts: Vec<(Minutes, usize)> = placed.iter().map(|p| (p.start, p.level)).collect();
        assert_eq!(starts, vec![(600, 0), (650, 1)]);
    }

    #[test]
    fn test_overlapping_items_never_share_level_random() {
        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..100 {
                let items = random_day(&mut rng, 25);
                let lv = levels(&items);
                assert_eq!(lv.len(), items.len());

                let frames = compute_stacked(&items, 240.0, &StackedConfig::default());
                assert!(frames.values().all(|f| f.width_px >= 30.0));

                for cluster in group_by_overlap(&items) {
                    for a in &cluster {
                        for b in &cluster {
                            if a.id != b.id && overlaps(*a, *b) {
                                assert_ne!(lv[&a.id], lv[&b.id], "seed {seed}");
                            }
                        }
                    }
                }
            }
        }
    }
}
