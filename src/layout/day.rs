//! Whole-day layout across resources.
//!
//! Splits the day's events and blackout blocks by owning resource and
//! lays out each resource column independently. Events follow the
//! requested mode; blackout blocks always use columns.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{compute_disabled_block_frames, compute_frames, LayoutMode, LayoutOptions};
use crate::models::{DisabledBlock, Event, Frame, ItemId, Resource, ResourceId};

/// Frames for one resource column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDayLayout {
    /// The resource these frames belong to.
    pub resource_id: ResourceId,
    /// Event id → frame.
    pub event_frames: HashMap<ItemId, Frame>,
    /// Blackout block id → frame.
    pub disabled_frames: HashMap<ItemId, Frame>,
}

impl ResourceDayLayout {
    /// Frame of an event on this resource.
    pub fn event_frame(&self, id: ItemId) -> Option<&Frame> {
        self.event_frames.get(&id)
    }

    /// Frame of a blackout block on this resource.
    pub fn disabled_frame(&self, id: ItemId) -> Option<&Frame> {
        self.disabled_frames.get(&id)
    }
}

/// Lays out every resource column of one day.
///
/// Output follows `resources` order. Items keep their input order
/// within a resource, so clustering behaves as it would for a single
/// resource's list. Items owned by an unknown resource are skipped.
pub fn layout_resource_day(
    resources: &[Resource],
    events: &[Event],
    disabled_blocks: &[DisabledBlock],
    column_width_px: f64,
    mode: LayoutMode,
    options: &LayoutOptions,
) -> Vec<ResourceDayLayout> {
    let mut events_by_resource: HashMap<ResourceId, Vec<Event>> = resources
        .iter()
        .map(|r| (r.id, Vec::new()))
        .collect();
    let mut blocks_by_resource: HashMap<ResourceId, Vec<DisabledBlock>> = resources
        .iter()
        .map(|r| (r.id, Vec::new()))
        .collect();

    for event in events {
        match events_by_resource.get_mut(&event.resource_id) {
            Some(bucket) => bucket.push(event.clone()),
            None => tracing::debug!(
                event_id = event.id,
                resource_id = event.resource_id,
                "skipping event for unknown resource"
            ),
        }
    }

    for block in disabled_blocks {
        match blocks_by_resource.get_mut(&block.resource_id) {
            Some(bucket) => bucket.push(block.clone()),
            None => tracing::debug!(
                block_id = block.id,
                resource_id = block.resource_id,
                "skipping disabled block for unknown resource"
            ),
        }
    }

    resources
        .iter()
        .map(|resource| {
            let events = events_by_resource
                .get(&resource.id)
                .map(Vec::as_slice)
                .unwrap_or_default();
            let blocks = blocks_by_resource
                .get(&resource.id)
                .map(Vec::as_slice)
                .unwrap_or_default();

            ResourceDayLayout {
                resource_id: resource.id,
                event_frames: compute_frames(events, column_width_px, mode, options),
                disabled_frames: compute_disabled_block_frames(
                    blocks,
                    column_width_px,
                    &options.columns,
                ),
            }
        })
        .collect()
}
