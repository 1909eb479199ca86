//! Blackout periods on a resource.
//!
//! Two shapes exist:
//! - [`DisabledBlock`]: an identified, titled blackout that is laid out
//!   side-by-side like events (its own id space).
//! - [`DisabledInterval`]: an anonymous shaded range that is drawn
//!   full-width and never participates in layout.

use serde::{Deserialize, Serialize};

use super::interval::{ItemId, Minutes, TimeSpan, Timed};
use super::resource::ResourceId;

/// A titled blackout block on one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisabledBlock {
    /// Unique block identifier (disjoint from event ids).
    pub id: ItemId,
    /// Owning resource.
    pub resource_id: ResourceId,
    /// Start minute (inclusive).
    pub from: Minutes,
    /// End minute (exclusive).
    pub to: Minutes,
    /// Label shown on the block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl DisabledBlock {
    /// Creates a new untitled block.
    pub fn new(id: ItemId, resource_id: ResourceId, from: Minutes, to: Minutes) -> Self {
        Self {
            id,
            resource_id,
            from,
            to,
            title: None,
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl Timed for DisabledBlock {
    fn id(&self) -> ItemId {
        self.id
    }

    fn from(&self) -> Minutes {
        self.from
    }

    fn to(&self) -> Minutes {
        self.to
    }
}

/// An anonymous unavailable range on one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisabledInterval {
    /// Owning resource.
    pub resource_id: ResourceId,
    /// Start minute (inclusive).
    pub from: Minutes,
    /// End minute (exclusive).
    pub to: Minutes,
}

impl DisabledInterval {
    /// Creates a new interval.
    pub fn new(resource_id: ResourceId, from: Minutes, to: Minutes) -> Self {
        Self {
            resource_id,
            from,
            to,
        }
    }

    /// Normalized span of this interval.
    pub fn span(&self) -> TimeSpan {
        TimeSpan::normalized(self.from, self.to)
    }

    /// Whether a minute falls inside this interval.
    pub fn covers(&self, minute: Minutes) -> bool {
        self.span().contains(minute)
    }
}
