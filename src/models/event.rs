//! Appointment (event) model.
//!
//! An event occupies a minute-of-day interval on exactly one resource
//! and carries display payload for the rendering layer.

use serde::{Deserialize, Serialize};

use super::interval::{ItemId, Minutes, Timed};
use super::resource::ResourceId;

/// A scheduled appointment on one resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique event identifier.
    pub id: ItemId,
    /// Owning resource.
    pub resource_id: ResourceId,
    /// Start minute (inclusive).
    pub from: Minutes,
    /// End minute (exclusive). `to < from` wraps past midnight.
    pub to: Minutes,
    /// Short title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Rendering hints.
    #[serde(default)]
    pub meta: EventMeta,
}

/// Rendering hints attached to an event.
///
/// Opaque to the layout engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMeta {
    /// Host-defined status code (e.g. booking state).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u8>,
    /// Whether the client is flagged as preferred.
    #[serde(default)]
    pub preferred: bool,
    /// Free-text note shown on the block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Event {
    /// Creates a new event without payload.
    pub fn new(id: ItemId, resource_id: ResourceId, from: Minutes, to: Minutes) -> Self {
        Self {
            id,
            resource_id,
            from,
            to,
            title: None,
            description: None,
            meta: EventMeta::default(),
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the status code.
    pub fn with_status(mut self, status: u8) -> Self {
        self.meta.status = Some(status);
        self
    }

    /// Marks the event as preferred.
    pub fn with_preferred(mut self, preferred: bool) -> Self {
        self.meta.preferred = preferred;
        self
    }

    /// Sets the note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.meta.note = Some(note.into());
        self
    }

    /// Moves the event to a new resource and time.
    ///
    /// Returns the rescheduled copy; the original is untouched.
    pub fn rescheduled(&self, resource_id: ResourceId, from: Minutes, to: Minutes) -> Self {
        Self {
            resource_id,
            from,
            to,
            ..self.clone()
        }
    }

    /// Whether a non-empty note is attached.
    pub fn has_note(&self) -> bool {
        self.meta.note.as_deref().is_some_and(|n| !n.trim().is_empty())
    }
}

impl Timed for Event {
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
