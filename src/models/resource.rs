//! Resource model.
//!
//! Resources are the columns of the calendar grid: therapists, rooms,
//! trainers. Each owns the events and blackout blocks placed on it.

use serde::{Deserialize, Serialize};

/// Resource identifier.
pub type ResourceId = i64;

/// A calendar column that events are booked against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Unique resource identifier.
    pub id: ResourceId,
    /// Human-readable name.
    pub name: String,
    /// Avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Resource {
    /// Creates a new resource.
    pub fn new(id: ResourceId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            avatar: None,
        }
    }

    /// Sets the avatar URL.
    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar = Some(url.into());
        self
    }

    /// Initials derived from the name (at most two letters).
    ///
    /// Used as the avatar fallback.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}
