//! Roster entity model

use serde::{Deserialize, Serialize};

/// Opaque stable identifier for a roster entity
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl EntityId {
    /// Create a new id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Participation status of a roster entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EntityStatus {
    /// Participates in draws
    #[default]
    Active,
    /// Excluded from draws (absent, opted out, ...)
    Inactive,
}

impl EntityStatus {
    /// Whether this status participates in draws
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// A roster member
///
/// Owned by the external roster collaborator; the core only reads entities
/// and reports pick-count increments back after a draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Stable identity
    pub id: EntityId,

    /// Display name
    pub name: String,

    /// Optional secondary id (roll number, badge, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_id: Option<String>,

    /// Times previously selected
    #[serde(default)]
    pub pick_count: u32,

    /// Accumulated score
    #[serde(default)]
    pub score: i64,

    /// Participation status
    #[serde(default)]
    pub status: EntityStatus,

    /// Last-picked timestamp (ms since epoch)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_picked_ms: Option<i64>,
}

impl Entity {
    /// Create an active entity with zeroed counters
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            alt_id: None,
            pick_count: 0,
            score: 0,
            status: EntityStatus::Active,
            last_picked_ms: None,
        }
    }

    /// Builder: set pick count
    pub fn with_pick_count(mut self, count: u32) -> Self {
        self.pick_count = count;
        self
    }

    /// Builder: set status
    pub fn with_status(mut self, status: EntityStatus) -> Self {
        self.status = status;
        self
    }

    /// Builder: set secondary id
    pub fn with_alt_id(mut self, alt_id: impl Into<String>) -> Self {
        self.alt_id = Some(alt_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_default_is_active() {
        let e = Entity::new("s1", "Alice");
        assert!(e.status.is_active());
        assert_eq!(e.pick_count, 0);
    }

    #[test]
    fn test_entity_serde_defaults() {
        // Minimal JSON must deserialize with defaulted counters
        let e: Entity = serde_json::from_str(r#"{"id":"s1","name":"Alice"}"#).unwrap();
        assert_eq!(e.id.as_str(), "s1");
        assert_eq!(e.status, EntityStatus::Active);
        assert_eq!(e.score, 0);
    }
}
