//! Draw history records
//!
//! Produced by the caller after a draw; the core only reads them back as the
//! cooldown filter's lookback source. Most-recent-first ordering is assumed.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityId};

/// A winner reference stored in a history record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerRef {
    /// Entity id at draw time
    pub id: EntityId,
    /// Display name at draw time (kept so records survive roster edits)
    pub name: String,
}

impl From<&Entity> for WinnerRef {
    fn from(e: &Entity) -> Self {
        Self {
            id: e.id.clone(),
            name: e.name.clone(),
        }
    }
}

/// One completed draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Draw timestamp (ms since epoch)
    pub timestamp_ms: i64,

    /// Identity of the source pool (group/class id)
    pub pool_id: String,

    /// Display label of the source pool
    pub pool_label: String,

    /// Ordered winners
    pub winners: Vec<WinnerRef>,
}

impl HistoryRecord {
    /// Create a record from winning entities
    pub fn new(
        timestamp_ms: i64,
        pool_id: impl Into<String>,
        pool_label: impl Into<String>,
        winners: &[Entity],
    ) -> Self {
        Self {
            timestamp_ms,
            pool_id: pool_id.into(),
            pool_label: pool_label.into(),
            winners: winners.iter().map(WinnerRef::from).collect(),
        }
    }

    /// Ids of this record's winners
    pub fn winner_ids(&self) -> impl Iterator<Item = &EntityId> {
        self.winners.iter().map(|w| &w.id)
    }
}

/// Collect every entity id appearing in the most recent `window` records
///
/// `records` must be ordered most-recent-first.
pub fn recently_picked_ids(records: &[HistoryRecord], window: u32) -> HashSet<EntityId> {
    records
        .iter()
        .take(window as usize)
        .flat_map(|r| r.winner_ids().cloned())
        .collect()
}
