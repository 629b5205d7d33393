//! Provider traits — the narrow interfaces through which the core consumes
//! the surrounding application
//!
//! The core never owns roster data, settings, or history storage; it takes
//! read-only snapshots at draw start and emits results back through these
//! traits.

use crate::config::DrawConfig;
use crate::entity::{Entity, EntityId};
use crate::history::HistoryRecord;

/// Supplies the current roster for the active group
pub trait RosterProvider {
    /// Snapshot of the roster; taken once per draw
    fn roster(&self) -> Vec<Entity>;

    /// Identity of the active group (recorded in history)
    fn pool_id(&self) -> String;

    /// Display label of the active group
    fn pool_label(&self) -> String;

    /// Called after a draw, once per winner
    fn increment_pick_count(&mut self, id: &EntityId);
}

/// Supplies the per-draw configuration
pub trait SettingsProvider {
    /// Snapshot of the draw configuration; immutable for one draw
    fn draw_config(&self) -> DrawConfig;
}

/// Draw history lookback and append
///
/// Records are ordered most-recent-first; the cooldown filter relies on it.
pub trait HistoryProvider {
    /// The `limit` most recent records
    fn recent(&self, limit: usize) -> Vec<HistoryRecord>;

    /// Append a completed draw
    fn append(&mut self, record: HistoryRecord);
}
