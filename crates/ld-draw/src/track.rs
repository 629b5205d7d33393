//! Track synthesis — the entry sequence one animated slot scrolls through

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use ld_core::Entity;

/// Track shape parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackParams {
    /// Random entries before the winner (fixes the winner index)
    pub obfuscation_rounds: u32,

    /// Random entries after the winner so the reel never scrolls past the end
    pub tail_buffer: u32,
}

impl Default for TrackParams {
    fn default() -> Self {
        Self {
            obfuscation_rounds: 30,
            tail_buffer: 3,
        }
    }
}

/// A fixed sequence of roster entries ending at a designated winner
///
/// Immutable once built; consumed by exactly one slot animator. The winner
/// sits at a constant, known index (`obfuscation_rounds`), so the target
/// scroll offset is computable before any timing starts, independent of
/// pool size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Ordered entries, winner included
    pub entries: Vec<Entity>,

    /// Index of the winner within `entries`
    pub winner_index: usize,
}

impl Track {
    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the track is empty (never true for a built track)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The designated winner
    pub fn winner(&self) -> &Entity {
        &self.entries[self.winner_index]
    }

    /// Scroll offset that centers the winner in the viewport
    ///
    /// `(winner_index × item_extent) + item_extent/2 − viewport_extent/2`.
    /// Fixed once the track is built.
    pub fn target_offset(&self, item_extent: f64, viewport_extent: f64) -> f64 {
        (self.winner_index as f64 * item_extent) + item_extent / 2.0 - viewport_extent / 2.0
    }
}

/// Build a track: `obfuscation_rounds` random pool entries, the winner,
/// then `tail_buffer` more random entries
///
/// Entries are drawn with replacement; an empty pool falls back to
/// repeating the winner so the track shape is always well-formed.
pub fn build_track<R: Rng + ?Sized>(
    pool: &[Entity],
    winner: &Entity,
    params: &TrackParams,
    rng: &mut R,
) -> Track {
    let rounds = params.obfuscation_rounds as usize;
    let tail = params.tail_buffer as usize;
    let mut entries = Vec::with_capacity(rounds + 1 + tail);

    let mut filler = |rng: &mut R| -> Entity {
        pool.choose(rng).unwrap_or(winner).clone()
    };

    for _ in 0..rounds {
        entries.push(filler(rng));
    }
    entries.push(winner.clone());
    for _ in 0..tail {
        entries.push(filler(rng));
    }

    Track {
        entries,
        winner_index: rounds,
    }
}
