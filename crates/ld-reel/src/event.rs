//! Reel events — what the animation reports while it runs
//!
//! Consumed by audio (ticks and the settle chord) and anything else that
//! wants to follow the reveal without touching render state.

use serde::{Deserialize, Serialize};

/// An observable moment in a running reveal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ReelEvent {
    /// A slot's scroll offset crossed an item boundary
    ///
    /// Strictly increasing `index` per slot; each index fires at most once.
    Crossing {
        slot: usize,
        index: u32,
        timestamp_ms: f64,
    },

    /// One slot reached its target and froze
    SlotSettled { slot: usize, timestamp_ms: f64 },

    /// Every slot has settled; fires exactly once per draw
    AllSettled { timestamp_ms: f64 },
}

impl ReelEvent {
    /// Event timestamp on the shared animation timeline
    pub fn timestamp_ms(&self) -> f64 {
        match self {
            Self::Crossing { timestamp_ms, .. }
            | Self::SlotSettled { timestamp_ms, .. }
            | Self::AllSettled { timestamp_ms } => *timestamp_ms,
        }
    }
}

/// Observer for reel events
pub trait ReelObserver {
    fn on_event(&mut self, event: &ReelEvent);
}

/// Observer that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl ReelObserver for NullObserver {
    fn on_event(&mut self, _event: &ReelEvent) {}
}

/// Observer that records events, for tests and tracing
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub events: Vec<ReelEvent>,
}

impl ReelObserver for RecordingObserver {
    fn on_event(&mut self, event: &ReelEvent) {
        self.events.push(*event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serde_roundtrip() {
        let e = ReelEvent::Crossing {
            slot: 2,
            index: 14,
            timestamp_ms: 1234.5,
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"crossing\""));
        let back: ReelEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }
}
