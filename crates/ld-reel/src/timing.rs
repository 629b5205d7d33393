//! Timing profiles for the reel reveal

use serde::{Deserialize, Serialize};

/// Timing profile identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimingProfile {
    /// Normal reveal pacing
    #[default]
    Normal,
    /// Fast mode for impatient rooms
    Turbo,
    /// Slow pacing with wide stagger, good for audio work
    Studio,
    /// Custom multiplier applied via [`ReelTiming::scaled`]
    Custom,
}

/// Detailed timing configuration for one draw's reveal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReelTiming {
    /// Profile type
    pub profile: TimingProfile,

    /// Spin duration of the first slot (ms)
    pub base_spin_ms: f64,

    /// Extra duration per subsequent slot, so slots settle in sequence (ms)
    pub stagger_ms: f64,

    /// Pause between the last settle and the winner pulse (ms)
    pub settle_delay_ms: f64,

    /// Winner emphasis pulse duration before teardown begins (ms)
    pub flourish_ms: f64,

    /// Surface fade-out duration at teardown (ms)
    pub fade_ms: f64,
}

impl ReelTiming {
    /// Normal reveal pacing
    pub fn normal() -> Self {
        Self {
            profile: TimingProfile::Normal,
            base_spin_ms: 2500.0,
            stagger_ms: 500.0,
            settle_delay_ms: 100.0,
            flourish_ms: 800.0,
            fade_ms: 300.0,
        }
    }

    /// Fast mode
    pub fn turbo() -> Self {
        Self {
            profile: TimingProfile::Turbo,
            base_spin_ms: 1200.0,
            stagger_ms: 250.0,
            settle_delay_ms: 50.0,
            flourish_ms: 400.0,
            fade_ms: 150.0,
        }
    }

    /// Slow pacing with wide stagger so every settle reads clearly
    pub fn studio() -> Self {
        Self {
            profile: TimingProfile::Studio,
            base_spin_ms: 3000.0,
            stagger_ms: 800.0,
            settle_delay_ms: 150.0,
            flourish_ms: 1000.0,
            fade_ms: 300.0,
        }
    }

    /// Scale all durations by `factor` (< 1.0 = faster)
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            profile: TimingProfile::Custom,
            base_spin_ms: self.base_spin_ms * factor,
            stagger_ms: self.stagger_ms * factor,
            settle_delay_ms: self.settle_delay_ms * factor,
            flourish_ms: self.flourish_ms * factor,
            fade_ms: self.fade_ms * factor,
        }
    }

    /// Total spin duration for slot `index`
    pub fn slot_duration(&self, index: usize) -> f64 {
        self.base_spin_ms + index as f64 * self.stagger_ms
    }

    /// Duration until the last of `slot_count` slots settles
    pub fn total_spin_duration(&self, slot_count: usize) -> f64 {
        if slot_count == 0 {
            return 0.0;
        }
        self.slot_duration(slot_count - 1)
    }
}

impl Default for ReelTiming {
    fn default() -> Self {
        Self::normal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_are_ordered() {
        let normal = ReelTiming::normal();
        let turbo = ReelTiming::turbo();
        let studio = ReelTiming::studio();

        assert!(turbo.base_spin_ms < normal.base_spin_ms);
        assert!(studio.base_spin_ms > normal.base_spin_ms);
        assert!(studio.stagger_ms > normal.stagger_ms);
    }

    #[test]
    fn test_slot_durations_stagger() {
        let t = ReelTiming::normal();
        assert_eq!(t.slot_duration(0), 2500.0);
        assert_eq!(t.slot_duration(1), 3000.0);
        assert_eq!(t.slot_duration(2), 3500.0);
        assert_eq!(t.total_spin_duration(3), 3500.0);
        assert_eq!(t.total_spin_duration(0), 0.0);
    }

    #[test]
    fn test_scaled() {
        let half = ReelTiming::normal().scaled(0.5);
        assert_eq!(half.profile, TimingProfile::Custom);
        assert_eq!(half.base_spin_ms, 1250.0);
        assert_eq!(half.stagger_ms, 250.0);
    }
}
