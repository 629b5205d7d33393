//! Fairness and draw configuration

use serde::{Deserialize, Serialize};

/// Default maximum simultaneous winners per draw
pub const DEFAULT_MAX_PICK_COUNT: u32 = 10;

/// Fairness constraints applied when building the eligible pool and sampling
///
/// Immutable for the duration of one draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FairnessConfig {
    /// Favor entities with low pick counts when sampling
    #[serde(default)]
    pub weighted: bool,

    /// Number of most recent history records whose participants are
    /// excluded from the current pool (0 = no cooldown)
    #[serde(default)]
    pub cooldown_window: u32,
}

impl FairnessConfig {
    /// Uniform sampling, no cooldown
    pub fn uniform() -> Self {
        Self::default()
    }

    /// Weighted sampling with the given cooldown window
    pub fn weighted(cooldown_window: u32) -> Self {
        Self {
            weighted: true,
            cooldown_window,
        }
    }
}

/// Per-draw configuration supplied by the settings collaborator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawConfig {
    /// Requested winner count (clamped, see [`DrawConfig::clamped_pick_count`])
    pub pick_count: u32,

    /// Upper bound on simultaneous winners
    pub max_pick_count: u32,

    /// Fairness constraints
    #[serde(default)]
    pub fairness: FairnessConfig,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            pick_count: 1,
            max_pick_count: DEFAULT_MAX_PICK_COUNT,
            fairness: FairnessConfig::default(),
        }
    }
}

impl DrawConfig {
    /// Create with a requested pick count
    pub fn new(pick_count: u32) -> Self {
        Self {
            pick_count,
            ..Self::default()
        }
    }

    /// Pick count clamped into `[1, max_pick_count]`
    ///
    /// Malformed values are clamped rather than failing the draw.
    pub fn clamped_pick_count(&self) -> u32 {
        self.pick_count.clamp(1, self.max_pick_count.max(1))
    }
}
