//! SlotAnimator — one animated reel lane as an explicit state machine
//!
//! Pending → Running → Settled, driven purely by delivered tick timestamps.

use serde::{Deserialize, Serialize};

use ld_draw::Track;

use crate::easing::ease_out_quint;
use crate::emphasis::{EmphasisParams, ItemTreatment, ItemVisual};
use crate::geometry::ReelGeometry;

/// Lifecycle state of one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotState {
    /// Built, no tick delivered yet
    Pending,
    /// Progress advancing toward the target
    Running,
    /// Target reached, offset frozen — terminal
    Settled,
}

/// Declarative render state for one slot at one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotFrame {
    /// Slot index
    pub slot: usize,
    /// Current scroll offset
    pub offset: f64,
    /// Visuals for items near the viewport, nothing else
    pub items: Vec<ItemVisual>,
}

/// What one tick produced for one slot
#[derive(Debug, Clone)]
pub struct SlotTick {
    /// Frame to hand to the render surface
    pub frame: SlotFrame,
    /// Item boundary crossed on this tick, if any
    pub crossing: Option<u32>,
    /// True exactly once, on the tick that settled the slot
    pub settled_now: bool,
}

/// One independently animated reel lane
///
/// Never reads a clock: the first delivered tick timestamp becomes the zero
/// point, and all progress derives from subsequent timestamps. Mutated only
/// by the coordinator's tick fan-out.
pub struct SlotAnimator {
    slot: usize,
    track: Track,
    target_offset: f64,
    duration_ms: f64,
    state: SlotState,
    start_ms: Option<f64>,
    progress: f64,
    offset: f64,
    last_crossed: i64,
}

impl SlotAnimator {
    /// Create a pending slot for a track
    pub fn new(slot: usize, track: Track, duration_ms: f64, geometry: &ReelGeometry) -> Self {
        let target_offset = track.target_offset(geometry.item_extent, geometry.viewport_extent);
        Self {
            slot,
            track,
            target_offset,
            duration_ms: duration_ms.max(1.0),
            state: SlotState::Pending,
            start_ms: None,
            progress: 0.0,
            offset: 0.0,
            last_crossed: 0,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> SlotState {
        self.state
    }

    /// Eased target scroll offset, fixed at construction
    pub fn target_offset(&self) -> f64 {
        self.target_offset
    }

    /// Raw progress in [0, 1]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Current scroll offset
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// The track this slot plays back
    pub fn track(&self) -> &Track {
        &self.track
    }

    /// Advance to `now_ms` and produce this tick's frame and events
    ///
    /// The first call records `now_ms` as the slot's zero point. Progress is
    /// monotonically non-decreasing; at raw progress 1 the offset snaps to
    /// the exact target and the slot settles. Ticking a settled slot keeps
    /// returning the frozen frame.
    pub fn tick(
        &mut self,
        now_ms: f64,
        geometry: &ReelGeometry,
        emphasis: &EmphasisParams,
    ) -> SlotTick {
        if self.state == SlotState::Settled {
            return SlotTick {
                frame: self.frame(geometry, emphasis),
                crossing: None,
                settled_now: false,
            };
        }

        let start = *self.start_ms.get_or_insert(now_ms);
        if self.state == SlotState::Pending {
            self.state = SlotState::Running;
        }

        let elapsed = (now_ms - start).max(0.0);
        let raw = (elapsed / self.duration_ms).min(1.0).max(self.progress);
        self.progress = raw;

        let mut settled_now = false;
        if raw >= 1.0 {
            // Snap exactly, no residual easing error
            self.offset = self.target_offset;
            self.state = SlotState::Settled;
            settled_now = true;
        } else {
            self.offset = self.target_offset * ease_out_quint(raw);
        }

        // Each boundary fires at most once; the offset grows monotonically
        // so the floor index can only increase.
        let mut crossing = None;
        let current = geometry.index_at(self.offset);
        if current > self.last_crossed {
            self.last_crossed = current;
            crossing = Some(current as u32);
        }

        SlotTick {
            frame: self.frame(geometry, emphasis),
            crossing,
            settled_now,
        }
    }

    /// Frame for the current offset with fisheye emphasis applied
    fn frame(&self, geometry: &ReelGeometry, emphasis: &EmphasisParams) -> SlotFrame {
        let (start, end) = geometry.render_range(self.offset, self.track.len());
        let center = geometry.viewport_center();

        let mut items = Vec::with_capacity(end - start + 1);
        for index in start..=end {
            let relative = geometry.item_center(index) - self.offset;
            let (scale, opacity, treatment) = emphasis.emphasize(relative - center);
            items.push(ItemVisual {
                index,
                scale,
                opacity,
                treatment,
            });
        }

        SlotFrame {
            slot: self.slot,
            offset: self.offset,
            items,
        }
    }

    /// Frame for the post-settle winner pulse
    ///
    /// Same as the frozen settled frame, but the winning item gets the
    /// settled treatment at pulse scale.
    pub fn flourish_frame(&self, geometry: &ReelGeometry, emphasis: &EmphasisParams) -> SlotFrame {
        let mut frame = self.frame(geometry, emphasis);
        for item in &mut frame.items {
            if item.index == self.track.winner_index {
                item.treatment = ItemTreatment::Settled;
                item.scale = emphasis.settled_scale;
                item.opacity = 1.0;
            }
        }
        frame
    }
}
