//! Reel viewport geometry

use serde::{Deserialize, Serialize};

/// Viewport and item dimensions for one reel, in display units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReelGeometry {
    /// Extent of one item along the scroll axis
    pub item_extent: f64,

    /// Extent of the visible viewport along the scroll axis
    pub viewport_extent: f64,
}

impl Default for ReelGeometry {
    fn default() -> Self {
        Self {
            item_extent: 64.0,
            viewport_extent: 320.0,
        }
    }
}

impl ReelGeometry {
    /// Center of the viewport along the scroll axis
    pub fn viewport_center(&self) -> f64 {
        self.viewport_extent / 2.0
    }

    /// Items that fit in the viewport, plus preload slack
    pub fn visible_items(&self) -> usize {
        (self.viewport_extent / self.item_extent).ceil() as usize + 2
    }

    /// Index of the item at the top of the viewport for a scroll offset
    pub fn index_at(&self, offset: f64) -> i64 {
        (offset / self.item_extent).floor() as i64
    }

    /// Inclusive index range to restyle for a scroll offset
    ///
    /// Viewport plus a two-item margin on each side; cost is bounded by the
    /// viewport, not the track length.
    pub fn render_range(&self, offset: f64, track_len: usize) -> (usize, usize) {
        if track_len == 0 {
            return (0, 0);
        }
        // Clamp both ends into the track so start ≤ end always holds, even
        // for offsets past the final item
        let start = (self.index_at(offset).max(0) as usize).min(track_len - 1);
        let end = (start + self.visible_items()).min(track_len - 1);
        let render_start = start.saturating_sub(2);
        let render_end = (end + 2).min(track_len - 1);
        (render_start, render_end)
    }

    /// Center position of an item within the track
    pub fn item_center(&self, index: usize) -> f64 {
        index as f64 * self.item_extent + self.item_extent / 2.0
    }
}
