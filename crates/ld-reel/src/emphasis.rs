//! Fisheye emphasis — proximity-based visual scaling near the viewport center

use serde::{Deserialize, Serialize};

/// Visual treatment class for one item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemTreatment {
    /// Outside the emphasis window: unscaled, low opacity
    Baseline,
    /// Inside the window: scaled/faded by proximity
    Emphasized,
    /// Within the inner focus radius: accent color, full opacity
    Focused,
    /// The winning item after the reel settles: max emphasis pulse
    Settled,
}

/// Declarative visual state for one track item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemVisual {
    /// Index within the track
    pub index: usize,
    /// Scale factor
    pub scale: f64,
    /// Opacity in [0, 1]
    pub opacity: f64,
    /// Treatment class (color/weight is the surface's business)
    pub treatment: ItemTreatment,
}

/// Fisheye parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmphasisParams {
    /// Distance from the viewport center at which emphasis fades to baseline
    pub max_distance: f64,
    /// Inner radius that gets the focused treatment
    pub focus_radius: f64,
    /// Scale boost at distance zero (scale = 1.0 + boost)
    pub max_scale_boost: f64,
    /// Opacity at and beyond `max_distance`
    pub min_opacity: f64,
    /// Scale applied to the winner during the settle pulse
    pub settled_scale: f64,
}

impl Default for EmphasisParams {
    fn default() -> Self {
        Self {
            max_distance: 140.0,
            focus_radius: 40.0,
            max_scale_boost: 0.6,
            min_opacity: 0.5,
            settled_scale: 1.8,
        }
    }
}

impl EmphasisParams {
    /// Compute scale, opacity, and treatment for an item whose center sits
    /// `distance` away from the viewport center
    ///
    /// `ratio = 1 − distance/max_distance` (clamped), `emphasis = ratio²`;
    /// scale and opacity interpolate linearly on `emphasis`. Items inside
    /// the focus radius are focused at full opacity; items beyond the
    /// window keep the baseline presentation.
    pub fn emphasize(&self, distance: f64) -> (f64, f64, ItemTreatment) {
        let distance = distance.abs();
        if distance >= self.max_distance {
            return (1.0, self.min_opacity, ItemTreatment::Baseline);
        }

        let ratio = (1.0 - distance / self.max_distance).clamp(0.0, 1.0);
        let emphasis = ratio * ratio;
        let scale = 1.0 + self.max_scale_boost * emphasis;

        if distance < self.focus_radius {
            (scale, 1.0, ItemTreatment::Focused)
        } else {
            let opacity = self.min_opacity + (1.0 - self.min_opacity) * emphasis;
            (scale, opacity, ItemTreatment::Emphasized)
        }
    }
}
