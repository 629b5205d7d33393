//! Easing curves for reel deceleration

/// Quintic ease-out: `1 − (1 − x)^5`
///
/// Fast start, long deceleration. Monotonic on [0, 1], never overshoots,
/// and reaches exactly 1.0 at x = 1.0 so the final offset snaps without
/// residual error. Input outside [0, 1] is clamped.
pub fn ease_out_quint(x: f64) -> f64 {
    let x = x.clamp(0.0, 1.0);
    1.0 - (1.0 - x).powi(5)
}
