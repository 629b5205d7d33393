//! # ld-audio — Best-effort audio for LuckDraw
//!
//! Turns reel events into sound: a short frequency-jittered tick per item
//! crossing while the reels spin, and a four-note ascending chord when the
//! whole reveal settles.
//!
//! Everything here is best-effort by contract: a missing output device, a
//! dead stream, or a disabled flag silently produces no sound and never
//! interrupts the animation or invalidates the already-decided winners.

mod error;
mod sink;
mod sync;
mod tone;

pub use error::*;
pub use sink::*;
pub use sync::*;
pub use tone::*;
