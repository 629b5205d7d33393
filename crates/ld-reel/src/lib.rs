//! # ld-reel — Slot reveal animation engine for LuckDraw
//!
//! Plays back an already-decided draw outcome as N independently eased,
//! staggered scrolling reels. The winners are fixed before the first tick;
//! this crate only computes how the reveal looks and when it settles.
//!
//! ## Architecture
//!
//! ```text
//! AnimationCoordinator
//!     │
//!     ├── SlotAnimator × N   (Pending → Running → Settled)
//!     │       ├── ease_out_quint progress → scroll offset
//!     │       ├── fisheye emphasis for items near the viewport center
//!     │       └── crossing events (once per item boundary)
//!     │
//!     ├── Clock              (injected tick source; real or manual)
//!     ├── RenderSurface      (declarative frames; failures logged, ignored)
//!     └── ReelObserver       (crossing/settle events for audio etc.)
//! ```
//!
//! Everything is driven by delivered timestamps — no module reads the wall
//! clock directly, so tests tick a [`ManualClock`] deterministically.

pub mod clock;
pub mod coordinator;
pub mod easing;
pub mod emphasis;
pub mod event;
pub mod geometry;
pub mod slot;
pub mod surface;
pub mod timing;

pub use clock::*;
pub use coordinator::*;
pub use easing::*;
pub use emphasis::*;
pub use event::*;
pub use geometry::*;
pub use slot::*;
pub use surface::*;
pub use timing::*;
