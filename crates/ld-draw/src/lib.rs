//! # ld-draw — Fair-selection pipeline for LuckDraw
//!
//! Decides who is eligible and who is picked, and synthesizes the reel
//! tracks the animation layer scrolls through. Winners are fully determined
//! here, before any animation starts — playback is purely illustrative.
//!
//! ## Pipeline
//!
//! ```text
//! roster ──► EligibilityFilter ──► pool ──► WeightedSampler ──► winners
//!                                                                 │
//!                                                                 v
//!                                          TrackBuilder ──► one Track per winner
//! ```
//!
//! Filtering and sampling are pure and infallible: a thin pool relaxes
//! constraints instead of erroring, and only an empty roster produces an
//! empty winner set.

pub mod eligibility;
pub mod engine;
pub mod sampler;
pub mod track;

pub use eligibility::*;
pub use engine::*;
pub use sampler::*;
pub use track::*;
