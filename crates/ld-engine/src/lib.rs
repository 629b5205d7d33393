//! # ld-engine — Draw session orchestration for LuckDraw
//!
//! Wires the pipeline end to end: provider snapshots → eligibility filter →
//! sampler → tracks → animated reveal → history append. One `DrawSession`
//! per group; everything it touches is an explicit, injected collaborator.

mod session;

pub use session::*;
