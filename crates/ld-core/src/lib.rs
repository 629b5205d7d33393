//! ld-core: Shared types, traits, and utilities for LuckDraw
//!
//! This crate provides the foundational types used across all LuckDraw crates:
//! the roster entity model, fairness/draw configuration, history records, and
//! the provider traits through which the core consumes external collaborators.

mod config;
mod entity;
mod error;
mod history;
mod provider;

pub use config::*;
pub use entity::*;
pub use error::*;
pub use history::*;
pub use provider::*;
