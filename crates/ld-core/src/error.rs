//! Error types for LuckDraw

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum LdError {
    #[error("a draw is already in progress")]
    DrawInProgress,

    /// Returned by render surface implementations; the coordinator logs
    /// and ignores it.
    #[error("Render error: {0}")]
    Render(String),
}

/// Result type alias
pub type LdResult<T> = Result<T, LdError>;
