//! Audio error types (internal to the sink implementations)

use thiserror::Error;

/// Audio error type
#[derive(Error, Debug)]
pub enum AudioError {
    #[error("No audio output device available")]
    NoDevice,

    #[error("Stream error: {0}")]
    StreamError(String),

    #[error("Unsupported sample format: {0}")]
    UnsupportedFormat(String),
}

/// Result type alias
pub type AudioResult<T> = Result<T, AudioError>;
