//! Error types for the swar core.
//!
//! Classification itself never fails; these errors come from parsing a
//! scale key out of user text and from reading or writing a session file.

use thiserror::Error;

/// Result type for fallible core operations.
pub type SwarResult<T> = Result<T, SwarError>;

/// Errors that can occur outside the classification path.
#[derive(Debug, Error)]
pub enum SwarError {
    /// The text does not name one of the 12 scale keys.
    #[error("unknown scale key '{0}': expected one of C, C#, D, D#, E, F, F#, G, G#, A, A#, B")]
    UnknownScaleKey(String),

    /// Reading or writing a session file failed.
    #[error("session file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A session file is not valid JSON for a session config.
    #[error("invalid session file: {0}")]
    Json(#[from] serde_json::Error),
}
