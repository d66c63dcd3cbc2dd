//! Commentary error types

use std::time::Duration;

use thiserror::Error;

/// Failures at the commentary provider boundary.
///
/// None of these reach the game: the client swaps them for fallback lines.
#[derive(Debug, Error)]
pub enum CommentaryError {
    /// The provider answered with no text
    #[error("empty reply")]
    Empty,

    /// The reply was not the expected JSON shape
    #[error("malformed reply: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The provider did not answer in time
    #[error("no reply within {0:?}")]
    Timeout(Duration),

    /// The external command exited unsuccessfully
    #[error("command exited with {status}: {stderr}")]
    CommandFailed { status: String, stderr: String },

    /// Spawning or talking to the provider failed
    #[error("provider i/o: {0}")]
    Io(#[from] std::io::Error),
}
