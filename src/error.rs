use std::time::Duration;

use thiserror::Error;

/// Failure of a single `fetch_page` call, surfaced to consumers as the
/// session's error banner text.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("data source request failed: {0}")]
    Transport(#[from] anyhow::Error),

    #[error("data source timed out after {0:?}")]
    Timeout(Duration),
}

impl SourceError {
    /// Transport failure from a plain message, for sources that have no
    /// richer cause to attach.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(anyhow::anyhow!(message.into()))
    }
}

/// Synchronous rejection of a filter update whose value is outside its
/// declared domain. Rejected updates never reach the session.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FilterError {
    #[error("minimum rating {0} is outside the 0.0..=5.0 range")]
    RatingOutOfRange(f32),

    #[error("price ceiling {0} must be a finite, non-negative amount")]
    InvalidPrice(f64),

    #[error("search radius must be at least 1 meter")]
    ZeroRadius,
}
