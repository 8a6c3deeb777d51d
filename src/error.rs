use std::path::PathBuf;
use thiserror::Error;

/// Dataset failures that abort a run.
#[derive(Debug, Error)]
pub enum ActivityError {
    #[error("invalid aspect ratio '{value}': {reason}")]
    InvalidAspectRatio { value: String, reason: String },

    #[error("activity {index} has an empty title")]
    EmptyTitle { index: usize },

    #[error("activity {index} has no title")]
    MissingTitle { index: usize },

    #[error("activity {index} has a title that is not a string")]
    InvalidTitle { index: usize },

    #[error("no activities to validate")]
    NoActivities,

    #[error("cannot derive an output name from {0:?}")]
    InvalidPath(PathBuf),
}
