//! Error types for the dock engine
//!
//! All dock errors are recoverable: the controller absorbs them into
//! logged no-ops, so a failed command never blocks later commands.

use crate::platform::ResolveError;

/// Errors that can occur in dock engine operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DockError {
    /// An entry with the same bundle identifier or launch target is already pinned
    DuplicateEntry {
        /// Identifier of the rejected candidate
        bundle_id: String,
    },

    /// No pinned entry matches the given bundle identifier
    EntryNotFound {
        /// Identifier that was looked up
        bundle_id: String,
    },

    /// A drop candidate could not be resolved into an application entry
    InvalidCandidate(ResolveError),

    /// No reference screen is available for layout
    ScreenUnavailable,
}

impl std::fmt::Display for DockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateEntry { bundle_id } => {
                write!(f, "entry already pinned: {}", bundle_id)
            }
            Self::EntryNotFound { bundle_id } => write!(f, "entry not found: {}", bundle_id),
            Self::InvalidCandidate(err) => write!(f, "invalid drop candidate: {}", err),
            Self::ScreenUnavailable => write!(f, "no reference screen available"),
        }
    }
}

impl std::error::Error for DockError {}

impl From<ResolveError> for DockError {
    fn from(err: ResolveError) -> Self {
        Self::InvalidCandidate(err)
    }
}

/// Result type alias for dock operations
pub type DockResult<T> = Result<T, DockError>;
