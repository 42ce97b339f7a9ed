use crate::RecordingStatus;

use error_location::ErrorLocation;
use thiserror::Error;

/// Recording and area-estimation errors with source location tracking.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Lifecycle event not allowed in the current session status.
    #[error("Cannot {event} while {status:?} {location}")]
    InvalidTransition {
        /// Name of the rejected event.
        event: &'static str,
        /// Session status at the time of the event.
        status: RecordingStatus,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Session configuration rejected at start.
    #[error("Invalid configuration: {reason} {location}")]
    InvalidConfiguration {
        /// Description of the rejected value.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Union or area primitive produced an unusable result.
    #[error("Area computation failed: {reason} {location}")]
    AreaComputationFailed {
        /// Description of the geometric failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A single segment could not be turned into a corridor.
    #[error("Degenerate segment: {reason} {location}")]
    DegenerateSegment {
        /// Why the corridor could not be built.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
