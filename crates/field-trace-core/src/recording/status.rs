use serde::{Deserialize, Serialize};

/// Lifecycle status of a recording session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RecordingStatus {
    /// No session in progress.
    #[default]
    Idle,
    /// Position samples are being recorded.
    Recording,
    /// Session open, samples ignored until resumed.
    Paused,
}
