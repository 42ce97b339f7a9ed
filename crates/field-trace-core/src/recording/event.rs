use crate::Position;

/// Every input that can drive a recording session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecordingEvent {
    /// Open a new session with the given implement width in meters.
    Start {
        /// Working width of the implement.
        implement_width: f64,
    },
    /// A new position fix from the positioning source.
    Sample(Position),
    /// Close the current segment and stop accepting samples.
    Pause,
    /// Accept samples again, into the segment opened at pause.
    Resume,
    /// Discard the session.
    Cancel,
    /// Hand the session to the history store and discard it.
    Stop,
}

impl RecordingEvent {
    /// Short name used in logs and transition errors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start { .. } => "start",
            Self::Sample(_) => "sample",
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Cancel => "cancel",
            Self::Stop => "stop",
        }
    }
}
