use field_trace_core::RecordingEvent;

/// Commands sent from the script reader to the main application.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Start a new recording session.
    Start {
        /// Script line the command came from.
        line: usize,
        /// Implement width in meters, or the configured default when absent.
        implement_width: Option<f64>,
    },
    /// Forward a lifecycle event or position sample to the controller.
    Event {
        /// Script line the command came from.
        line: usize,
        /// Event to apply.
        event: RecordingEvent,
    },
    /// Request application shutdown.
    Shutdown,
}
