use crate::FinishedRecording;

/// Destination for finished recordings.
///
/// Failures are the store's own concern; the controller does not wait on or
/// inspect the outcome.
pub trait HistoryStore {
    /// Persist a finished recording.
    fn save_recording(&mut self, record: &FinishedRecording);
}

/// Guidance state that must be cleared when a session ends.
pub trait GuidingState {
    /// Reset guidance to its initial state.
    fn reset(&mut self);
}

impl<T: HistoryStore + ?Sized> HistoryStore for Box<T> {
    fn save_recording(&mut self, record: &FinishedRecording) {
        (**self).save_recording(record);
    }
}

impl<T: GuidingState + ?Sized> GuidingState for Box<T> {
    fn reset(&mut self) {
        (**self).reset();
    }
}
