use crate::{
    CoordinateSystem, FinishedRecording, GuidingState, HistoryStore, Position, RecordingController,
    Segment,
};

/// History store that keeps every record in memory.
#[derive(Debug, Default)]
pub(crate) struct RecordedHistory {
    pub(crate) records: Vec<FinishedRecording>,
}

impl HistoryStore for RecordedHistory {
    fn save_recording(&mut self, record: &FinishedRecording) {
        self.records.push(record.clone());
    }
}

/// Guidance collaborator that counts resets.
#[derive(Debug, Default)]
pub(crate) struct CountingGuidance {
    pub(crate) resets: usize,
}

impl GuidingState for CountingGuidance {
    fn reset(&mut self) {
        self.resets += 1;
    }
}

pub(crate) type TestController = RecordingController<RecordedHistory, CountingGuidance>;

pub(crate) fn planar_controller() -> TestController {
    RecordingController::new(
        RecordedHistory::default(),
        CountingGuidance::default(),
        CoordinateSystem::Planar,
    )
}

pub(crate) fn segment(points: &[(f64, f64)]) -> Segment {
    points.iter().copied().map(Position::from).collect()
}
