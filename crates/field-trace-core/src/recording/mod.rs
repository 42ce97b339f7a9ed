mod collaborators;
mod controller;
mod event;
mod implement_width;
mod record;
mod segment;
mod session;
mod status;

pub use {
    collaborators::{GuidingState, HistoryStore},
    controller::RecordingController,
    event::RecordingEvent,
    implement_width::ImplementWidth,
    record::FinishedRecording,
    segment::Segment,
    session::Session,
    status::RecordingStatus,
};
