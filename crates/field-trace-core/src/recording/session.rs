use crate::{ImplementWidth, Position, RecordingStatus, Segment};

use chrono::{DateTime, Utc};

/// Complete mutable state of one recording attempt.
///
/// Only the [`RecordingController`](crate::RecordingController) mutates a
/// session; everyone else reads it between events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    status: RecordingStatus,
    segments: Vec<Segment>,
    implement_width: Option<ImplementWidth>,
    started_at: Option<DateTime<Utc>>,
    area: f64,
}

impl Session {
    /// Current lifecycle status.
    pub fn status(&self) -> RecordingStatus {
        self.status
    }

    /// Segments in chronological order. The last one is the open segment.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Width fixed at start, `None` while idle.
    pub fn implement_width(&self) -> Option<ImplementWidth> {
        self.implement_width
    }

    /// Start time, `None` while idle.
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Cached covered area in hectares.
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Total number of recorded positions across all segments.
    pub fn position_count(&self) -> usize {
        self.segments.iter().map(Segment::len).sum()
    }

    pub(crate) fn begin(&mut self, implement_width: ImplementWidth, started_at: DateTime<Utc>) {
        *self = Self {
            status: RecordingStatus::Recording,
            segments: vec![Segment::new()],
            implement_width: Some(implement_width),
            started_at: Some(started_at),
            area: 0.0,
        };
    }

    pub(crate) fn set_status(&mut self, status: RecordingStatus) {
        self.status = status;
    }

    pub(crate) fn set_area(&mut self, area: f64) {
        self.area = area;
    }

    pub(crate) fn push_position(&mut self, position: Position) {
        match self.segments.last_mut() {
            Some(open) => open.push(position),
            None => self.segments.push(Segment::from(vec![position])),
        }
    }

    /// Closes the open segment by starting a new empty one.
    pub(crate) fn open_segment(&mut self) {
        self.segments.push(Segment::new());
    }

    /// Returns the session to idle, handing back what it held.
    pub(crate) fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}
