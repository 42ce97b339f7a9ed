use crate::{
    CoordinateSystem, CoreError, CoreResult, FinishedRecording, GuidingState, HistoryStore,
    ImplementWidth, Position, RecordingEvent, RecordingStatus, Session, estimate_area,
};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use tracing::{debug, info, instrument, trace, warn};

/// Drives a [`Session`] through its Idle / Recording / Paused lifecycle.
///
/// The controller is the single writer of its session: every event is fully
/// applied, area recomputation included, before the call returns.
///
/// # Example
///
/// ```
/// use field_trace_core::{
///     CoordinateSystem, CoreResult, FinishedRecording, GuidingState, HistoryStore, Position,
///     RecordingController,
/// };
///
/// struct Discard;
///
/// impl HistoryStore for Discard {
///     fn save_recording(&mut self, _record: &FinishedRecording) {}
/// }
///
/// impl GuidingState for Discard {
///     fn reset(&mut self) {}
/// }
///
/// fn main() -> CoreResult<()> {
///     let mut controller = RecordingController::new(Discard, Discard, CoordinateSystem::Planar);
///
///     controller.start(3.0)?;
///     controller.on_new_position(Position::new(0.0, 0.0))?;
///     controller.on_new_position(Position::new(0.0, 100.0))?;
///     assert_eq!(controller.area(), 0.03);
///
///     let record = controller.stop_and_save()?;
///     assert_eq!(record.area, 0.03);
///     Ok(())
/// }
/// ```
pub struct RecordingController<H, G> {
    session: Session,
    coordinate_system: CoordinateSystem,
    history: H,
    guiding: G,
}

impl<H: HistoryStore, G: GuidingState> RecordingController<H, G> {
    /// Creates an idle controller.
    pub fn new(history: H, guiding: G, coordinate_system: CoordinateSystem) -> Self {
        Self {
            session: Session::default(),
            coordinate_system,
            history,
            guiding,
        }
    }

    /// Read-only view of the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Current lifecycle status.
    pub fn status(&self) -> RecordingStatus {
        self.session.status()
    }

    /// Cached covered area in hectares.
    pub fn area(&self) -> f64 {
        self.session.area()
    }

    /// Coordinate system positions are interpreted in.
    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.coordinate_system
    }

    /// The history store collaborator.
    pub fn history(&self) -> &H {
        &self.history
    }

    /// The guidance collaborator.
    pub fn guiding(&self) -> &G {
        &self.guiding
    }

    /// Applies one event to the session.
    ///
    /// # Errors
    ///
    /// Propagates the error of the matching operation.
    #[track_caller]
    #[instrument(skip(self, event), fields(event = event.name()))]
    pub fn apply(&mut self, event: RecordingEvent) -> CoreResult<()> {
        match event {
            RecordingEvent::Start { implement_width } => self.start(implement_width),
            RecordingEvent::Sample(position) => self.on_new_position(position),
            RecordingEvent::Pause => self.pause(),
            RecordingEvent::Resume => self.resume(),
            RecordingEvent::Cancel => self.cancel(),
            RecordingEvent::Stop => self.stop_and_save().map(|_| ()),
        }
    }

    /// Starts a new session.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidTransition`] unless idle,
    /// [`CoreError::InvalidConfiguration`] for a non-positive width.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn start(&mut self, implement_width: f64) -> CoreResult<()> {
        if self.status() != RecordingStatus::Idle {
            return Err(self.invalid_transition("start"));
        }

        let width = ImplementWidth::new(implement_width)?;
        let started_at = Utc::now();
        self.session.begin(width, started_at);

        info!(
            implement_width = width.meters(),
            started_at = %started_at.to_rfc3339(),
            coordinate_system = ?self.coordinate_system,
            "Recording started"
        );

        Ok(())
    }

    /// Accepts a position sample.
    ///
    /// Samples outside the Recording status are ignored and return `Ok`.
    ///
    /// # Errors
    ///
    /// [`CoreError::AreaComputationFailed`] if the area could not be
    /// recomputed. The sample is kept and the previous area is retained.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn on_new_position(&mut self, position: Position) -> CoreResult<()> {
        if self.status() != RecordingStatus::Recording {
            trace!(status = ?self.status(), "Ignoring position sample");
            return Ok(());
        }

        self.session.push_position(position);
        self.recompute_area()
    }

    /// Pauses recording and closes the open segment.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidTransition`] unless recording.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn pause(&mut self) -> CoreResult<()> {
        if self.status() != RecordingStatus::Recording {
            return Err(self.invalid_transition("pause"));
        }

        self.session.set_status(RecordingStatus::Paused);
        self.session.open_segment();

        info!(
            segment_count = self.session.segments().len(),
            area_ha = self.area(),
            "Recording paused"
        );

        Ok(())
    }

    /// Resumes recording into the segment opened at pause.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidTransition`] unless paused.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn resume(&mut self) -> CoreResult<()> {
        if self.status() != RecordingStatus::Paused {
            return Err(self.invalid_transition("resume"));
        }

        self.session.set_status(RecordingStatus::Recording);

        info!("Recording resumed");

        Ok(())
    }

    /// Discards the session and resets guidance.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidTransition`] when already idle.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn cancel(&mut self) -> CoreResult<()> {
        if self.status() == RecordingStatus::Idle {
            return Err(self.invalid_transition("cancel"));
        }

        let discarded = self.session.take();
        self.guiding.reset();

        info!(
            position_count = discarded.position_count(),
            "Recording cancelled"
        );

        Ok(())
    }

    /// Hands the session to the history store, then discards it.
    ///
    /// Returns the record that was saved.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidTransition`] when already idle.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn stop_and_save(&mut self) -> CoreResult<FinishedRecording> {
        let (Some(started_at), Some(width)) =
            (self.session.started_at(), self.session.implement_width())
        else {
            return Err(self.invalid_transition("stop"));
        };

        let ended_at = Utc::now();
        let finished = self.session.take();

        let record = FinishedRecording {
            date_start: started_at,
            date_end: ended_at,
            area: finished.area(),
            trace: finished.segments().to_vec(),
            equipment_width: width,
        };

        self.history.save_recording(&record);
        self.guiding.reset();

        info!(
            area_ha = record.area,
            segment_count = record.trace.len(),
            position_count = finished.position_count(),
            duration_s = (ended_at - started_at).num_seconds(),
            "Recording stopped and saved"
        );

        Ok(record)
    }

    /// Recomputes the cached area from the full segment set.
    #[track_caller]
    fn recompute_area(&mut self) -> CoreResult<()> {
        let Some(width) = self.session.implement_width() else {
            return Ok(());
        };

        match estimate_area(self.session.segments(), width, self.coordinate_system) {
            Ok(area) => {
                self.session.set_area(area);
                debug!(
                    area_ha = area,
                    position_count = self.session.position_count(),
                    "Area updated"
                );
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, retained_area_ha = self.area(), "Keeping previous area");
                Err(e)
            }
        }
    }

    #[track_caller]
    fn invalid_transition(&self, event: &'static str) -> CoreError {
        CoreError::InvalidTransition {
            event,
            status: self.status(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
