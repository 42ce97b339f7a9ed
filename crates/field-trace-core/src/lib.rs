//! Field-trace Core Library
//!
//! Records an implement's path across pause/resume cycles and keeps a running
//! estimate of the ground it has covered.
//!
//! Positions are grouped into segments, each segment is buffered by half the
//! implement width into a corridor, and the corridors are unioned so that
//! overlapping passes count once. Areas are reported in hectares.
//!
//! # Example
//!
//! ```
//! use field_trace_core::{
//!     CoordinateSystem, CoreResult, ImplementWidth, Position, Segment, estimate_area,
//! };
//!
//! fn main() -> CoreResult<()> {
//!     let pass: Segment = [(0.0, 0.0), (0.0, 100.0)].into_iter().map(Position::from).collect();
//!     let width = ImplementWidth::new(3.0)?;
//!
//!     let hectares = estimate_area(&[pass], width, CoordinateSystem::Planar)?;
//!
//!     assert_eq!(hectares, 0.03);
//!     Ok(())
//! }
//! ```

mod coverage;
mod error;
mod geometry;
mod recording;

pub use {
    coverage::{SQUARE_METERS_PER_HECTARE, covered_area_m2, estimate_area, round_hectares},
    error::CoreError,
    error::Result as CoreResult,
    geometry::{CoordinateSystem, Position},
    recording::{
        FinishedRecording, GuidingState, HistoryStore, ImplementWidth, RecordingController,
        RecordingEvent, RecordingStatus, Segment, Session,
    },
};
