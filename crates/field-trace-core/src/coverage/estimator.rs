//! Coverage area estimation.
//!
//! Every segment with at least two points is buffered into a corridor of the
//! implement's width, the corridors are unioned so overlapping passes count
//! once, and the union's area is reported in hectares.

use crate::{
    CoordinateSystem, CoreError, CoreResult, ImplementWidth, Segment,
    geometry::{Projection, build_corridor, union_all},
};

use std::panic::Location;

use error_location::ErrorLocation;
use geo::{Area, Coord};
use tracing::{debug, instrument, warn};

/// Conversion factor between square meters and hectares.
pub const SQUARE_METERS_PER_HECTARE: f64 = 10_000.0;

/// Estimates the covered area in hectares, rounded to two decimals.
///
/// Pure function: the same inputs always yield the same value.
///
/// # Errors
///
/// Returns [`CoreError::AreaComputationFailed`] when the union of the
/// corridors has no usable area. Segments whose corridor cannot be built are
/// skipped rather than reported.
#[track_caller]
pub fn estimate_area(
    segments: &[Segment],
    implement_width: ImplementWidth,
    coordinate_system: CoordinateSystem,
) -> CoreResult<f64> {
    let square_meters = covered_area_m2(segments, implement_width, coordinate_system)?;

    Ok(round_hectares(square_meters / SQUARE_METERS_PER_HECTARE))
}

/// Full-precision covered area in square meters.
///
/// # Errors
///
/// See [`estimate_area`].
#[track_caller]
#[instrument(skip(segments), fields(segment_count = segments.len()))]
pub fn covered_area_m2(
    segments: &[Segment],
    implement_width: ImplementWidth,
    coordinate_system: CoordinateSystem,
) -> CoreResult<f64> {
    let projection = Projection::for_segments(coordinate_system, segments);
    let half_width = implement_width.meters() / 2.0;

    let mut corridors = Vec::with_capacity(segments.len());

    for (index, segment) in segments.iter().enumerate() {
        if !segment.contributes_area() {
            continue;
        }

        let path: Vec<Coord<f64>> = segment
            .points()
            .iter()
            .map(|position| projection.project(*position))
            .collect();

        match build_corridor(&path, half_width) {
            Ok(corridor) => corridors.push(corridor),
            Err(e) => warn!(segment = index, error = %e, "Skipping segment without a corridor"),
        }
    }

    if corridors.is_empty() {
        return Ok(0.0);
    }

    let corridor_count = corridors.len();
    let covered = union_all(corridors);
    let square_meters = covered.unsigned_area();

    if !square_meters.is_finite() {
        return Err(CoreError::AreaComputationFailed {
            reason: format!(
                "union of {} corridors has non-finite area {}",
                corridor_count, square_meters
            ),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    debug!(
        corridor_count = corridor_count,
        polygon_count = covered.0.len(),
        square_meters = square_meters,
        "Coverage union computed"
    );

    Ok(square_meters)
}

/// Rounds a hectare figure to two decimals for display.
pub fn round_hectares(hectares: f64) -> f64 {
    (hectares * 100.0).round() / 100.0
}
