//! Swath corridor construction.
//!
//! A corridor is the region covered by an implement of a given width
//! travelling along a polyline: one rectangle per edge with flat ends, plus a
//! bevel wedge filling the gap on the outer side of every turn. The pieces are
//! merged with a boolean union, which also resolves self-overlap when the path
//! doubles back on itself.

use crate::{CoreError, CoreResult, geometry::union_all};

use std::panic::Location;

use error_location::ErrorLocation;
use geo::{Coord, LineString, MultiPolygon, Polygon};

/// Edges shorter than this (meters) are treated as repeated fixes.
const MIN_EDGE_LENGTH_M: f64 = 1e-6;

/// Turns whose sine is below this are considered straight.
const COLLINEAR_TOLERANCE: f64 = 1e-9;

/// Buffers a projected path by `half_width` on each side.
///
/// # Errors
///
/// Returns [`CoreError::DegenerateSegment`] when the path contains a
/// non-finite coordinate or has no edge of measurable length.
#[track_caller]
pub(crate) fn build_corridor(path: &[Coord<f64>], half_width: f64) -> CoreResult<MultiPolygon<f64>> {
    if path.iter().any(|c| !c.x.is_finite() || !c.y.is_finite()) {
        return Err(CoreError::DegenerateSegment {
            reason: "path contains a non-finite coordinate".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let edges: Vec<(Coord<f64>, Coord<f64>)> = path
        .windows(2)
        .map(|pair| (pair[0], pair[1]))
        .filter(|(from, to)| length(*to - *from) >= MIN_EDGE_LENGTH_M)
        .collect();

    if edges.is_empty() {
        return Err(CoreError::DegenerateSegment {
            reason: format!("{} points span no measurable distance", path.len()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let mut pieces: Vec<MultiPolygon<f64>> = edges
        .iter()
        .map(|(from, to)| MultiPolygon::new(vec![edge_rectangle(*from, *to, half_width)]))
        .collect();

    pieces.extend(
        edges
            .windows(2)
            .filter_map(|turn| bevel_wedge(turn[0], turn[1], half_width))
            .map(|wedge| MultiPolygon::new(vec![wedge])),
    );

    Ok(union_all(pieces))
}

fn edge_rectangle(from: Coord<f64>, to: Coord<f64>, half_width: f64) -> Polygon<f64> {
    let offset = left_normal(unit(to - from)) * half_width;

    counter_clockwise(vec![from - offset, to - offset, to + offset, from + offset])
}

/// Wedge on the outer side of the turn between two consecutive edges.
fn bevel_wedge(
    incoming: (Coord<f64>, Coord<f64>),
    outgoing: (Coord<f64>, Coord<f64>),
    half_width: f64,
) -> Option<Polygon<f64>> {
    let d_in = unit(incoming.1 - incoming.0);
    let d_out = unit(outgoing.1 - outgoing.0);
    let turn = cross(d_in, d_out);

    if turn.abs() < COLLINEAR_TOLERANCE {
        return None;
    }

    // Left turns open a gap on the right-hand side and vice versa.
    let side = if turn > 0.0 { -half_width } else { half_width };
    let pivot = incoming.1;

    Some(counter_clockwise(vec![
        pivot,
        pivot + left_normal(d_in) * side,
        pivot + left_normal(d_out) * side,
    ]))
}

fn counter_clockwise(mut ring: Vec<Coord<f64>>) -> Polygon<f64> {
    if signed_double_area(&ring) < 0.0 {
        ring.reverse();
    }
    Polygon::new(LineString::from(ring), Vec::new())
}

fn signed_double_area(ring: &[Coord<f64>]) -> f64 {
    ring.iter()
        .zip(ring.iter().cycle().skip(1))
        .map(|(a, b)| cross(*a, *b))
        .sum()
}

fn length(v: Coord<f64>) -> f64 {
    v.x.hypot(v.y)
}

fn unit(v: Coord<f64>) -> Coord<f64> {
    v / length(v)
}

fn left_normal(v: Coord<f64>) -> Coord<f64> {
    Coord { x: -v.y, y: v.x }
}

fn cross(a: Coord<f64>, b: Coord<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}
