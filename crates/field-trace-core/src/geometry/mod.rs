mod coordinate_system;
mod corridor;
mod position;
mod projection;

pub(crate) use {corridor::build_corridor, projection::Projection};

pub use {coordinate_system::CoordinateSystem, position::Position};

use geo::{BooleanOps, MultiPolygon};

/// Unions a set of regions pairwise until a single region remains.
///
/// Pairwise reduction keeps every boolean operation between inputs of similar
/// size instead of growing one accumulator polygon vertex by vertex.
pub(crate) fn union_all(mut regions: Vec<MultiPolygon<f64>>) -> MultiPolygon<f64> {
    while regions.len() > 1 {
        let mut merged = Vec::with_capacity(regions.len().div_ceil(2));
        let mut pending = regions.into_iter();

        while let Some(left) = pending.next() {
            match pending.next() {
                Some(right) => merged.push(left.union(&right)),
                None => merged.push(left),
            }
        }

        regions = merged;
    }

    regions.pop().unwrap_or_else(|| MultiPolygon::new(Vec::new()))
}
