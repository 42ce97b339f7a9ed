use crate::{CoordinateSystem, Position, Segment};

use geo::{Coord, coord};

/// Mean Earth radius in meters (IUGG).
pub(crate) const EARTH_MEAN_RADIUS_M: f64 = 6_371_008.8;

/// Maps recorded positions into a planar frame measured in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Projection {
    /// Positions are already planar meters.
    Identity,
    /// Local equirectangular projection around an origin position.
    Equirectangular {
        origin_lon: f64,
        origin_lat: f64,
        cos_origin_lat: f64,
    },
}

impl Projection {
    /// Chooses the projection for a segment set.
    ///
    /// Geographic traces are centered on the first recorded position so every
    /// corridor of the session shares one frame.
    pub(crate) fn for_segments(coordinate_system: CoordinateSystem, segments: &[Segment]) -> Self {
        match coordinate_system {
            CoordinateSystem::Planar => Self::Identity,
            CoordinateSystem::Geographic => segments
                .iter()
                .flat_map(|segment| segment.points())
                .find(|position| position.is_finite())
                .map_or(Self::Identity, |origin| Self::centered_on(*origin)),
        }
    }

    pub(crate) fn centered_on(origin: Position) -> Self {
        Self::Equirectangular {
            origin_lon: origin.x,
            origin_lat: origin.y,
            cos_origin_lat: origin.y.to_radians().cos(),
        }
    }

    pub(crate) fn project(&self, position: Position) -> Coord<f64> {
        match *self {
            Self::Identity => coord! { x: position.x, y: position.y },
            Self::Equirectangular {
                origin_lon,
                origin_lat,
                cos_origin_lat,
            } => coord! {
                x: (position.x - origin_lon).to_radians() * EARTH_MEAN_RADIUS_M * cos_origin_lat,
                y: (position.y - origin_lat).to_radians() * EARTH_MEAN_RADIUS_M,
            },
        }
    }
}
