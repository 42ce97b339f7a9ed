use serde::{Deserialize, Serialize};

/// How recorded positions are interpreted before buffering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateSystem {
    /// WGS84 longitude/latitude in decimal degrees.
    #[default]
    Geographic,
    /// Planar coordinates already expressed in meters.
    Planar,
}
