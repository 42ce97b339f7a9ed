use crate::config::default_implement_width;

use field_trace_core::CoordinateSystem;
use serde::{Deserialize, Serialize};

/// Recording session defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordingConfig {
    /// Implement width in meters used when a start does not name one.
    #[serde(default = "default_implement_width")]
    pub default_implement_width: f64,

    /// How positions are interpreted.
    #[serde(default)]
    pub coordinate_system: CoordinateSystem,
}

impl Default for RecordingConfig {
    fn default() -> Self {
        Self {
            default_implement_width: default_implement_width(),
            coordinate_system: CoordinateSystem::default(),
        }
    }
}
