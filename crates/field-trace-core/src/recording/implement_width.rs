use crate::{CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Working width of the implement in meters. Always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ImplementWidth(f64);

impl ImplementWidth {
    /// Validates a width in meters.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidConfiguration`] if `meters` is not a
    /// positive finite number.
    #[track_caller]
    pub fn new(meters: f64) -> CoreResult<Self> {
        if !meters.is_finite() || meters <= 0.0 {
            return Err(CoreError::InvalidConfiguration {
                reason: format!("implement width must be positive and finite, got {}", meters),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(Self(meters))
    }

    /// Width in meters.
    pub fn meters(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for ImplementWidth {
    type Error = CoreError;

    #[track_caller]
    fn try_from(meters: f64) -> CoreResult<Self> {
        Self::new(meters)
    }
}

impl From<ImplementWidth> for f64 {
    fn from(width: ImplementWidth) -> Self {
        width.0
    }
}
