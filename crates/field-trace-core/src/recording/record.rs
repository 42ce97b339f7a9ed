use crate::{ImplementWidth, Segment};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A completed session as handed to the history store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinishedRecording {
    /// When the session was started.
    pub date_start: DateTime<Utc>,
    /// When the session was stopped.
    pub date_end: DateTime<Utc>,
    /// Covered area in hectares at the time of the stop.
    pub area: f64,
    /// All segments of the session, including a trailing empty one after a pause.
    pub trace: Vec<Segment>,
    /// Implement width the session was recorded with.
    pub equipment_width: ImplementWidth,
}
