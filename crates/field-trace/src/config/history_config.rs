use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where finished recordings are stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Directory for history files (None = platform data directory).
    #[serde(default)]
    pub directory: Option<PathBuf>,
}
