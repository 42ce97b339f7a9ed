//! File-backed history of finished recordings.
//!
//! Each recording becomes one TOML document in the history directory, written
//! with the same temp-file-and-rename pattern as the configuration.

use crate::{AppError, AppResult};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use field_trace_core::{FinishedRecording, HistoryStore};
use tracing::{error, info, instrument};
use uuid::Uuid;

/// Writes finished recordings as TOML files.
#[derive(Debug)]
pub struct TomlHistoryStore {
    directory: PathBuf,
    saved: Vec<PathBuf>,
}

impl TomlHistoryStore {
    /// Opens (creating if needed) the history directory.
    #[track_caller]
    #[instrument]
    pub fn new(directory: PathBuf) -> AppResult<Self> {
        fs::create_dir_all(&directory).map_err(|e| AppError::HistoryError {
            reason: format!("Failed to create history directory {:?}: {}", directory, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(history_dir = ?directory, "History store ready");

        Ok(Self {
            directory,
            saved: Vec::new(),
        })
    }

    /// Directory records are written to.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Files written during this run, oldest first.
    pub fn saved(&self) -> &[PathBuf] {
        &self.saved
    }

    #[track_caller]
    fn write_record(&self, record: &FinishedRecording) -> AppResult<PathBuf> {
        let contents = toml::to_string(record).map_err(|e| AppError::HistoryError {
            reason: format!("Failed to serialize recording: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let file_name = format!(
            "recording-{}-{}.toml",
            record.date_start.format("%Y%m%dT%H%M%SZ"),
            Uuid::new_v4()
        );
        let path = self.directory.join(file_name);
        write_atomically(&path, contents.as_bytes())?;

        Ok(path)
    }
}

/// Write `contents` to `path` through a temp file that is renamed into place.
///
/// The temp file is removed again if any step fails.
#[track_caller]
pub(crate) fn write_atomically(path: &Path, contents: &[u8]) -> AppResult<()> {
    let temp_path = path.with_extension("toml.tmp");

    let result = (|| -> AppResult<()> {
        let mut temp_file = fs::File::create(&temp_path)?;
        temp_file.write_all(contents)?;
        temp_file.sync_all()?;
        drop(temp_file);
        fs::rename(&temp_path, path)?;
        Ok(())
    })();

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}

impl HistoryStore for TomlHistoryStore {
    fn save_recording(&mut self, record: &FinishedRecording) {
        match self.write_record(record) {
            Ok(path) => {
                info!(path = ?path, area_ha = record.area, "Recording saved to history");
                self.saved.push(path);
            }
            Err(e) => error!(error = ?e, "Failed to save recording to history"),
        }
    }
}
