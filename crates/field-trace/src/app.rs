use crate::{AppCommand, LoggedGuidance, TomlHistoryStore};

use field_trace_core::{RecordingController, RecordingStatus};
use tokio::sync::{mpsc, watch};
use tracing::{error, info, instrument, warn};

/// Controller type driven by the application.
pub(crate) type Controller = RecordingController<TomlHistoryStore, LoggedGuidance>;

/// Main application state.
///
/// Sole owner of the recording controller: commands are applied one at a
/// time in the order they arrive on `command_rx`.
pub struct App {
    pub(crate) controller: Controller,
    pub(crate) default_implement_width: f64,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
    pub(crate) shutdown_tx: watch::Sender<bool>,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Commands applied successfully.
    pub applied: usize,
    /// Commands the controller rejected.
    pub rejected: usize,
    /// Recordings written to the history store.
    pub saved: usize,
}

impl App {
    /// Run the main application event loop.
    #[instrument(skip(self))]
    pub(crate) async fn run(&mut self) -> RunSummary {
        info!("Field-Trace starting");

        let mut summary = RunSummary::default();

        loop {
            let Some(command) = self.command_rx.recv().await else {
                info!("Command channel closed, shutting down");
                break;
            };

            let (line, result) = match command {
                AppCommand::Start {
                    line,
                    implement_width,
                } => {
                    let width = implement_width.unwrap_or(self.default_implement_width);
                    (line, self.controller.start(width))
                }
                AppCommand::Event { line, event } => (line, self.controller.apply(event)),
                AppCommand::Shutdown => {
                    info!("Shutdown requested");
                    break;
                }
            };

            match result {
                Ok(()) => summary.applied += 1,
                Err(e) => {
                    summary.rejected += 1;
                    error!(line = line, error = %e, "Command rejected");
                }
            }
        }

        if self.controller.status() != RecordingStatus::Idle {
            warn!(
                status = ?self.controller.status(),
                area_ha = self.controller.area(),
                "Session still open at shutdown, discarding"
            );
        }

        let _ = self.shutdown_tx.send(true);

        summary.saved = self.controller.history().saved().len();

        info!(
            applied = summary.applied,
            rejected = summary.rejected,
            saved = summary.saved,
            guidance_resets = self.controller.guiding().resets(),
            history_dir = ?self.controller.history().directory(),
            "Field-Trace shut down successfully"
        );

        summary
    }
}
