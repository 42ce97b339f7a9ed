//! Recording script reader.
//!
//! Turns a line-oriented script into [`AppCommand`]s and forwards them to the
//! application over an async channel, one line at a time and in order.

use crate::{AppCommand, AppError, AppResult};

use std::panic::Location;

use error_location::ErrorLocation;
use field_trace_core::{Position, RecordingEvent};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::{mpsc, watch},
};
use tracing::{debug, info, instrument, warn};

/// Reads script lines and forwards them as commands.
pub struct ScriptReader {
    command_tx: mpsc::Sender<AppCommand>,
}

impl ScriptReader {
    /// Create a reader that sends on `command_tx`.
    pub fn new(command_tx: mpsc::Sender<AppCommand>) -> Self {
        Self { command_tx }
    }

    /// Forward every command in `input`, then a final [`AppCommand::Shutdown`].
    ///
    /// Unparseable lines are logged and skipped. Stops early on a `quit` line
    /// or when a shutdown signal is received. Returns the number of lines read.
    ///
    /// Consumes the reader so the command sender is dropped on every return
    /// path, including read errors; the application then sees a closed channel.
    #[instrument(skip(self, input, shutdown_rx))]
    pub async fn run<R>(self, input: R, mut shutdown_rx: watch::Receiver<bool>) -> AppResult<usize>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        let mut line_number = 0;

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    info!(line = line_number, "Script reader shutting down");
                    return Ok(line_number);
                }
                next = lines.next_line() => {
                    let Some(text) = next? else {
                        debug!(lines = line_number, "End of script");
                        break;
                    };
                    line_number += 1;

                    match parse_line(line_number, &text) {
                        Ok(Some(AppCommand::Shutdown)) => {
                            info!(line = line_number, "Quit requested by script");
                            break;
                        }
                        Ok(Some(command)) => self.send(command).await?,
                        Ok(None) => {}
                        Err(e) => warn!(error = %e, "Skipping script line"),
                    }
                }
            }
        }

        self.send(AppCommand::Shutdown).await?;

        Ok(line_number)
    }

    async fn send(&self, command: AppCommand) -> AppResult<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("Failed to send {:?}", e.0),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

/// Parse one script line.
///
/// Returns `Ok(None)` for blank lines and comments.
#[track_caller]
pub(crate) fn parse_line(line: usize, text: &str) -> AppResult<Option<AppCommand>> {
    let content = text.split('#').next().unwrap_or_default().trim();
    let mut words = content.split_whitespace();

    let Some(keyword) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let command = match (keyword.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("start", []) => AppCommand::Start {
            line,
            implement_width: None,
        },
        ("start", [width]) => AppCommand::Start {
            line,
            implement_width: Some(parse_number(line, "width", width)?),
        },
        ("pos", [x, y]) => AppCommand::Event {
            line,
            event: RecordingEvent::Sample(Position::new(
                parse_number(line, "x", x)?,
                parse_number(line, "y", y)?,
            )),
        },
        ("pause", []) => AppCommand::Event {
            line,
            event: RecordingEvent::Pause,
        },
        ("resume", []) => AppCommand::Event {
            line,
            event: RecordingEvent::Resume,
        },
        ("cancel", []) => AppCommand::Event {
            line,
            event: RecordingEvent::Cancel,
        },
        ("stop", []) => AppCommand::Event {
            line,
            event: RecordingEvent::Stop,
        },
        ("quit", []) => AppCommand::Shutdown,
        _ => {
            return Err(AppError::ScriptParse {
                line,
                reason: format!("unrecognised command '{}'", content),
                location: ErrorLocation::from(Location::caller()),
            });
        }
    };

    Ok(Some(command))
}

#[track_caller]
fn parse_number(line: usize, name: &str, word: &str) -> AppResult<f64> {
    let value: f64 = word.parse().map_err(|e| AppError::ScriptParse {
        line,
        reason: format!("invalid {} '{}': {}", name, word, e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    if !value.is_finite() {
        return Err(AppError::ScriptParse {
            line,
            reason: format!("{} must be a finite number, got '{}'", name, word),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(value)
}
