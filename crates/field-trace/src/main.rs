//! Field-Trace: replays field recording scripts and reports covered area.

mod app;
mod app_command;
mod cli;
mod config;
mod error;
mod guidance;
mod history_store;
mod script_reader;
#[cfg(test)]
mod tests;

pub(crate) use {
    app::{App, RunSummary},
    app_command::AppCommand,
    cli::Cli,
    error::{AppError, Result as AppResult},
    guidance::LoggedGuidance,
    history_store::TomlHistoryStore,
    script_reader::ScriptReader,
};

use crate::config::Config;

use clap::Parser;
use field_trace_core::{CoordinateSystem, ImplementWidth, RecordingController};
use tokio::{
    fs::File,
    io::{self, AsyncBufRead, BufReader},
    sync::{mpsc, watch},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("field_trace=debug,field_trace_core=info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {:?}", e);
            std::process::exit(1);
        }
    };

    match rt.block_on(run(cli, config)) {
        Ok(summary) if summary.rejected == 0 => {}
        Ok(summary) => {
            error!(rejected = summary.rejected, "Some script commands were rejected");
            std::process::exit(2);
        }
        Err(e) => {
            error!(error = ?e, "Field-Trace failed");
            std::process::exit(1);
        }
    }
}

/// Wire the script reader to the application and run both to completion.
async fn run(cli: Cli, config: Config) -> AppResult<RunSummary> {
    let default_implement_width = cli
        .width
        .unwrap_or(config.recording.default_implement_width);
    ImplementWidth::new(default_implement_width)?;

    let coordinate_system = if cli.planar {
        CoordinateSystem::Planar
    } else {
        config.recording.coordinate_system
    };

    let history_dir = match cli.history_dir {
        Some(directory) => directory,
        None => config.history_dir()?,
    };

    let input: Box<dyn AsyncBufRead + Unpin + Send> = match &cli.script {
        Some(path) => Box::new(BufReader::new(File::open(path).await?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    info!(
        script = ?cli.script,
        implement_width = default_implement_width,
        coordinate_system = ?coordinate_system,
        "Replaying recording script"
    );

    let controller = RecordingController::new(
        TomlHistoryStore::new(history_dir)?,
        LoggedGuidance::default(),
        coordinate_system,
    );

    let (command_tx, command_rx) = mpsc::channel(32);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let reader = ScriptReader::new(command_tx);
    let mut app = App {
        controller,
        default_implement_width,
        command_rx,
        shutdown_tx,
    };

    let (read_result, summary) = tokio::join!(reader.run(input, shutdown_rx), app.run());

    if let Err(e) = read_result {
        error!(error = ?e, "Script reader error");
        return Err(e);
    }

    Ok(summary)
}
