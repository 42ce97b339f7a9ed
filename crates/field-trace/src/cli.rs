use std::path::PathBuf;

use clap::Parser;

/// Replays a field recording script and reports the covered area.
///
/// Script lines: `start [WIDTH]`, `pos X Y`, `pause`, `resume`, `cancel`,
/// `stop`, `quit`. Blank lines and `#` comments are ignored.
#[derive(Debug, Parser)]
#[command(name = "field-trace", version)]
pub struct Cli {
    /// Script to replay. Reads standard input when omitted.
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Implement width in meters used by `start` lines without a width.
    #[arg(short, long)]
    pub width: Option<f64>,

    /// Treat positions as planar meters instead of longitude/latitude.
    #[arg(long)]
    pub planar: bool,

    /// Directory finished recordings are written to.
    #[arg(long)]
    pub history_dir: Option<PathBuf>,
}
