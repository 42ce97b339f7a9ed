mod history_config;
#[allow(clippy::module_inception)]
mod config;
mod recording_config;

pub(crate) use {
    config::Config, history_config::HistoryConfig, recording_config::RecordingConfig,
};

pub(crate) const DEFAULT_IMPLEMENT_WIDTH_M: f64 = 3.0;

pub(crate) fn default_implement_width() -> f64 {
    DEFAULT_IMPLEMENT_WIDTH_M
}
