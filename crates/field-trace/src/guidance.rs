use field_trace_core::GuidingState;

use tracing::info;

/// Guidance collaborator for headless runs.
///
/// There is no guidance display to clear, so a reset is only recorded.
#[derive(Debug, Default)]
pub struct LoggedGuidance {
    resets: usize,
}

impl LoggedGuidance {
    /// Number of resets requested so far.
    pub fn resets(&self) -> usize {
        self.resets
    }
}

impl GuidingState for LoggedGuidance {
    fn reset(&mut self) {
        self.resets += 1;
        info!(resets = self.resets, "Guidance state reset");
    }
}
