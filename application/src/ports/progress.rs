//! Progress notification port
//!
//! Side-channel observer for a research run. The pipeline never depends on
//! when or whether these callbacks do anything.

use toolscout_domain::Stage;
use tracing::{debug, info, warn};

/// Callback for progress updates during a research run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, log lines).
pub trait ProgressNotifier: Send + Sync {
    /// Called when a stage starts
    fn on_stage_start(&self, stage: Stage);

    /// Called when a stage completes
    fn on_stage_end(&self, stage: Stage);

    /// Informational step inside a stage
    fn on_step(&self, _message: &str) {}

    /// A failure was absorbed and a default used
    fn on_warning(&self, _message: &str) {}

    /// Research of one tool starts (`index` is zero-based)
    fn on_tool_start(&self, _name: &str, _index: usize, _total: usize) {}

    /// Research of one tool ends
    fn on_tool_complete(&self, _name: &str, _success: bool) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: Stage) {}
    fn on_stage_end(&self, _stage: Stage) {}
}

/// Routes progress events into the log.
///
/// Composed next to a console notifier when a log file is requested, so the
/// file records the run as it happens.
pub struct TracingProgress;

impl ProgressNotifier for TracingProgress {
    fn on_stage_start(&self, stage: Stage) {
        info!(stage = stage.as_str(), "Stage started");
    }

    fn on_stage_end(&self, stage: Stage) {
        info!(stage = stage.as_str(), "Stage finished");
    }

    fn on_step(&self, message: &str) {
        debug!("{}", message);
    }

    fn on_warning(&self, message: &str) {
        warn!("{}", message);
    }

    fn on_tool_start(&self, name: &str, index: usize, total: usize) {
        debug!("Researching {} ({}/{})", name, index + 1, total);
    }

    fn on_tool_complete(&self, name: &str, success: bool) {
        info!(tool = name, success, "Tool research finished");
    }
}
