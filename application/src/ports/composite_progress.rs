//! Composite progress notifier — delegates to multiple notifiers.
//!
//! Used to fan out run events to the console display and the log at once.

use super::progress::ProgressNotifier;
use toolscout_domain::Stage;

/// A progress notifier that delegates to multiple inner notifiers.
///
/// Uses borrowed references with a lifetime parameter so both owned and
/// borrowed notifiers can be composed without wrapper types.
pub struct CompositeProgressNotifier<'a> {
    delegates: Vec<&'a dyn ProgressNotifier>,
}

impl<'a> CompositeProgressNotifier<'a> {
    pub fn new(delegates: Vec<&'a dyn ProgressNotifier>) -> Self {
        Self { delegates }
    }
}

/// Macro to delegate a method call to all inner notifiers.
macro_rules! delegate {
    ($self:ident, $method:ident $(, $arg:expr)*) => {
        for d in &$self.delegates {
            d.$method($($arg),*);
        }
    };
}

impl ProgressNotifier for CompositeProgressNotifier<'_> {
    fn on_stage_start(&self, stage: Stage) {
        delegate!(self, on_stage_start, stage);
    }

    fn on_stage_end(&self, stage: Stage) {
        delegate!(self, on_stage_end, stage);
    }

    fn on_step(&self, message: &str) {
        delegate!(self, on_step, message);
    }

    fn on_warning(&self, message: &str) {
        delegate!(self, on_warning, message);
    }

    fn on_tool_start(&self, name: &str, index: usize, total: usize) {
        delegate!(self, on_tool_start, name, index, total);
    }

    fn on_tool_complete(&self, name: &str, success: bool) {
        delegate!(self, on_tool_complete, name, success);
    }
}
