//! Progress reporting for research runs

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use toolscout_application::ProgressNotifier;
use toolscout_domain::Stage;

/// Reports progress with one spinner per stage
pub struct ProgressReporter {
    stage_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            stage_bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn stage_number(stage: Stage) -> usize {
        match stage {
            Stage::Extract => 1,
            Stage::Research => 2,
            Stage::Analyze | Stage::Done => 3,
        }
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.stage_bar.lock() {
            if let Some(pb) = guard.as_ref() {
                f(pb);
            }
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_stage_start(&self, stage: Stage) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(format!("[{}/3] {}", Self::stage_number(stage), stage.display_name()));
        pb.set_message("...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut guard) = self.stage_bar.lock() {
            *guard = Some(pb);
        }
    }

    fn on_stage_end(&self, _stage: Stage) {
        if let Ok(mut guard) = self.stage_bar.lock() {
            if let Some(pb) = guard.take() {
                pb.finish_with_message(format!("{}", "done".green()));
            }
        }
    }

    fn on_step(&self, message: &str) {
        self.with_bar(|pb| pb.set_message(message.to_string()));
    }

    fn on_warning(&self, message: &str) {
        self.with_bar(|pb| pb.println(format!("  {} {}", "!".yellow(), message)));
    }

    fn on_tool_start(&self, name: &str, index: usize, total: usize) {
        self.with_bar(|pb| pb.set_message(format!("({}/{}) {}", index + 1, total, name)));
    }

    fn on_tool_complete(&self, name: &str, success: bool) {
        let mark = if success { "v".green() } else { "x".red() };
        self.with_bar(|pb| pb.println(format!("  {} {}", mark, name)));
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_stage_start(&self, stage: Stage) {
        eprintln!("{} {}", "->".cyan(), stage.display_name().bold());
    }

    fn on_stage_end(&self, _stage: Stage) {}

    fn on_warning(&self, message: &str) {
        eprintln!("  {} {}", "!".yellow(), message);
    }

    fn on_tool_complete(&self, name: &str, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), name);
        } else {
            eprintln!("  {} {} (skipped)", "x".red(), name);
        }
    }
}
