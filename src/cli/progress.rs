use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::pipeline::phase::PHASES;
use crate::pipeline::PipelineEvent;
use crate::utils::formatting::format_duration;

/// Single spinner driven by pipeline events.
pub struct RunProgress {
    bar: ProgressBar,
    completed: usize,
    start_time: std::time::Instant,
}

impl RunProgress {
    pub fn new(hidden: bool) -> Self {
        let bar = if hidden {
            ProgressBar::hidden()
        } else {
            ProgressBar::new_spinner()
        };
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("  {spinner:.cyan} [{prefix}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_prefix(format!("0/{}", PHASES.len()));
        bar.set_message("Reading image...");
        bar.enable_steady_tick(std::time::Duration::from_millis(120));

        Self {
            bar,
            completed: 0,
            start_time: std::time::Instant::now(),
        }
    }

    pub fn handle_event(&mut self, event: &PipelineEvent) {
        match event {
            PipelineEvent::PhaseStarted { display_name, .. } => {
                self.bar.set_message(format!("{}...", display_name));
            }
            PipelineEvent::PhaseCompleted { phase, duration_ms } => {
                self.completed += 1;
                self.bar.set_prefix(format!("{}/{}", self.completed, PHASES.len()));
                self.bar.println(format!(
                    "  {} {} ({})",
                    style("✓").green(),
                    style(phase).green(),
                    format_duration(*duration_ms),
                ));
            }
        }
    }

    pub fn finish(&self) {
        self.bar.finish_with_message(format!(
            "{} Done in {}",
            style("▶").green().bold(),
            format_duration(self.start_time.elapsed().as_millis() as u64),
        ));
    }

    pub fn fail(&self, error: &str) {
        self.bar.abandon_with_message(format!("{} {}", style("✗").red(), style(error).red()));
    }
}
