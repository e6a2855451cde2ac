//! Loading indicators for recommendation fetches

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use millet_application::FetchProgress;
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shown while a request is outstanding
pub struct LoadingSpinner {
    bar: Mutex<Option<ProgressBar>>,
}

impl LoadingSpinner {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn message(concerns: usize) -> String {
        format!(
            "Analyzing {} health concern{} and matching millets...",
            concerns,
            if concerns == 1 { "" } else { "s" }
        )
    }
}

impl Default for LoadingSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchProgress for LoadingSpinner {
    fn on_loading_start(&self, concerns: usize) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(Self::message(concerns));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_loading_end(&self) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress for output that is not a terminal
pub struct SimpleProgress;

impl SimpleProgress {
    fn line(concerns: usize) -> String {
        format!("{} {}", "->".cyan(), LoadingSpinner::message(concerns).bold())
    }
}

impl FetchProgress for SimpleProgress {
    fn on_loading_start(&self, concerns: usize) {
        eprintln!("{}", Self::line(concerns));
    }

    fn on_loading_end(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_pluralizes() {
        assert_eq!(
            LoadingSpinner::message(1),
            "Analyzing 1 health concern and matching millets..."
        );
        assert!(LoadingSpinner::message(3).contains("3 health concerns"));
    }

    #[test]
    fn test_spinner_start_end_pairs() {
        let spinner = LoadingSpinner::new();
        spinner.on_loading_start(2);
        assert!(spinner.bar.lock().unwrap().is_some());
        spinner.on_loading_end();
        assert!(spinner.bar.lock().unwrap().is_none());
        // A second end is harmless
        spinner.on_loading_end();
    }

    #[test]
    fn test_simple_progress_line() {
        colored::control::set_override(false);
        assert_eq!(
            SimpleProgress::line(2),
            "-> Analyzing 2 health concerns and matching millets..."
        );
    }
}
