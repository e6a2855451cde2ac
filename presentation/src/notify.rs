//! User-facing notifications

use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Shows a short message to the user
pub trait Notifier: Send + Sync {
    fn notify(&self, level: NotificationLevel, message: &str);
}

/// Prints notifications to stderr, colored by level
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn format(level: NotificationLevel, message: &str) -> String {
        match level {
            NotificationLevel::Info => format!("{} {}", "i".cyan().bold(), message),
            NotificationLevel::Success => format!("{} {}", "v".green().bold(), message.green()),
            NotificationLevel::Warning => format!("{} {}", "!".yellow().bold(), message.yellow()),
            NotificationLevel::Error => format!("{} {}", "x".red().bold(), message.red()),
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, level: NotificationLevel, message: &str) {
        eprintln!("{}", Self::format(level, message));
    }
}
