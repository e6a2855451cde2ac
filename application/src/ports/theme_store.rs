//! Theme persistence port

use millet_domain::ThemePreference;

/// Key-value store for the theme preference
///
/// Read once at startup, written on every toggle. Storage problems are the
/// adapter's to log; `load` falls back to the default theme.
pub trait ThemeStore: Send + Sync {
    fn load(&self) -> ThemePreference;

    fn save(&self, theme: ThemePreference);
}

/// In-memory store, for tests and `--no-config` runs
#[derive(Default)]
pub struct MemoryThemeStore {
    theme: std::sync::Mutex<ThemePreference>,
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> ThemePreference {
        self.theme.lock().map(|t| *t).unwrap_or_default()
    }

    fn save(&self, theme: ThemePreference) {
        if let Ok(mut current) = self.theme.lock() {
            *current = theme;
        }
    }
}
