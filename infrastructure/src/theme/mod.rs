//! File-backed theme preference
//!
//! The preference is one key (`theme`) in a small JSON state file next to
//! the global config.

use millet_application::ThemeStore;
use millet_domain::ThemePreference;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const STATE_FILE: &str = "state.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct StateFile {
    #[serde(default)]
    theme: Option<ThemePreference>,
}

/// Theme store persisted as `state.json`
pub struct JsonThemeStore {
    path: PathBuf,
}

impl JsonThemeStore {
    /// Store inside `dir` (usually `<config dir>/millet-advisor`)
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::with_path(dir.as_ref().join(STATE_FILE))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_state(&self) -> StateFile {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return StateFile::default();
        };
        serde_json::from_str(&content).unwrap_or_else(|e| {
            warn!("Ignoring unreadable state file {}: {}", self.path.display(), e);
            StateFile::default()
        })
    }
}

impl ThemeStore for JsonThemeStore {
    fn load(&self) -> ThemePreference {
        let theme = self.read_state().theme.unwrap_or_default();
        debug!("Loaded theme preference: {}", theme);
        theme
    }

    fn save(&self, theme: ThemePreference) {
        let mut state = self.read_state();
        state.theme = Some(theme);

        if let Some(parent) = self.path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!("Could not create state directory {}: {}", parent.display(), e);
            return;
        }

        let result = serde_json::to_string_pretty(&state)
            .map_err(std::io::Error::other)
            .and_then(|json| std::fs::write(&self.path, json));
        if let Err(e) = result {
            warn!("Could not save theme to {}: {}", self.path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_defaults_to_dark() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonThemeStore::in_dir(dir.path());
        assert_eq!(store.load(), ThemePreference::Dark);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonThemeStore::in_dir(dir.path().join("millet-advisor"));

        store.save(ThemePreference::Light);
        assert_eq!(store.load(), ThemePreference::Light);

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains(r#""theme": "light""#));
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = JsonThemeStore::with_path(&path);
        assert_eq!(store.load(), ThemePreference::Dark);
        store.save(ThemePreference::Light);
        assert_eq!(store.load(), ThemePreference::Light);
    }
}
