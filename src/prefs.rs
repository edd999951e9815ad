//! Local UI preferences.
//!
//! The theme choice is kept in a small YAML file on this machine and never
//! sent to the catalog server:
//! ```text
//! theme: dark
//! ```

use menucat_core::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub theme: Theme,
}

/// Errors that can occur reading or writing the preferences file.
#[derive(Debug)]
pub enum PrefsError {
    /// I/O error reading or writing the file.
    IoError(PathBuf, io::Error),
    /// File exists but is not valid preferences YAML.
    ParseError(PathBuf, serde_yaml::Error),
}

impl std::fmt::Display for PrefsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrefsError::IoError(path, e) => write!(f, "I/O error for {}: {}", path.display(), e),
            PrefsError::ParseError(path, e) => {
                write!(f, "Failed to parse preferences {}: {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for PrefsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PrefsError::IoError(_, e) => Some(e),
            PrefsError::ParseError(_, e) => Some(e),
        }
    }
}

/// Reads and writes the preferences file.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads preferences. A missing file yields the defaults.
    pub fn load(&self) -> Result<Preferences, PrefsError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(Preferences::default()),
            Ok(contents) => serde_yaml::from_str(&contents)
                .map_err(|e| PrefsError::ParseError(self.path.clone(), e)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Preferences::default()),
            Err(e) => Err(PrefsError::IoError(self.path.clone(), e)),
        }
    }

    /// Saves preferences, creating the parent directory if needed.
    pub fn save(&self, prefs: &Preferences) -> Result<(), PrefsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| PrefsError::IoError(parent.to_path_buf(), e))?;
        }

        let contents = serde_yaml::to_string(prefs)
            .map_err(|e| PrefsError::ParseError(self.path.clone(), e))?;

        // Write atomically using temp file + rename
        let temp_path = self.path.with_extension("yaml.tmp");
        fs::write(&temp_path, contents)
            .map_err(|e| PrefsError::IoError(temp_path.clone(), e))?;
        fs::rename(&temp_path, &self.path)
            .map_err(|e| PrefsError::IoError(self.path.clone(), e))?;

        Ok(())
    }

    /// Current theme; unreadable preferences fall back to the default.
    pub fn theme(&self) -> Theme {
        match self.load() {
            Ok(prefs) => prefs.theme,
            Err(e) => {
                tracing::warn!("{}", e);
                Theme::default()
            }
        }
    }

    pub fn set_theme(&self, theme: Theme) -> Result<(), PrefsError> {
        let mut prefs = self.load().unwrap_or_default();
        prefs.theme = theme;
        self.save(&prefs)
    }

    /// Flips the theme and persists it. Returns the new theme.
    pub fn toggle_theme(&self) -> Result<Theme, PrefsError> {
        let theme = self.theme().toggle();
        self.set_theme(theme)?;
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (PreferenceStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = PreferenceStore::new(temp_dir.path().join("nested").join("prefs.yaml"));
        (store, temp_dir)
    }

    #[test]
    fn test_missing_file_is_light() {
        let (store, _temp) = setup();
        assert_eq!(store.load().unwrap(), Preferences::default());
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let (store, _temp) = setup();

        assert_eq!(store.toggle_theme().unwrap(), Theme::Dark);
        assert_eq!(store.theme(), Theme::Dark);

        let contents = fs::read_to_string(store.path()).unwrap();
        assert!(contents.contains("theme: dark"));

        assert_eq!(store.toggle_theme().unwrap(), Theme::Light);
        assert_eq!(PreferenceStore::new(store.path()).theme(), Theme::Light);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_default() {
        let (store, _temp) = setup();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "theme: [").unwrap();

        assert!(matches!(store.load(), Err(PrefsError::ParseError(_, _))));
        assert_eq!(store.theme(), Theme::Light);

        store.set_theme(Theme::Dark).unwrap();
        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn test_unknown_theme_is_parse_error() {
        let (store, _temp) = setup();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "theme: sepia\n").unwrap();
        assert!(store.load().is_err());
    }
}
