//! # Preference State
//!
//! The one piece of persisted state: the dark/light theme choice.
//!
//! ## Theme Resolution
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Theme Resolution at Startup                          │
//! │                                                                         │
//! │  preferences.toml present? ──yes──► stored dark_mode (ThemeSource::Stored)
//! │          │                                                              │
//! │          no (or unreadable: warn! and continue)                         │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  Host signal (COLORFGBG) ─────────► Dark / Light (ThemeSource::Host)    │
//! │          │                                                              │
//! │          unknown                                                        │
//! │          ▼                                                              │
//! │  Light                                                                  │
//! │                                                                         │
//! │  set_theme() / toggle() ──► update in memory ──► write preferences.toml │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! Wrapped in `Arc<Mutex<T>>` so every command shares one handle. Reads
//! take the lock briefly; writes hold it across the file save so the
//! stored file and the in-memory value never disagree.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::project_dirs;

/// File name of the preference file inside the config directory.
pub const PREFERENCES_FILE_NAME: &str = "preferences.toml";

// =============================================================================
// Errors
// =============================================================================

/// Preference persistence errors.
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("Failed to access preferences at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid preferences file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Could not determine config directory")]
    NoConfigDir,
}

pub type PrefsResult<T> = Result<T, PrefsError>;

// =============================================================================
// Theme
// =============================================================================

/// Presentation theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// Where the current theme came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSource {
    /// Read from the preference file, or set during this run.
    Stored,
    /// Derived from the host environment.
    Host,
}

/// Reads the host's dark/light hint from a `COLORFGBG` style variable.
///
/// The value is `fg;bg` (sometimes `fg;default;bg`). Background colors
/// 0-6 and 8 are the dark half of the 16-color palette.
pub fn detect_host_theme<F>(lookup: F) -> Theme
where
    F: Fn(&str) -> Option<String>,
{
    let background = lookup("COLORFGBG")
        .and_then(|value| value.rsplit(';').next().map(|s| s.trim().to_string()))
        .and_then(|bg| bg.parse::<u8>().ok());

    match background {
        Some(0..=6) | Some(8) => Theme::Dark,
        _ => Theme::Light,
    }
}

// =============================================================================
// Preference File
// =============================================================================

/// Contents of `preferences.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub dark_mode: bool,
    pub updated_at: DateTime<Utc>,
}

impl Preferences {
    pub fn new(theme: Theme) -> Self {
        Preferences {
            dark_mode: theme.is_dark(),
            updated_at: Utc::now(),
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.dark_mode)
    }
}

/// Reads and writes the preference file.
#[derive(Debug, Clone)]
pub struct PreferencesStore {
    path: PathBuf,
}

impl PreferencesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        PreferencesStore { path: path.into() }
    }

    /// Store at the explicit path, else the platform config directory.
    pub fn resolve(path: Option<PathBuf>) -> PrefsResult<Self> {
        match path {
            Some(path) => Ok(Self::new(path)),
            None => project_dirs()
                .map(|dirs| Self::new(dirs.config_dir().join(PREFERENCES_FILE_NAME)))
                .ok_or(PrefsError::NoConfigDir),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored preferences. `None` when nothing was saved yet.
    pub fn load(&self) -> PrefsResult<Option<Preferences>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.path).map_err(|source| PrefsError::Io {
            path: self.path.clone(),
            source,
        })?;

        toml::from_str(&contents)
            .map(Some)
            .map_err(|source| PrefsError::Parse {
                path: self.path.clone(),
                source,
            })
    }

    /// Writes the preferences, creating the parent directory if needed.
    pub fn save(&self, prefs: &Preferences) -> PrefsResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| PrefsError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let contents = toml::to_string_pretty(prefs)?;
        std::fs::write(&self.path, contents).map_err(|source| PrefsError::Io {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = ?self.path, dark_mode = prefs.dark_mode, "Preferences saved");
        Ok(())
    }
}

// =============================================================================
// Preference State
// =============================================================================

#[derive(Debug)]
struct Inner {
    theme: Theme,
    source: ThemeSource,
}

/// Shared theme state backed by a [`PreferencesStore`].
#[derive(Debug, Clone)]
pub struct PreferencesState {
    store: PreferencesStore,
    inner: Arc<Mutex<Inner>>,
}

impl PreferencesState {
    /// Resolves the startup theme.
    ///
    /// A missing or unreadable file is not an error: the host theme is
    /// used and the file is left untouched until the user changes theme.
    pub fn initialize(store: PreferencesStore, host: Theme) -> Self {
        let (theme, source) = match store.load() {
            Ok(Some(prefs)) => {
                debug!(path = ?store.path(), dark_mode = prefs.dark_mode, "Loaded stored theme");
                (prefs.theme(), ThemeSource::Stored)
            }
            Ok(None) => (host, ThemeSource::Host),
            Err(e) => {
                warn!(error = %e, "Failed to load preferences, using host theme");
                (host, ThemeSource::Host)
            }
        };

        PreferencesState {
            store,
            inner: Arc::new(Mutex::new(Inner { theme, source })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn theme(&self) -> Theme {
        self.lock().theme
    }

    pub fn source(&self) -> ThemeSource {
        self.lock().source
    }

    /// Sets and persists the theme.
    ///
    /// The in-memory theme only changes once the file was written.
    pub fn set_theme(&self, theme: Theme) -> PrefsResult<Theme> {
        let mut inner = self.lock();
        self.store.save(&Preferences::new(theme))?;

        inner.theme = theme;
        inner.source = ThemeSource::Stored;
        info!(%theme, "Theme preference updated");
        Ok(theme)
    }

    /// Flips between dark and light and persists the result.
    pub fn toggle(&self) -> PrefsResult<Theme> {
        let next = self.theme().toggled();
        self.set_theme(next)
    }
}
