//! # State Module
//!
//! Application state for the calculator front end.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐      ┌──────────────────────────────┐     │
//! │  │      ConfigState         │      │     PreferencesState         │     │
//! │  │                          │      │                              │     │
//! │  │  currency format         │      │  Arc<Mutex<theme, source>>   │     │
//! │  │  default parameters      │      │  PreferencesStore            │     │
//! │  │  validation / export     │      │  (preferences.toml)          │     │
//! │  └──────────────────────────┘      └──────────────────────────────┘     │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • ConfigState: Read-only after initialization                         │
//! │  • PreferencesState: Protected by Arc<Mutex<T>>                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The quote itself is not state: it is recomputed from the current
//! parameter snapshot on every request.

mod config;
mod preferences;

pub use config::{
    ConfigError, ConfigResult, ConfigState, ExportSettings, ValidationSettings, CONFIG_FILE_NAME,
};
pub use preferences::{
    detect_host_theme, Preferences, PreferencesState, PreferencesStore, PrefsError, PrefsResult,
    Theme, ThemeSource, PREFERENCES_FILE_NAME,
};
