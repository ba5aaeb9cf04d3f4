//! # Theme Commands
//!
//! Reading and changing the persisted dark/light preference.

use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{PreferencesState, Theme, ThemeSource};

/// Current theme as seen by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeResponse {
    pub theme: Theme,
    pub dark_mode: bool,
    pub source: ThemeSource,
}

impl From<&PreferencesState> for ThemeResponse {
    fn from(prefs: &PreferencesState) -> Self {
        let theme = prefs.theme();
        ThemeResponse {
            theme,
            dark_mode: theme.is_dark(),
            source: prefs.source(),
        }
    }
}

/// Gets the active theme.
pub fn get_theme(prefs: &PreferencesState) -> ThemeResponse {
    debug!("get_theme command");
    ThemeResponse::from(prefs)
}

/// Sets the theme and writes it to the preference file.
pub fn set_theme(prefs: &PreferencesState, theme: Theme) -> Result<ThemeResponse, ApiError> {
    debug!(%theme, "set_theme command");
    prefs.set_theme(theme)?;
    Ok(ThemeResponse::from(prefs))
}

/// Flips the theme and writes it to the preference file.
pub fn toggle_theme(prefs: &PreferencesState) -> Result<ThemeResponse, ApiError> {
    debug!("toggle_theme command");
    prefs.toggle()?;
    Ok(ThemeResponse::from(prefs))
}
