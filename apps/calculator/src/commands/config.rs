//! # Config Commands
//!
//! Retrieving the effective calculator configuration.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current configuration after file and environment overrides.
///
/// ## When Used
/// - `--show-config`
/// - Front ends pre-filling the input form from `defaults`
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}
