//! Reads `.l10n.json`.

use std::path::Path;

use super::{
    ConfigError,
    LocalizationSettings,
};

/// Name of the settings file looked up in a directory.
pub const CONFIG_FILE_NAME: &str = ".l10n.json";

/// Loads and validates the settings of `dir`.
///
/// A directory without a settings file yields the defaults. Fields the
/// file omits keep their default values.
///
/// # Errors
/// - `IoError` if the file exists but cannot be read
/// - `ParseError` if it is not valid settings JSON
/// - `ValidationErrors` if the parsed settings are invalid
pub fn load(dir: &Path) -> Result<LocalizationSettings, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);

    let settings = if path.is_file() {
        tracing::debug!(path = %path.display(), "Reading settings");
        serde_json::from_str(&std::fs::read_to_string(&path)?)?
    } else {
        tracing::debug!(dir = %dir.display(), "No settings file, using defaults");
        LocalizationSettings::default()
    };

    settings.validate().map_err(ConfigError::ValidationErrors)?;
    tracing::debug!(?settings, "Settings loaded");
    Ok(settings)
}
