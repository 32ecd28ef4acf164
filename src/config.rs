//! Settings for catalog lookups and the catalog lint.
/// Config file loader
mod loader;
/// Configuration types and settings
mod types;

pub use loader::{
    CONFIG_FILE_NAME,
    load,
};
pub(crate) use types::check_key_separator;
pub use types::{
    ConfigError,
    LintConfig,
    LocalizationSettings,
    Severity,
    ValidationError,
};
