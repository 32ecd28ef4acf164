use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::locale::LocaleCode;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "lint.referenceLocale")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalizationSettings {
    /// Separator between keys in a message path (e.g. `notification.fine.new.title`).
    pub key_separator: String,

    pub lint: LintConfig,
}

/// Catalog consistency checks run by the lint tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LintConfig {
    /// Locale other locales' placeholders are compared against.
    pub reference_locale: LocaleCode,

    /// Also require the same leaf kind (plain vs plural) at every path.
    pub strict_leaf_kinds: bool,

    pub placeholder_consistency: bool,
    pub placeholder_severity: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl LocalizationSettings {
    /// # Errors
    /// - Empty key separator
    /// - Key separator containing placeholder braces
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let errors: Vec<_> = check_key_separator(&self.key_separator).into_iter().collect();

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Checks a key separator on its own, for registries built without settings.
pub(crate) fn check_key_separator(separator: &str) -> Option<ValidationError> {
    if separator.is_empty() {
        Some(ValidationError::new(
            "keySeparator",
            "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
        ))
    } else if separator.contains(['{', '}']) {
        Some(ValidationError::new(
            "keySeparator",
            format!("The separator '{separator}' cannot contain '{{' or '}}', they delimit placeholders"),
        ))
    } else {
        None
    }
}

impl Default for LocalizationSettings {
    fn default() -> Self {
        Self { key_separator: ".".to_string(), lint: LintConfig::default() }
    }
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            reference_locale: LocaleCode::En,
            strict_leaf_kinds: false,
            placeholder_consistency: true,
            placeholder_severity: Severity::Warning,
        }
    }
}
