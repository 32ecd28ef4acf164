//! The closed set of locales the catalogs are authored for.

use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};

use crate::error::LocalizationError;

/// A registered locale.
///
/// The set is fixed at build time. Adding a locale means adding a variant
/// here and its content under `locales/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    /// English
    En,
    /// German
    De,
}

impl LocaleCode {
    /// Every registered locale, in declaration order.
    pub const ALL: [Self; 2] = [Self::En, Self::De];

    /// Returns the language code (e.g. `"en"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
        }
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocaleCode {
    type Err = LocalizationError;

    /// Codes match exactly; there is no case folding or region stripping.
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.as_str() == code)
            .ok_or_else(|| LocalizationError::UnknownLocale(code.to_string()))
    }
}
