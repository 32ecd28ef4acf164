//! fines-l10n
//!
//! Localization and pluralization engine for the team fines backend.
//! Compiled-in catalogs per locale, a placeholder template renderer, a
//! count-to-plural-form table and per-locale views navigable by key path.

pub mod catalog;
pub mod config;
pub mod error;
pub mod locale;
mod locales;
pub mod plural;
pub mod registry;
pub mod template;
mod test_utils;
pub mod view;

pub use error::LocalizationError;
pub use locale::LocaleCode;
pub use plural::Pluralization;
pub use registry::CatalogRegistry;
pub use view::LocalizedView;
