//! The process-wide set of locale catalogs.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use thiserror::Error;

use crate::catalog::{
    self,
    CatalogNode,
    DifferenceKind,
    PlaceholderDifference,
};
use crate::config::{
    ConfigError,
    LintConfig,
    LocalizationSettings,
    Severity,
    check_key_separator,
};
use crate::error::LocalizationError;
use crate::locale::LocaleCode;
use crate::locales;
use crate::view::LocalizedView;

/// Registry built with default settings on first use.
static SHARED: LazyLock<CatalogRegistry> = LazyLock::new(|| {
    CatalogRegistry::build(compiled_catalogs(), LocalizationSettings::default().key_separator)
});

/// The compiled-in catalog of every registered locale.
fn compiled_catalogs() -> impl Iterator<Item = (LocaleCode, CatalogNode)> {
    LocaleCode::ALL.into_iter().map(|locale| (locale, locales::catalog(locale)))
}

/// Owns one catalog per registered locale. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRegistry {
    /// Catalog of every [`LocaleCode`].
    catalogs: BTreeMap<LocaleCode, CatalogNode>,
    /// Separator between keys in a path.
    key_separator: String,
}

impl CatalogRegistry {
    /// Builds the compiled-in catalog of every registered locale.
    ///
    /// # Errors
    /// `ValidationErrors` if `settings` are invalid.
    pub fn new(settings: &LocalizationSettings) -> Result<Self, ConfigError> {
        settings.validate().map_err(ConfigError::ValidationErrors)?;
        Ok(Self::build(compiled_catalogs(), settings.key_separator.clone()))
    }

    /// Builds a registry from explicit catalogs.
    ///
    /// # Errors
    /// `ValidationErrors` if `key_separator` is empty or contains braces.
    pub fn from_catalogs<I>(catalogs: I, key_separator: &str) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (LocaleCode, CatalogNode)>,
    {
        if let Some(error) = check_key_separator(key_separator) {
            return Err(ConfigError::ValidationErrors(vec![error]));
        }
        Ok(Self::build(catalogs, key_separator.to_string()))
    }

    /// Builds a registry with an already validated separator.
    fn build<I>(catalogs: I, key_separator: String) -> Self
    where
        I: IntoIterator<Item = (LocaleCode, CatalogNode)>,
    {
        let catalogs: BTreeMap<_, _> = catalogs.into_iter().collect();
        tracing::debug!(
            locales = ?catalogs.keys().collect::<Vec<_>>(),
            key_separator,
            "Catalog registry built"
        );
        Self { catalogs, key_separator }
    }

    /// Returns the registry shared by the whole process.
    #[must_use]
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Returns the locales this registry holds, in declaration order.
    #[must_use]
    pub fn all_locales(&self) -> Vec<LocaleCode> {
        self.catalogs.keys().copied().collect()
    }

    /// Returns the separator used for key paths.
    #[must_use]
    pub fn key_separator(&self) -> &str {
        &self.key_separator
    }

    /// Returns the raw catalog of `locale`.
    ///
    /// # Errors
    /// `UnknownLocale` if `locale` is not registered.
    pub fn catalog(&self, locale: &str) -> Result<&CatalogNode, LocalizationError> {
        self.lookup(locale).map(|(_, catalog)| catalog)
    }

    /// Returns the localized view of `locale`.
    ///
    /// # Errors
    /// `UnknownLocale` if `locale` is not registered.
    pub fn get(&self, locale: &str) -> Result<LocalizedView<'_>, LocalizationError> {
        let (code, catalog) = self.lookup(locale)?;
        Ok(LocalizedView::new(code, catalog, &self.key_separator))
    }

    /// Resolves `locale` to its code and catalog.
    fn lookup(&self, locale: &str) -> Result<(LocaleCode, &CatalogNode), LocalizationError> {
        let found = locale
            .parse::<LocaleCode>()
            .ok()
            .and_then(|code| self.catalogs.get(&code).map(|catalog| (code, catalog)));
        found.ok_or_else(|| {
            tracing::debug!(locale, "Requested unknown locale");
            LocalizationError::UnknownLocale(locale.to_string())
        })
    }

    /// Checks every catalog for consistency with the others.
    ///
    /// - Structural parity between every pair of locales (errors).
    /// - Keys containing the key separator (errors).
    /// - Flat keys shared by a plural form and a sibling key (warnings).
    /// - Placeholder names against `config.reference_locale`, if enabled.
    #[must_use]
    pub fn lint(&self, config: &LintConfig) -> LintReport {
        let separator = self.key_separator.as_str();
        let mut findings = Vec::new();

        let locales: Vec<_> = self.catalogs.iter().collect();
        for (index, (reference, reference_catalog)) in locales.iter().enumerate() {
            for (locale, candidate) in locales.iter().skip(index + 1) {
                let differences = catalog::compare_structure(
                    reference_catalog,
                    candidate,
                    separator,
                    config.strict_leaf_kinds,
                );
                findings.extend(differences.into_iter().map(|difference| LintFinding {
                    locale: **locale,
                    reference: **reference,
                    path: difference.path,
                    severity: Severity::Error,
                    kind: FindingKind::Structure(difference.kind),
                }));
            }
        }

        for (locale, node) in &self.catalogs {
            findings.extend(catalog::find_unreachable_keys(node, separator).into_iter().map(
                |path| LintFinding {
                    locale: *locale,
                    reference: *locale,
                    path,
                    severity: Severity::Error,
                    kind: FindingKind::UnreachableKey,
                },
            ));
        }

        for (locale, node) in &self.catalogs {
            findings.extend(
                catalog::find_flattened_key_collisions(node, separator).into_iter().map(|path| {
                    LintFinding {
                        locale: *locale,
                        reference: *locale,
                        path,
                        severity: Severity::Warning,
                        kind: FindingKind::FlattenedKeyCollision,
                    }
                }),
            );
        }

        if config.placeholder_consistency
            && let Some(reference_catalog) = self.catalogs.get(&config.reference_locale)
        {
            for (locale, node) in &self.catalogs {
                if *locale == config.reference_locale {
                    continue;
                }
                let differences = catalog::compare_placeholders(reference_catalog, node, separator);
                findings.extend(differences.into_iter().map(|difference| LintFinding {
                    locale: *locale,
                    reference: config.reference_locale,
                    path: difference.path.clone(),
                    severity: config.placeholder_severity,
                    kind: FindingKind::Placeholders(difference),
                }));
            }
        }

        let message_counts = self
            .catalogs
            .iter()
            .map(|(locale, node)| (*locale, node.message_count()))
            .collect();

        LintReport { findings, message_counts }
    }
}

/// Outcome of [`CatalogRegistry::lint`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintReport {
    /// Every problem found, grouped by check.
    findings: Vec<LintFinding>,
    /// Number of flattened messages per locale.
    message_counts: BTreeMap<LocaleCode, usize>,
}

impl LintReport {
    /// Returns every finding.
    #[must_use]
    pub fn findings(&self) -> &[LintFinding] {
        &self.findings
    }

    /// Whether no error-severity finding exists. Warnings are allowed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.count(Severity::Error) == 0
    }

    /// Number of findings with `severity`.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.findings.iter().filter(|finding| finding.severity == severity).count()
    }

    /// Number of messages (plural forms counted individually) per locale.
    #[must_use]
    pub const fn message_counts(&self) -> &BTreeMap<LocaleCode, usize> {
        &self.message_counts
    }
}

/// One problem found by the lint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("[{locale} vs {reference}] '{path}': {kind}")]
pub struct LintFinding {
    /// Locale the problem was found in.
    pub locale: LocaleCode,
    /// Locale it was compared against. Equal to `locale` for single-locale checks.
    pub reference: LocaleCode,
    /// Key path the finding refers to.
    pub path: String,
    /// Error findings fail the lint.
    pub severity: Severity,
    /// The check that failed.
    pub kind: FindingKind,
}

/// The check that produced a [`LintFinding`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FindingKind {
    /// The key trees of two locales differ.
    #[error("{0}")]
    Structure(DifferenceKind),
    /// A leaf uses other placeholder names than the reference locale.
    #[error("missing placeholders {:?}, unexpected placeholders {:?}", .0.missing, .0.unexpected)]
    Placeholders(PlaceholderDifference),
    /// A key contains the key separator.
    #[error("key contains the key separator and cannot be reached by path")]
    UnreachableKey,
    /// A plural form suffix clashes with a sibling key when flattened.
    #[error("several messages flatten to this key")]
    FlattenedKeyCollision,
}
