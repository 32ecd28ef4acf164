//! Checks the compiled-in catalogs for cross-locale consistency.
//!
//! Reads `.l10n.json` from the working directory if present. Exits with a
//! failure status when any error-severity finding exists.

use std::process::ExitCode;

use fines_l10n::CatalogRegistry;
use fines_l10n::config::{
    self,
    ConfigError,
    Severity,
};
use fines_l10n::registry::LintReport;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let report = match run() {
        Ok(report) => report,
        Err(error) => {
            tracing::error!("Failed to load settings: {error}");
            return ExitCode::FAILURE;
        }
    };

    for finding in report.findings() {
        match finding.severity {
            Severity::Error => tracing::error!("{finding}"),
            Severity::Warning => tracing::warn!("{finding}"),
        }
    }
    for (locale, count) in report.message_counts() {
        tracing::info!(%locale, count, "Messages");
    }

    if report.is_clean() {
        tracing::info!(
            warnings = report.count(Severity::Warning),
            "All catalogs are consistent"
        );
        ExitCode::SUCCESS
    } else {
        tracing::error!(errors = report.count(Severity::Error), "Catalog lint failed");
        ExitCode::FAILURE
    }
}

/// Loads the settings of the working directory and lints every catalog.
fn run() -> Result<LintReport, ConfigError> {
    let settings = config::load(&std::env::current_dir()?)?;
    let registry = CatalogRegistry::new(&settings)?;
    Ok(registry.lint(&settings.lint))
}
