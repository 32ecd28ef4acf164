//! Consistency and rendering tests for the compiled-in catalogs

#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use std::collections::HashMap;

use fines_l10n::catalog::{
    compare_placeholders,
    compare_structure,
    find_flattened_key_collisions,
    find_unreachable_keys,
    has_same_shape,
};
use fines_l10n::config::{
    LintConfig,
    LocalizationSettings,
    Severity,
};
use fines_l10n::{
    CatalogRegistry,
    LocaleCode,
    LocalizationError,
};
use googletest::prelude::*;
use rstest::rstest;

fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(name, value)| ((*name).to_string(), (*value).to_string())).collect()
}

fn registry() -> CatalogRegistry {
    CatalogRegistry::new(&LocalizationSettings::default()).unwrap()
}

#[googletest::test]
fn every_locale_pair_has_same_shape() {
    let registry = registry();
    let locales = registry.all_locales();

    for reference in &locales {
        for candidate in &locales {
            let left = registry.catalog(reference.as_str()).unwrap();
            let right = registry.catalog(candidate.as_str()).unwrap();

            expect_that!(has_same_shape(left, right), eq(true), "{reference} vs {candidate}");
            expect_that!(compare_structure(left, right, ".", true), is_empty());
            expect_that!(compare_placeholders(left, right, "."), is_empty());
        }
    }
}

#[googletest::test]
fn every_key_is_addressable() {
    let registry = registry();

    for locale in registry.all_locales() {
        let catalog = registry.catalog(locale.as_str()).unwrap();
        expect_that!(find_unreachable_keys(catalog, "."), is_empty());
        expect_that!(find_flattened_key_collisions(catalog, "."), is_empty());
        expect_that!(catalog.flatten(".").len(), eq(catalog.message_count()));
    }
}

#[googletest::test]
fn shipped_catalogs_lint_clean() {
    let config = LintConfig { strict_leaf_kinds: true, ..LintConfig::default() };

    let report = registry().lint(&config);

    expect_that!(report.findings(), is_empty());
    expect_that!(report.is_clean(), eq(true));
    expect_that!(report.count(Severity::Warning), eq(0));
    expect_that!(
        report.message_counts().get(&LocaleCode::En),
        eq(report.message_counts().get(&LocaleCode::De))
    );
}

#[rstest]
#[case("en", "Lea fined you €5 for \"Late for training\".")]
#[case("de", "Lea hat dir eine Strafe von €5 für „Late for training“ gegeben.")]
fn render_new_fine_notification(#[case] locale: &str, #[case] expected: &str) {
    let registry = registry();
    let view = registry.get(locale).unwrap();
    let args = args(&[("person", "Lea"), ("amount", "€5"), ("reason", "Late for training")]);

    assert_that!(view.render("notification.fine.new.body", &args), ok(eq(expected)));
}

#[rstest]
#[case("en", 0, "No open fines")]
#[case("en", 1, "1 open fine")]
#[case("en", 2, "2 open fines")]
#[case("en", 3, "3 open fines")]
#[case("en", 21, "21 open fines")]
#[case("de", 0, "Keine offenen Strafen")]
#[case("de", 1, "1 offene Strafe")]
#[case("de", 7, "7 offene Strafen")]
fn render_open_fine_count(#[case] locale: &str, #[case] count: i64, #[case] expected: &str) {
    let registry = registry();
    let view = registry.get(locale).unwrap();

    assert_that!(
        view.render_plural("fine.overview.open_count", count, &HashMap::new()),
        ok(eq(expected))
    );
}

#[rstest]
#[case(1, "You have 1 unpaid fine totalling €5.")]
#[case(4, "You have 4 unpaid fines totalling €5.")]
fn render_reminder_with_extra_arguments(#[case] count: i64, #[case] expected: &str) {
    let registry = registry();
    let view = registry.get("en").unwrap();

    assert_that!(
        view.render_plural("notification.fine.reminder.body", count, &args(&[("amount", "€5")])),
        ok(eq(expected))
    );
}

#[googletest::test]
fn render_reports_missing_argument() {
    let registry = registry();
    let view = registry.get("en").unwrap();

    expect_that!(
        view.render("team.invitation.already_member", &HashMap::new()),
        err(eq(&LocalizationError::MissingPlaceholderArgument("team".to_string())))
    );
}

#[googletest::test]
fn unknown_locale_is_rejected() {
    let registry = registry();

    expect_that!(
        registry.get("fr"),
        err(eq(&LocalizationError::UnknownLocale("fr".to_string())))
    );
}

#[googletest::test]
fn unknown_path_is_rejected() {
    let view = CatalogRegistry::shared().get("de").unwrap();

    expect_that!(
        view.render("fine.state.cancelled", &HashMap::new()),
        err(eq(&LocalizationError::UnknownKeyPath("fine.state.cancelled".to_string())))
    );
}

#[googletest::test]
fn shared_registry_serves_all_locales() {
    let registry = CatalogRegistry::shared();

    expect_that!(registry.all_locales(), elements_are![eq(&LocaleCode::En), eq(&LocaleCode::De)]);
    expect_that!(
        registry.get("de").unwrap().render("fine.state.paid", &HashMap::new()),
        ok(eq("Bezahlt"))
    );
}
