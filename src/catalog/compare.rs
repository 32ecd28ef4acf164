//! Cross-locale catalog comparison.
//!
//! Two catalogs have structural parity when they have the same key set at
//! every interior node and, at every shared path, both nodes are interior
//! or both are leaves. Which leaf kind each locale uses is free unless
//! `strict_leaf_kinds` is requested.

use std::collections::{
    BTreeMap,
    BTreeSet,
};

use thiserror::Error;

use super::node::{
    COUNT_PLACEHOLDER,
    CatalogNode,
    NodeKind,
    join_path,
};

/// One place where a candidate catalog deviates from the reference shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{path}': {kind}")]
pub struct StructuralDifference {
    /// Key path of the deviating node.
    pub path: String,
    /// How the node deviates.
    pub kind: DifferenceKind,
}

/// How a node deviates from the reference.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifferenceKind {
    /// Present in the reference, absent in the candidate.
    #[error("key is missing")]
    MissingKey,
    /// Present in the candidate, absent in the reference.
    #[error("key does not exist in the reference")]
    UnexpectedKey,
    /// One side is interior, the other a leaf.
    #[error("expected {expected}, found {found}")]
    ShapeMismatch {
        /// Kind in the reference.
        expected: NodeKind,
        /// Kind in the candidate.
        found: NodeKind,
    },
    /// Both are leaves of different kinds. Reported in strict mode only.
    #[error("expected {expected}, found {found}")]
    LeafKindMismatch {
        /// Leaf kind in the reference.
        expected: NodeKind,
        /// Leaf kind in the candidate.
        found: NodeKind,
    },
}

/// Compares the shape of `candidate` against `reference`.
///
/// Differences are sorted by path. Subtrees below a shape mismatch are not
/// descended into.
#[must_use]
pub fn compare_structure(
    reference: &CatalogNode,
    candidate: &CatalogNode,
    separator: &str,
    strict_leaf_kinds: bool,
) -> Vec<StructuralDifference> {
    let mut differences = Vec::new();
    compare_nodes(reference, candidate, separator, strict_leaf_kinds, None, &mut differences);
    differences.sort_by(|a, b| a.path.cmp(&b.path));
    differences
}

/// Whether two catalogs have structural parity.
#[must_use]
pub fn has_same_shape(a: &CatalogNode, b: &CatalogNode) -> bool {
    match (a, b) {
        (CatalogNode::Interior(left), CatalogNode::Interior(right)) => {
            left.len() == right.len()
                && left.iter().all(|(key, child)| {
                    right.get(key).is_some_and(|other| has_same_shape(child, other))
                })
        }
        (CatalogNode::Interior(_), _) | (_, CatalogNode::Interior(_)) => false,
        _ => true,
    }
}

/// Recursive worker for [`compare_structure`].
fn compare_nodes(
    reference: &CatalogNode,
    candidate: &CatalogNode,
    separator: &str,
    strict_leaf_kinds: bool,
    prefix: Option<&str>,
    differences: &mut Vec<StructuralDifference>,
) {
    let path = || prefix.unwrap_or_default().to_string();
    let (expected, found) = (reference.kind(), candidate.kind());

    match (reference, candidate) {
        (CatalogNode::Interior(left), CatalogNode::Interior(right)) => {
            for (key, child) in left {
                let full_key = join_path(prefix, key, separator);
                match right.get(key) {
                    Some(other) => compare_nodes(
                        child,
                        other,
                        separator,
                        strict_leaf_kinds,
                        Some(&full_key),
                        differences,
                    ),
                    None => differences
                        .push(StructuralDifference { path: full_key, kind: DifferenceKind::MissingKey }),
                }
            }
            for key in right.keys().filter(|key| !left.contains_key(*key)) {
                differences.push(StructuralDifference {
                    path: join_path(prefix, key, separator),
                    kind: DifferenceKind::UnexpectedKey,
                });
            }
        }
        _ if expected.is_leaf() != found.is_leaf() => {
            differences.push(StructuralDifference {
                path: path(),
                kind: DifferenceKind::ShapeMismatch { expected, found },
            });
        }
        _ if strict_leaf_kinds && expected != found => {
            differences.push(StructuralDifference {
                path: path(),
                kind: DifferenceKind::LeafKindMismatch { expected, found },
            });
        }
        _ => {}
    }
}

/// A leaf whose placeholder names differ between two locales.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{path}': missing placeholders {missing:?}, unexpected placeholders {unexpected:?}")]
pub struct PlaceholderDifference {
    /// Key path of the leaf.
    pub path: String,
    /// Names the reference uses but the candidate does not.
    pub missing: Vec<String>,
    /// Names the candidate uses but the reference does not.
    pub unexpected: Vec<String>,
}

/// Compares placeholder names of every leaf both catalogs share.
///
/// Paths only one side has are left to [`compare_structure`].
#[must_use]
pub fn compare_placeholders(
    reference: &CatalogNode,
    candidate: &CatalogNode,
    separator: &str,
) -> Vec<PlaceholderDifference> {
    let mut differences = Vec::new();
    collect_placeholder_differences(reference, candidate, separator, None, &mut differences);
    differences.sort_by(|a, b| a.path.cmp(&b.path));
    differences
}

/// Recursive worker for [`compare_placeholders`].
fn collect_placeholder_differences(
    reference: &CatalogNode,
    candidate: &CatalogNode,
    separator: &str,
    prefix: Option<&str>,
    differences: &mut Vec<PlaceholderDifference>,
) {
    match (reference, candidate) {
        (CatalogNode::Interior(left), CatalogNode::Interior(right)) => {
            for (key, child) in left {
                if let Some(other) = right.get(key) {
                    let full_key = join_path(prefix, key, separator);
                    collect_placeholder_differences(
                        child,
                        other,
                        separator,
                        Some(&full_key),
                        differences,
                    );
                }
            }
        }
        (CatalogNode::Interior(_), _) | (_, CatalogNode::Interior(_)) => {}
        _ => {
            let mut expected = reference.placeholders();
            let mut found = candidate.placeholders();
            if reference.kind() == NodeKind::PluralLeaf || candidate.kind() == NodeKind::PluralLeaf {
                expected.remove(COUNT_PLACEHOLDER);
                found.remove(COUNT_PLACEHOLDER);
            }
            if expected != found {
                differences.push(PlaceholderDifference {
                    path: prefix.unwrap_or_default().to_string(),
                    missing: expected.difference(&found).map(|name| (*name).to_string()).collect(),
                    unexpected: found.difference(&expected).map(|name| (*name).to_string()).collect(),
                });
            }
        }
    }
}

/// Lists key paths whose last key contains `separator`.
///
/// Such keys cannot be addressed by a dotted path lookup. Every key contains
/// the empty string, so an empty separator reports every key.
#[must_use]
pub fn find_unreachable_keys(node: &CatalogNode, separator: &str) -> Vec<String> {
    let mut found = BTreeSet::new();
    collect_unreachable_keys(node, separator, None, &mut found);
    found.into_iter().collect()
}

/// Lists flat keys that more than one message maps to.
///
/// A plural leaf `items` and a sibling key `items_one` both flatten to
/// `items_one`, so [`CatalogNode::flatten`] can only keep one of them.
#[must_use]
pub fn find_flattened_key_collisions(node: &CatalogNode, separator: &str) -> Vec<String> {
    let mut seen = BTreeMap::<String, usize>::new();
    node.for_each_message(separator, None, &mut |key, _| {
        *seen.entry(key).or_default() += 1;
    });
    seen.into_iter().filter(|(_, count)| *count > 1).map(|(key, _)| key).collect()
}

/// Recursive worker for [`find_unreachable_keys`].
fn collect_unreachable_keys(
    node: &CatalogNode,
    separator: &str,
    prefix: Option<&str>,
    found: &mut BTreeSet<String>,
) {
    let CatalogNode::Interior(children) = node else {
        return;
    };
    for (key, child) in children {
        let full_key = join_path(prefix, key, separator);
        if key.contains(separator) {
            found.insert(full_key.clone());
        }
        collect_unreachable_keys(child, separator, Some(&full_key), found);
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::catalog;
    use crate::test_utils::{
        sample_de,
        sample_en,
    };

    #[googletest::test]
    fn same_shape_with_different_leaf_kinds() {
        let (en, de) = (sample_en(), sample_de());

        expect_that!(has_same_shape(&en, &de), eq(true));
        expect_that!(has_same_shape(&de, &en), eq(true));
        expect_that!(compare_structure(&en, &de, ".", false), is_empty());
    }

    #[googletest::test]
    fn strict_mode_reports_leaf_kind_mismatch() {
        let (en, de) = (sample_en(), sample_de());

        let differences = compare_structure(&en, &de, ".", true);

        expect_that!(
            differences,
            elements_are![eq(&StructuralDifference {
                path: "fine.count".to_string(),
                kind: DifferenceKind::LeafKindMismatch {
                    expected: NodeKind::PluralLeaf,
                    found: NodeKind::PlainLeaf,
                },
            })]
        );
    }

    #[googletest::test]
    fn missing_and_unexpected_keys() {
        let reference = catalog! { "a" => "A", "b" => { "c" => "C", "d" => "D" } };
        let candidate = catalog! { "a" => "A", "b" => { "c" => "C", "e" => "E" }, "f" => "F" };

        let differences = compare_structure(&reference, &candidate, ".", false);

        expect_that!(
            differences,
            elements_are![
                eq(&StructuralDifference { path: "b.d".to_string(), kind: DifferenceKind::MissingKey }),
                eq(&StructuralDifference { path: "b.e".to_string(), kind: DifferenceKind::UnexpectedKey }),
                eq(&StructuralDifference { path: "f".to_string(), kind: DifferenceKind::UnexpectedKey }),
            ]
        );
        expect_that!(has_same_shape(&reference, &candidate), eq(false));
    }

    #[googletest::test]
    fn shape_mismatch_is_not_descended() {
        let reference = catalog! { "a" => { "b" => "B", "c" => "C" } };
        let candidate = catalog! { "a" => [one: "one", other: "many"] };

        let differences = compare_structure(&reference, &candidate, ".", false);

        expect_that!(
            differences,
            elements_are![eq(&StructuralDifference {
                path: "a".to_string(),
                kind: DifferenceKind::ShapeMismatch {
                    expected: NodeKind::Interior,
                    found: NodeKind::PluralLeaf,
                },
            })]
        );
        expect_that!(has_same_shape(&reference, &candidate), eq(false));
        expect_that!(has_same_shape(&candidate, &reference), eq(false));
    }

    #[rstest]
    #[case::missing(StructuralDifference { path: "a.b".to_string(), kind: DifferenceKind::MissingKey }, "'a.b': key is missing")]
    #[case::shape(
        StructuralDifference {
            path: "a".to_string(),
            kind: DifferenceKind::ShapeMismatch { expected: NodeKind::Interior, found: NodeKind::PlainLeaf },
        },
        "'a': expected an interior node, found a plain leaf"
    )]
    fn structural_difference_display(#[case] difference: StructuralDifference, #[case] expected: &str) {
        assert_that!(difference.to_string(), eq(expected));
    }

    #[googletest::test]
    fn placeholders_match_across_leaf_kinds() {
        let (en, de) = (sample_en(), sample_de());

        expect_that!(compare_placeholders(&en, &de, "."), is_empty());
    }

    #[googletest::test]
    fn placeholder_differences_are_reported_per_leaf() {
        let reference = catalog! {
            "fine" => {
                "new" => "{{person}} was fined {{amount}}",
                "paid" => "{{person}} paid",
            },
        };
        let candidate = catalog! {
            "fine" => {
                "new" => "{{person}} muss {{betrag}} zahlen",
                "paid" => "{{person}} hat bezahlt",
            },
        };

        let differences = compare_placeholders(&reference, &candidate, ".");

        expect_that!(
            differences,
            elements_are![eq(&PlaceholderDifference {
                path: "fine.new".to_string(),
                missing: vec!["amount".to_string()],
                unexpected: vec!["betrag".to_string()],
            })]
        );
    }

    #[googletest::test]
    fn placeholder_comparison_skips_structural_gaps() {
        let reference = catalog! { "a" => "{{x}}", "b" => "{{y}}" };
        let candidate = catalog! { "a" => "{{x}}", "c" => "{{z}}" };

        expect_that!(compare_placeholders(&reference, &candidate, "."), is_empty());
    }

    #[googletest::test]
    fn unreachable_keys_contain_separator() {
        let node = catalog! {
            "fine.new" => { "title" => "T" },
            "fine" => { "paid.title" => "P", "ok" => "O" },
        };

        expect_that!(
            find_unreachable_keys(&node, "."),
            elements_are![eq("fine.new"), eq("fine.paid.title")]
        );
        expect_that!(find_unreachable_keys(&node, "/"), is_empty());
    }

    #[googletest::test]
    fn flattened_key_collisions_between_plural_and_sibling() {
        let node = catalog! {
            "team" => {
                "members" => [one: "{{count}} member", other: "{{count}} members"],
                "members_one" => "Only member",
                "members_two" => "Two members",
            },
        };

        expect_that!(
            find_flattened_key_collisions(&node, "."),
            elements_are![eq("team.members_one")]
        );
    }

    #[googletest::test]
    fn no_flattened_key_collisions_in_sample() {
        let catalog = sample_en();

        expect_that!(find_flattened_key_collisions(&catalog, "."), is_empty());
    }
}
