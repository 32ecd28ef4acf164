//! Count-based selection between message variants.
//!
//! The rule table is a fixed approximation, not CLDR. Catalog content is
//! authored against it, so the order below must not be "corrected":
//!
//! | Rule | Condition        | Variant |
//! |------|------------------|---------|
//! | 1    | `count == 0`     | `zero`  |
//! | 2    | `count == 1`     | `one`   |
//! | 3    | `count == 2`     | `two`   |
//! | 4    | `1 < count < 5`  | `few`   |
//! | 5    | `5 <= count <= 20` | `many` |
//! | 6    | otherwise        | `other` |
//!
//! The first rule whose condition holds *and* whose variant is present wins.
//! `count == 2` therefore falls through to `few` when `two` is absent.

use std::fmt;

/// Plural variant names, in rule order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PluralCategory {
    /// Exactly zero.
    Zero,
    /// Exactly one.
    One,
    /// Exactly two.
    Two,
    /// Two to four.
    Few,
    /// Five to twenty.
    Many,
    /// Universal fallback.
    Other,
}

impl PluralCategory {
    /// All categories in rule order, `Other` last.
    pub const ALL: [Self; 6] =
        [Self::Zero, Self::One, Self::Two, Self::Few, Self::Many, Self::Other];

    /// Returns the lowercase variant name (e.g. `"few"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }

    /// Whether rule `self` applies to `count`, ignoring variant presence.
    fn applies_to(self, count: i64) -> bool {
        match self {
            Self::Zero => count == 0,
            Self::One => count == 1,
            Self::Two => count == 2,
            Self::Few => (2..5).contains(&count),
            Self::Many => (5..=20).contains(&count),
            Self::Other => true,
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Up to six message variants selected by a count. `other` is mandatory.
///
/// Values are built once from literal catalog content and never change.
///
/// # Example
///
/// ```
/// use fines_l10n::plural::Pluralization;
///
/// let fines = Pluralization::new("{{count}} fines").one("{{count}} fine");
///
/// assert_eq!(fines.select(1), "{{count}} fine");
/// assert_eq!(fines.select(0), "{{count}} fines");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pluralization {
    /// Variant for rule 1.
    zero: Option<String>,
    /// Variant for rule 2.
    one: Option<String>,
    /// Variant for rule 3.
    two: Option<String>,
    /// Variant for rule 4.
    few: Option<String>,
    /// Variant for rule 5.
    many: Option<String>,
    /// Fallback variant.
    other: String,
}

impl Pluralization {
    /// Creates a pluralization holding only the mandatory `other` variant.
    #[must_use]
    pub fn new(other: impl Into<String>) -> Self {
        Self { zero: None, one: None, two: None, few: None, many: None, other: other.into() }
    }

    /// Sets the `zero` variant.
    #[must_use]
    pub fn zero(mut self, template: impl Into<String>) -> Self {
        self.zero = Some(template.into());
        self
    }

    /// Sets the `one` variant.
    #[must_use]
    pub fn one(mut self, template: impl Into<String>) -> Self {
        self.one = Some(template.into());
        self
    }

    /// Sets the `two` variant.
    #[must_use]
    pub fn two(mut self, template: impl Into<String>) -> Self {
        self.two = Some(template.into());
        self
    }

    /// Sets the `few` variant.
    #[must_use]
    pub fn few(mut self, template: impl Into<String>) -> Self {
        self.few = Some(template.into());
        self
    }

    /// Sets the `many` variant.
    #[must_use]
    pub fn many(mut self, template: impl Into<String>) -> Self {
        self.many = Some(template.into());
        self
    }

    /// Returns the stored variant for `category`, if present.
    #[must_use]
    pub fn get(&self, category: PluralCategory) -> Option<&str> {
        match category {
            PluralCategory::Zero => self.zero.as_deref(),
            PluralCategory::One => self.one.as_deref(),
            PluralCategory::Two => self.two.as_deref(),
            PluralCategory::Few => self.few.as_deref(),
            PluralCategory::Many => self.many.as_deref(),
            PluralCategory::Other => Some(&self.other),
        }
    }

    /// Returns the category `select` picks for `count`.
    #[must_use]
    pub fn category(&self, count: i64) -> PluralCategory {
        PluralCategory::ALL
            .into_iter()
            .find(|category| category.applies_to(count) && self.get(*category).is_some())
            .unwrap_or(PluralCategory::Other)
    }

    /// Returns the template for `count`. Total over every `i64`.
    #[must_use]
    pub fn select(&self, count: i64) -> &str {
        self.get(self.category(count)).unwrap_or(&self.other)
    }

    /// Iterates over the present variants in rule order.
    pub fn forms(&self) -> impl Iterator<Item = (PluralCategory, &str)> {
        PluralCategory::ALL
            .into_iter()
            .filter_map(|category| self.get(category).map(|template| (category, template)))
    }
}
