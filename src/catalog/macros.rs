//! Literal catalog content.

/// Builds a [`CatalogNode`](crate::catalog::CatalogNode) tree from literal content.
///
/// - `"key" => "template"` is a plain leaf.
/// - `"key" => { ... }` is an interior node.
/// - `"key" => [one: "...", other: "..."]` is a plural leaf. Any of
///   `zero`, `one`, `two`, `few`, `many` may appear; `other` is required
///   and must come last.
///
/// # Example
///
/// ```
/// use fines_l10n::catalog;
/// use fines_l10n::catalog::NodeKind;
///
/// let en = catalog! {
///     "fine" => {
///         "new" => "New fine for {{name}}",
///         "count" => [one: "{{count}} fine", other: "{{count}} fines"],
///     },
/// };
///
/// assert_eq!(en.get_path("fine.count", ".").map(|n| n.kind()), Some(NodeKind::PluralLeaf));
/// ```
///
/// Omitting `other` does not compile:
///
/// ```compile_fail
/// use fines_l10n::catalog;
///
/// let broken = catalog! { "count" => [one: "{{count}} fine"] };
/// ```
#[macro_export]
macro_rules! catalog {
    ($($key:literal => $value:tt),* $(,)?) => {
        $crate::catalog::CatalogNode::interior::<&'static str, _>([
            $(($key, $crate::__catalog_node!($value))),*
        ])
    };
}

/// Expands one catalog value. Implementation detail of [`catalog!`].
#[doc(hidden)]
#[macro_export]
macro_rules! __catalog_node {
    ({ $($body:tt)* }) => {
        $crate::catalog! { $($body)* }
    };
    ([ $($forms:tt)* ]) => {
        $crate::catalog::CatalogNode::Plural($crate::__catalog_plural!(@forms [] $($forms)*))
    };
    ($template:literal) => {
        $crate::catalog::CatalogNode::Plain(::std::string::String::from($template))
    };
}

/// Collects plural forms until the final `other`. Implementation detail of [`catalog!`].
#[doc(hidden)]
#[macro_export]
macro_rules! __catalog_plural {
    (@forms [$($built:tt)*] other : $other:literal $(,)?) => {
        $crate::plural::Pluralization::new($other)$($built)*
    };
    (@forms [$($built:tt)*] other : $other:literal , $($rest:tt)+) => {
        ::std::compile_error!("`other` must be the last plural form")
    };
    (@forms [$($built:tt)*] $form:ident : $text:literal , $($rest:tt)*) => {
        $crate::__catalog_plural!(@forms [$($built)* .$form($text)] $($rest)*)
    };
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use crate::catalog::{
        CatalogNode,
        NodeKind,
    };
    use crate::plural::Pluralization;

    #[googletest::test]
    fn builds_nested_tree() {
        let node = catalog! {
            "title" => "Fines",
            "fine" => {
                "new" => { "title" => "New fine" },
            },
        };

        expect_that!(node.kind(), eq(NodeKind::Interior));
        expect_that!(node.get_path("title", "."), some(eq(&CatalogNode::from("Fines"))));
        expect_that!(node.get_path("fine.new.title", "."), some(eq(&CatalogNode::from("New fine"))));
    }

    #[googletest::test]
    fn builds_plural_leaf_with_every_form() {
        let node = catalog! {
            "count" => [zero: "Z", one: "O", two: "T", few: "F", many: "M", other: "X",],
        };

        let expected = Pluralization::new("X").zero("Z").one("O").two("T").few("F").many("M");
        expect_that!(node.child("count"), some(eq(&CatalogNode::Plural(expected))));
    }

    #[googletest::test]
    fn builds_plural_leaf_with_only_other() {
        let node = catalog! { "count" => [other: "{{count}} x"] };

        expect_that!(
            node.child("count"),
            some(eq(&CatalogNode::Plural(Pluralization::new("{{count}} x"))))
        );
    }
}
