//! Catalog node tree.

use std::collections::{
    BTreeMap,
    BTreeSet,
    HashMap,
};
use std::fmt;

use crate::plural::Pluralization;
use crate::template;

/// Placeholder every plural leaf receives implicitly.
pub(crate) const COUNT_PLACEHOLDER: &str = "count";

/// One node of a locale's message tree.
///
/// A node is exactly one of the three variants, so a malformed node
/// (both a map and a leaf, or neither) cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogNode {
    /// Named children. Key order carries no meaning.
    Interior(HashMap<String, CatalogNode>),
    /// A template that may contain `{{name}}` tokens.
    Plain(String),
    /// Count-selected templates.
    Plural(Pluralization),
}

/// The variant of a [`CatalogNode`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// [`CatalogNode::Interior`]
    Interior,
    /// [`CatalogNode::Plain`]
    PlainLeaf,
    /// [`CatalogNode::Plural`]
    PluralLeaf,
}

impl NodeKind {
    /// Whether the kind is one of the two leaf kinds.
    #[must_use]
    pub const fn is_leaf(self) -> bool {
        !matches!(self, Self::Interior)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interior => f.write_str("an interior node"),
            Self::PlainLeaf => f.write_str("a plain leaf"),
            Self::PluralLeaf => f.write_str("a plural leaf"),
        }
    }
}

impl CatalogNode {
    /// Builds an interior node from `(key, child)` pairs.
    ///
    /// A repeated key keeps the last child.
    pub fn interior<K, I>(children: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Self)>,
    {
        Self::Interior(children.into_iter().map(|(key, child)| (key.into(), child)).collect())
    }

    /// Returns the variant of this node.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Interior(_) => NodeKind::Interior,
            Self::Plain(_) => NodeKind::PlainLeaf,
            Self::Plural(_) => NodeKind::PluralLeaf,
        }
    }

    /// Returns the direct child named `key`. Leaves have no children.
    #[must_use]
    pub fn child(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Interior(children) => children.get(key),
            Self::Plain(_) | Self::Plural(_) => None,
        }
    }

    /// Resolves a key path such as `notification.fine.new.title`.
    ///
    /// The empty path resolves to `self`.
    #[must_use]
    pub fn get_path(&self, path: &str, separator: &str) -> Option<&Self> {
        if path.is_empty() {
            return Some(self);
        }
        path.split(separator).try_fold(self, |node, key| node.child(key))
    }

    /// Flattens the tree into `path -> template` pairs, sorted by path.
    ///
    /// Plural forms get the variant name as a suffix (`items_one`,
    /// `items_other`), the way flat i18next resources store them. A plural
    /// leaf `items` next to a sibling key `items_one` produces the same flat
    /// key twice, and only one of the two templates is kept. Which one is
    /// unspecified; [`find_flattened_key_collisions`] reports such paths.
    ///
    /// [`find_flattened_key_collisions`]: super::find_flattened_key_collisions
    ///
    /// # Examples
    /// ```
    /// use fines_l10n::catalog;
    ///
    /// let node = catalog! {
    ///     "common" => {
    ///         "hello" => "Hello",
    ///         "items" => [one: "{{count}} item", other: "{{count}} items"],
    ///     },
    /// };
    ///
    /// let flattened = node.flatten(".");
    /// assert_eq!(flattened.get("common.hello"), Some(&"Hello"));
    /// assert_eq!(flattened.get("common.items_one"), Some(&"{{count}} item"));
    /// assert_eq!(flattened.len(), 3);
    /// ```
    #[must_use]
    pub fn flatten(&self, separator: &str) -> BTreeMap<String, &str> {
        let mut result = BTreeMap::new();
        self.for_each_message(separator, None, &mut |key, template| {
            result.insert(key, template);
        });
        result
    }

    /// Number of messages in the tree, counting each plural form.
    ///
    /// Unlike `flatten(..).len()` this is not affected by flat key collisions.
    #[must_use]
    pub fn message_count(&self) -> usize {
        match self {
            Self::Interior(children) => children.values().map(Self::message_count).sum(),
            Self::Plain(_) => 1,
            Self::Plural(forms) => forms.forms().count(),
        }
    }

    /// Calls `visit` with the flat key and template of every message.
    pub(crate) fn for_each_message<'a, F>(
        &'a self,
        separator: &str,
        prefix: Option<&str>,
        visit: &mut F,
    ) where
        F: FnMut(String, &'a str),
    {
        match self {
            Self::Interior(children) => {
                for (key, child) in children {
                    let full_key = join_path(prefix, key, separator);
                    child.for_each_message(separator, Some(&full_key), visit);
                }
            }
            Self::Plain(template) => visit(prefix.unwrap_or_default().to_string(), template),
            Self::Plural(forms) => {
                for (category, template) in forms.forms() {
                    visit(format!("{}_{category}", prefix.unwrap_or_default()), template);
                }
            }
        }
    }

    /// Placeholder names a caller must supply to render this leaf.
    ///
    /// For plural leaves this is the union over every form, minus the
    /// implicit `count`. Interior nodes have none.
    #[must_use]
    pub fn placeholders(&self) -> BTreeSet<&str> {
        match self {
            Self::Interior(_) => BTreeSet::new(),
            Self::Plain(text) => template::placeholders(text).into_iter().collect(),
            Self::Plural(forms) => forms
                .forms()
                .flat_map(|(_, text)| template::placeholders(text))
                .filter(|name| *name != COUNT_PLACEHOLDER)
                .collect(),
        }
    }
}

impl From<&str> for CatalogNode {
    fn from(template: &str) -> Self {
        Self::Plain(template.to_string())
    }
}

impl From<String> for CatalogNode {
    fn from(template: String) -> Self {
        Self::Plain(template)
    }
}

impl From<Pluralization> for CatalogNode {
    fn from(forms: Pluralization) -> Self {
        Self::Plural(forms)
    }
}

/// Appends `key` to an optional key path prefix.
pub(crate) fn join_path(prefix: Option<&str>, key: &str, separator: &str) -> String {
    prefix.map_or_else(|| key.to_string(), |p| format!("{p}{separator}{key}"))
}
