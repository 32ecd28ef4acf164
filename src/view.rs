//! Per-locale accessor trees over a catalog.
//!
//! [`project`] maps a [`CatalogNode`] tree onto a [`ViewNode`] tree with the
//! same keys, replacing every leaf by a renderer that borrows the leaf's
//! content. Projection is pure. Projecting the same catalog twice gives
//! views that render identical strings for identical inputs.

use std::collections::HashMap;

use crate::catalog::{
    COUNT_PLACEHOLDER,
    CatalogNode,
    NodeKind,
};
use crate::error::LocalizationError;
use crate::locale::LocaleCode;
use crate::plural::Pluralization;
use crate::template;

/// Renders a plain leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRenderer<'a> {
    /// Template of the leaf.
    template: &'a str,
}

impl<'a> ValueRenderer<'a> {
    /// Returns the unrendered template.
    #[must_use]
    pub const fn template(&self) -> &'a str {
        self.template
    }

    /// Substitutes `args` into the template.
    ///
    /// # Errors
    /// `MissingPlaceholderArgument` if the template names an absent argument.
    #[allow(clippy::implicit_hasher)]
    pub fn render(&self, args: &HashMap<String, String>) -> Result<String, LocalizationError> {
        template::render(self.template, args)
    }
}

/// Renders a plural leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluralRenderer<'a> {
    /// Variants of the leaf.
    forms: &'a Pluralization,
}

impl<'a> PluralRenderer<'a> {
    /// Returns the underlying variants.
    #[must_use]
    pub const fn forms(&self) -> &'a Pluralization {
        self.forms
    }

    /// Selects the variant for `count` and substitutes `args` into it.
    ///
    /// `{{count}}` always renders as the decimal `count`, even when `args`
    /// carries its own `count` entry.
    ///
    /// # Errors
    /// `MissingPlaceholderArgument` if the selected variant names an absent
    /// argument other than `count`.
    #[allow(clippy::implicit_hasher)]
    pub fn render(
        &self,
        count: i64,
        args: &HashMap<String, String>,
    ) -> Result<String, LocalizationError> {
        let count_text = count.to_string();
        template::render_with(self.forms.select(count), |name| {
            if name == COUNT_PLACEHOLDER {
                Some(count_text.as_str())
            } else {
                args.get(name).map(String::as_str)
            }
        })
    }
}

/// A node of a localized accessor tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewNode<'a> {
    /// Named children.
    Interior(HashMap<&'a str, ViewNode<'a>>),
    /// A plain leaf.
    Value(ValueRenderer<'a>),
    /// A plural leaf.
    Plural(PluralRenderer<'a>),
}

impl ViewNode<'_> {
    /// Returns the kind of catalog node this was projected from.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Interior(_) => NodeKind::Interior,
            Self::Value(_) => NodeKind::PlainLeaf,
            Self::Plural(_) => NodeKind::PluralLeaf,
        }
    }

    /// Returns the direct child named `key`.
    #[must_use]
    pub fn child(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Interior(children) => children.get(key),
            Self::Value(_) | Self::Plural(_) => None,
        }
    }
}

/// Projects a catalog tree onto an accessor tree.
#[must_use]
pub fn project(node: &CatalogNode) -> ViewNode<'_> {
    match node {
        CatalogNode::Interior(children) => ViewNode::Interior(
            children.iter().map(|(key, child)| (key.as_str(), project(child))).collect(),
        ),
        CatalogNode::Plain(template) => ViewNode::Value(ValueRenderer { template }),
        CatalogNode::Plural(forms) => ViewNode::Plural(PluralRenderer { forms }),
    }
}

/// The accessor tree of one locale, navigable by key path.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use fines_l10n::CatalogRegistry;
///
/// let view = CatalogRegistry::shared().get("en").unwrap();
/// let text = view.render_plural("fine.overview.open_count", 3, &HashMap::new()).unwrap();
///
/// assert_eq!(text, "3 open fines");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedView<'a> {
    /// Locale this view renders.
    locale: LocaleCode,
    /// Separator between keys in a path.
    key_separator: &'a str,
    /// Projected catalog root.
    root: ViewNode<'a>,
}

impl<'a> LocalizedView<'a> {
    /// Projects `catalog` for `locale`. `key_separator` must be non-empty;
    /// views are handed out by [`CatalogRegistry::get`], which validates it.
    ///
    /// [`CatalogRegistry::get`]: crate::CatalogRegistry::get
    #[must_use]
    pub(crate) fn new(locale: LocaleCode, catalog: &'a CatalogNode, key_separator: &'a str) -> Self {
        Self { locale, key_separator, root: project(catalog) }
    }

    /// Returns the locale of this view.
    #[must_use]
    pub const fn locale(&self) -> LocaleCode {
        self.locale
    }

    /// Returns the root of the accessor tree.
    #[must_use]
    pub const fn root(&self) -> &ViewNode<'a> {
        &self.root
    }

    /// Resolves `path` to a node. The empty path is the root.
    ///
    /// # Errors
    /// `UnknownKeyPath` if no node exists at `path`.
    pub fn node(&self, path: &str) -> Result<&ViewNode<'a>, LocalizationError> {
        let found = if path.is_empty() {
            Some(&self.root)
        } else {
            path.split(self.key_separator).try_fold(&self.root, |node, key| node.child(key))
        };
        found.ok_or_else(|| {
            tracing::debug!(locale = %self.locale, path, "Unknown key path");
            LocalizationError::UnknownKeyPath(path.to_string())
        })
    }

    /// Resolves `path` to a plain leaf renderer.
    ///
    /// # Errors
    /// `UnknownKeyPath`, or `NodeKindMismatch` if the node is not a plain leaf.
    pub fn value(&self, path: &str) -> Result<ValueRenderer<'a>, LocalizationError> {
        match self.node(path)? {
            ViewNode::Value(renderer) => Ok(*renderer),
            other => Err(kind_mismatch(path, NodeKind::PlainLeaf, other.kind())),
        }
    }

    /// Resolves `path` to a plural leaf renderer.
    ///
    /// # Errors
    /// `UnknownKeyPath`, or `NodeKindMismatch` if the node is not a plural leaf.
    pub fn plural(&self, path: &str) -> Result<PluralRenderer<'a>, LocalizationError> {
        match self.node(path)? {
            ViewNode::Plural(renderer) => Ok(*renderer),
            other => Err(kind_mismatch(path, NodeKind::PluralLeaf, other.kind())),
        }
    }

    /// Renders the plain leaf at `path`.
    ///
    /// # Errors
    /// See [`Self::value`] and [`ValueRenderer::render`].
    #[allow(clippy::implicit_hasher)]
    pub fn render(
        &self,
        path: &str,
        args: &HashMap<String, String>,
    ) -> Result<String, LocalizationError> {
        self.value(path)?.render(args)
    }

    /// Renders the plural leaf at `path` for `count`.
    ///
    /// # Errors
    /// See [`Self::plural`] and [`PluralRenderer::render`].
    #[allow(clippy::implicit_hasher)]
    pub fn render_plural(
        &self,
        path: &str,
        count: i64,
        args: &HashMap<String, String>,
    ) -> Result<String, LocalizationError> {
        self.plural(path)?.render(count, args)
    }
}

/// Builds a `NodeKindMismatch` error.
fn kind_mismatch(path: &str, expected: NodeKind, found: NodeKind) -> LocalizationError {
    tracing::debug!(path, %expected, %found, "Key path resolved to unexpected node kind");
    LocalizationError::NodeKindMismatch { path: path.to_string(), expected, found }
}
