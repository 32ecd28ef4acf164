//! Errors raised while resolving and rendering localized messages.

use thiserror::Error;

use crate::catalog::NodeKind;

/// Defines errors that may occur when looking up or rendering a message.
///
/// Every variant is a programmer or content defect. Nothing here is
/// transient, so callers should surface the error instead of retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocalizationError {
    /// The requested locale code is not one of the registered locales.
    #[error("Unknown locale: '{0}'")]
    UnknownLocale(String),
    /// A template references a placeholder the caller did not supply.
    #[error("Missing argument for placeholder '{{{{{0}}}}}'")]
    MissingPlaceholderArgument(String),
    /// No catalog node exists at the given key path.
    #[error("Unknown key path: '{0}'")]
    UnknownKeyPath(String),
    /// A node exists at the key path but is not the kind the caller asked for.
    #[error("Key path '{path}' is {found}, expected {expected}")]
    NodeKindMismatch {
        /// Dotted key path of the node.
        path: String,
        /// Kind the caller asked for.
        expected: NodeKind,
        /// Kind actually stored at the path.
        found: NodeKind,
    },
}
