//! Compiled-in message content, one module per locale.
//!
//! Every locale must have the same key tree as `en`; the lint binary and
//! the parity tests enforce this.

mod de;
mod en;

use crate::catalog::CatalogNode;
use crate::locale::LocaleCode;

/// Builds the message tree of `locale`.
pub(crate) fn catalog(locale: LocaleCode) -> CatalogNode {
    match locale {
        LocaleCode::En => en::catalog(),
        LocaleCode::De => de::catalog(),
    }
}
