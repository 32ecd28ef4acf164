//! Recursive message catalogs.
/// Structural and placeholder comparison between locales
mod compare;
/// `catalog!` authoring macro
mod macros;
/// Catalog node tree
mod node;

pub use compare::{
    DifferenceKind,
    PlaceholderDifference,
    StructuralDifference,
    compare_placeholders,
    compare_structure,
    find_flattened_key_collisions,
    find_unreachable_keys,
    has_same_shape,
};
pub use node::{
    CatalogNode,
    NodeKind,
};
pub(crate) use node::COUNT_PLACEHOLDER;
