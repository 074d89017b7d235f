//! Placeholder declarations for referenced foreign types
//!
//! A generated surface only compiles if every type it mentions exists. Types
//! that come from reference modules are satisfied with empty one-line
//! declarations. Each foreign identity is stubbed once per run; the
//! [`PlaceholderRegistry`] remembers which ones were already written.

use crate::ir::{
    generic_name, positional_params, MetadataSource, PlaceholderRegistry, SeenTypeSet,
    TypeIdentity, TypeKind,
};

/// Module the runtime maps some foreign types onto; its types always count as foreign
pub const RUNTIME_BRIDGE_MODULE: &str = "System.Runtime.WindowsRuntime";

/// Seen identities that still need a placeholder, in first-seen order
pub fn placeholder_candidates<S>(
    seen: &SeenTypeSet,
    registry: &PlaceholderRegistry,
    source: &S,
) -> Vec<TypeIdentity>
where
    S: MetadataSource + ?Sized,
{
    seen.iter()
        .filter(|identity| identity.module == RUNTIME_BRIDGE_MODULE || source.is_foreign(identity))
        .filter(|identity| !registry.contains(identity))
        .cloned()
        .collect()
}

/// Name a placeholder is declared under (`IAsyncOperation<T0>`)
pub fn placeholder_name(identity: &TypeIdentity) -> String {
    if identity.is_generic() {
        generic_name(&identity.name, positional_params(identity.arity()))
    } else {
        identity.name.clone()
    }
}

/// One-line empty declaration for a foreign type
pub fn placeholder_declaration(identity: &TypeIdentity) -> String {
    let name = placeholder_name(identity);

    match identity.kind {
        TypeKind::Delegate => format!("public delegate void {}();", name),
        TypeKind::Enum => format!("public enum {} {{ }}", name),
        TypeKind::Struct => format!("public struct {} {{ }}", name),
        TypeKind::Interface => format!("public interface {} {{ }}", name),
        TypeKind::Class => format!(
            "public class {} {{ internal {}() {{ }} }}",
            name,
            identity.simple_name()
        ),
    }
}
