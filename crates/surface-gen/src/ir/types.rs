//! Type references for surface generation
//!
//! This module provides the representation of types as they appear in member
//! signatures, base lists and generic argument lists of module metadata.
//!
//! # Naming
//!
//! Named types carry their *metadata name*: generic definitions keep the
//! arity marker that compiled metadata puts on them, so the two-argument
//! handler type is named ``TypedEventHandler`2``. Rendering always replaces
//! that marker with an explicit argument list:
//!
//! | Metadata | Rendered |
//! |----------|----------|
//! | `System.Int32` | `global::System.Int32` |
//! | ``Windows.Foundation.IAsyncOperation`1`` of `Size` | `global::Windows.Foundation.IAsyncOperation<global::Windows.Foundation.Size>` |
//! | `System.Void` | `void` |
//!
//! # Identities
//!
//! A [`TypeIdentity`] is the unbound definition behind a reference. Every
//! instantiation of ``IAsyncOperation`1`` maps to the same identity, which
//! is what the seen-type set and the placeholder registry track.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker separating a generic definition's name from its arity
pub const ARITY_MARKER: char = '`';

/// The five kinds of type a module can declare or reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Enum,
    Struct,
    Interface,
    Class,
    Delegate,
}

impl TypeKind {
    /// Keyword used when declaring a type of this kind
    pub fn keyword(&self) -> &'static str {
        match self {
            TypeKind::Enum => "enum",
            TypeKind::Struct => "struct",
            TypeKind::Interface => "interface",
            TypeKind::Class => "class",
            TypeKind::Delegate => "delegate",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// A reference to a type from a signature, base list or generic argument
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "form", rename_all = "camelCase")]
pub enum TypeRef {
    /// The unit/void type
    Void,

    /// A named type, possibly a generic instantiation
    Named(NamedType),

    /// By-reference wrapper (ref/out parameters)
    ByRef { element: Box<TypeRef> },

    /// Raw pointer; never representable on the surface
    Pointer { element: Box<TypeRef> },
}

impl TypeRef {
    /// Create a by-reference wrapper
    pub fn by_ref(element: TypeRef) -> Self {
        TypeRef::ByRef {
            element: Box::new(element),
        }
    }

    /// Create a pointer wrapper
    pub fn pointer(element: TypeRef) -> Self {
        TypeRef::Pointer {
            element: Box::new(element),
        }
    }

    /// Create a reference to a core library value type (e.g. `Int32`)
    pub fn system(name: &str) -> Self {
        TypeRef::Named(NamedType::new("System", name, CORE_LIBRARY, TypeKind::Struct))
    }

    /// Create a reference to a core library reference type (e.g. `String`)
    pub fn system_class(name: &str) -> Self {
        TypeRef::Named(NamedType::new("System", name, CORE_LIBRARY, TypeKind::Class))
    }

    /// Check if this is a by-reference type
    pub fn is_by_ref(&self) -> bool {
        matches!(self, TypeRef::ByRef { .. })
    }

    /// Get the named type, if this is one
    pub fn as_named(&self) -> Option<&NamedType> {
        match self {
            TypeRef::Named(named) => Some(named),
            _ => None,
        }
    }

    /// Check if this reference is publicly visible.
    ///
    /// Wrappers are as visible as their element; void is always visible.
    pub fn is_public(&self) -> bool {
        match self {
            TypeRef::Void => true,
            TypeRef::Named(named) => named.public,
            TypeRef::ByRef { element } | TypeRef::Pointer { element } => element.is_public(),
        }
    }

    /// Metadata-style display name, used in diagnostics
    pub fn display_name(&self) -> String {
        match self {
            TypeRef::Void => "System.Void".to_string(),
            TypeRef::Named(named) => named.full_name(),
            TypeRef::ByRef { element } => format!("{}&", element.display_name()),
            TypeRef::Pointer { element } => format!("{}*", element.display_name()),
        }
    }
}

impl From<NamedType> for TypeRef {
    fn from(named: NamedType) -> Self {
        TypeRef::Named(named)
    }
}

/// Name of the core library module that owns `System` primitives
pub const CORE_LIBRARY: &str = "mscorlib";

fn default_public() -> bool {
    true
}

/// A named type reference with optional generic arguments
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedType {
    /// Namespace (e.g., "Windows.Foundation")
    pub namespace: String,
    /// Metadata name, including the arity marker for generics
    pub name: String,
    /// Name of the module that defines the type
    pub module: String,
    /// Kind of the referenced type
    pub kind: TypeKind,
    /// Whether the referenced type is publicly visible
    #[serde(default = "default_public")]
    pub public: bool,
    /// Generic arguments of an instantiation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generic_args: Vec<TypeRef>,
}

impl NamedType {
    /// Create a new non-generic named type
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        module: impl Into<String>,
        kind: TypeKind,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            module: module.into(),
            kind,
            public: true,
            generic_args: Vec::new(),
        }
    }

    /// Set generic arguments
    pub fn with_args(mut self, args: Vec<TypeRef>) -> Self {
        self.generic_args = args;
        self
    }

    /// Mark as not publicly visible
    pub fn non_public(mut self) -> Self {
        self.public = false;
        self
    }

    /// Check if this is a generic instantiation
    pub fn is_generic(&self) -> bool {
        !self.generic_args.is_empty()
    }

    /// Fully qualified metadata name (e.g., "Windows.Foundation.IAsyncOperation`1")
    pub fn full_name(&self) -> String {
        qualify(&self.namespace, &self.name)
    }

    /// Unbound identity of this reference
    pub fn identity(&self) -> TypeIdentity {
        TypeIdentity {
            namespace: self.namespace.clone(),
            name: self.name.clone(),
            module: self.module.clone(),
            kind: self.kind,
        }
    }
}

/// Unbound identity of a named type, independent of generic arguments
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeIdentity {
    /// Namespace
    pub namespace: String,
    /// Metadata name, including the arity marker for generics
    pub name: String,
    /// Defining module
    pub module: String,
    /// Kind
    pub kind: TypeKind,
}

impl TypeIdentity {
    /// Fully qualified metadata name
    pub fn full_name(&self) -> String {
        qualify(&self.namespace, &self.name)
    }

    /// Name without the arity marker
    pub fn simple_name(&self) -> &str {
        strip_arity(&self.name)
    }

    /// Number of generic parameters
    pub fn arity(&self) -> usize {
        arity_of(&self.name)
    }

    /// Check if this identity is a generic definition
    pub fn is_generic(&self) -> bool {
        self.arity() > 0
    }
}

impl fmt::Display for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name())
    }
}

fn qualify(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", namespace, name)
    }
}

/// Remove the arity marker from a metadata name ("IVector`1" -> "IVector")
pub fn strip_arity(name: &str) -> &str {
    name.split_once(ARITY_MARKER)
        .map(|(base, _)| base)
        .unwrap_or(name)
}

/// Arity encoded in a metadata name, zero when there is no marker
pub fn arity_of(name: &str) -> usize {
    name.split_once(ARITY_MARKER)
        .and_then(|(_, arity)| arity.parse().ok())
        .unwrap_or(0)
}

/// Join a (marker-free) base name with rendered generic arguments
pub fn generic_name<I, S>(base: &str, args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();
    format!("{}<{}>", strip_arity(base), args.join(", "))
}

/// Positional type parameter names for a generic definition (`T0`, `T1`, ...)
pub fn positional_params(arity: usize) -> impl Iterator<Item = String> {
    (0..arity).map(|i| format!("T{}", i))
}

/// Enum underlying types that can be projected, keyed by metadata full name
const ENUM_UNDERLYING: &[(&str, &str)] = &[("System.Int32", "int"), ("System.UInt32", "uint")];

/// Keyword for an allowed enum underlying type
pub fn enum_underlying_keyword(ty: &TypeRef) -> Option<&'static str> {
    let full_name = ty.as_named()?.full_name();
    ENUM_UNDERLYING
        .iter()
        .find(|(name, _)| *name == full_name)
        .map(|(_, keyword)| *keyword)
}
