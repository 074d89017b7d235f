//! Type and module metadata
//!
//! This module provides the [`TypeDescriptor`] for every type a module
//! declares and the [`ModuleMetadata`] document that groups them.
//!
//! The shape of a type (enum, struct, interface, class or delegate) is a
//! closed variant decided once when the descriptor is built; generation code
//! pattern-matches on it instead of re-deriving it from trait queries.

use crate::ir::{arity_of, MemberCategory, MemberDescriptor, MemberKind, TypeKind, TypeRef, Visibility};
use serde::{Deserialize, Serialize};

/// Kind-specific facts about a declared type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TypeShape {
    /// Enumeration
    Enum {
        /// Integral type backing the enumeration
        underlying: TypeRef,
        /// Carries the flags attribute
        #[serde(default)]
        flags: bool,
    },

    /// Value type
    Struct,

    /// Interface
    Interface,

    /// Reference type
    Class {
        #[serde(default)]
        sealed: bool,
        /// Abstract + sealed is how metadata spells a static class
        #[serde(default, rename = "abstract")]
        is_abstract: bool,
    },

    /// Delegate
    Delegate,
}

impl TypeShape {
    /// Data-free kind of this shape
    pub fn kind(&self) -> TypeKind {
        match self {
            TypeShape::Enum { .. } => TypeKind::Enum,
            TypeShape::Struct => TypeKind::Struct,
            TypeShape::Interface => TypeKind::Interface,
            TypeShape::Class { .. } => TypeKind::Class,
            TypeShape::Delegate => TypeKind::Delegate,
        }
    }
}

/// A type declared inside another type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedType {
    /// Simple name
    pub name: String,
    /// Accessibility
    #[serde(default)]
    pub visibility: Visibility,
}

/// Metadata for a type declared by a module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    /// Simple metadata name
    pub name: String,
    /// Namespace
    pub namespace: String,
    /// Accessibility
    #[serde(default)]
    pub visibility: Visibility,
    /// Number of generic parameters
    #[serde(default)]
    pub generic_arity: usize,
    /// Kind-specific facts
    #[serde(flatten)]
    pub shape: TypeShape,
    /// Declared base type
    #[serde(default)]
    pub base_type: Option<TypeRef>,
    /// Declared interfaces
    #[serde(default)]
    pub interfaces: Vec<TypeRef>,
    /// Declared members, in declaration order
    #[serde(default)]
    pub members: Vec<MemberDescriptor>,
    /// Declared nested types
    #[serde(default)]
    pub nested_types: Vec<NestedType>,
}

impl TypeDescriptor {
    /// Create a new public type with no members
    pub fn new(namespace: impl Into<String>, name: impl Into<String>, shape: TypeShape) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            visibility: Visibility::Public,
            generic_arity: 0,
            shape,
            base_type: None,
            interfaces: Vec::new(),
            members: Vec::new(),
            nested_types: Vec::new(),
        }
    }

    /// Create a public enum
    pub fn enumeration(
        namespace: impl Into<String>,
        name: impl Into<String>,
        underlying: TypeRef,
    ) -> Self {
        Self::new(
            namespace,
            name,
            TypeShape::Enum {
                underlying,
                flags: false,
            },
        )
    }

    /// Create a public struct
    pub fn structure(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(namespace, name, TypeShape::Struct)
    }

    /// Create a public interface
    pub fn interface(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(namespace, name, TypeShape::Interface)
    }

    /// Create a public sealed class
    pub fn sealed_class(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(
            namespace,
            name,
            TypeShape::Class {
                sealed: true,
                is_abstract: false,
            },
        )
    }

    /// Create a public static class
    pub fn static_class(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(
            namespace,
            name,
            TypeShape::Class {
                sealed: true,
                is_abstract: true,
            },
        )
    }

    /// Mark an enum as a flags enum
    pub fn flags(mut self) -> Self {
        if let TypeShape::Enum { flags, .. } = &mut self.shape {
            *flags = true;
        }
        self
    }

    /// Set accessibility
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Set the base type
    pub fn with_base(mut self, base: TypeRef) -> Self {
        self.base_type = Some(base);
        self
    }

    /// Add an implemented interface
    pub fn implements(mut self, interface: TypeRef) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Add a member
    pub fn member(mut self, member: MemberDescriptor) -> Self {
        self.members.push(member);
        self
    }

    /// Add a nested type
    pub fn nested(mut self, name: impl Into<String>, visibility: Visibility) -> Self {
        self.nested_types.push(NestedType {
            name: name.into(),
            visibility,
        });
        self
    }

    /// Check if this type is publicly visible
    pub fn is_public(&self) -> bool {
        self.visibility.is_public()
    }

    /// Data-free kind
    pub fn kind(&self) -> TypeKind {
        self.shape.kind()
    }

    /// Arity encoded in the metadata name, zero when there is no marker
    pub fn name_arity(&self) -> usize {
        arity_of(&self.name)
    }

    /// Fully qualified metadata name
    pub fn full_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    /// Members of one category, in declaration order
    pub fn members_of(&self, category: MemberCategory) -> impl Iterator<Item = &MemberDescriptor> {
        self.members
            .iter()
            .filter(move |member| member.category() == category)
    }

    /// Check if any public constructor is declared
    pub fn has_public_constructor(&self) -> bool {
        self.members
            .iter()
            .any(|member| matches!(member.kind, MemberKind::Constructor) && member.is_public())
    }
}

/// Serialized metadata for one module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleMetadata {
    /// Module (assembly) name
    pub name: String,
    /// Reference modules; types they define are foreign
    #[serde(default)]
    pub references: Vec<String>,
    /// Every type the module declares
    #[serde(default)]
    pub types: Vec<TypeDescriptor>,
}

impl ModuleMetadata {
    /// Create an empty module
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            references: Vec::new(),
            types: Vec::new(),
        }
    }

    /// Add a reference module
    pub fn reference(mut self, module: impl Into<String>) -> Self {
        self.references.push(module.into());
        self
    }

    /// Add a declared type
    pub fn type_def(mut self, ty: TypeDescriptor) -> Self {
        self.types.push(ty);
        self
    }

    /// Parse a module document from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
