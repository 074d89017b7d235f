//! Member and parameter metadata
//!
//! This module provides the descriptors for the members a type declares
//! (constructors, methods, properties, fields and events) and for their
//! parameters.

use crate::ir::TypeRef;
use serde::{Deserialize, Serialize};

/// Accessibility of a type or member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Visibility {
    /// Visible outside the module
    #[default]
    Public,
    /// Visible inside the module only
    Internal,
    /// Visible to derived types
    Protected,
    /// Visible to the declaring type only
    Private,
}

impl Visibility {
    /// Check if this is publicly visible
    pub fn is_public(&self) -> bool {
        matches!(self, Visibility::Public)
    }
}

/// How a parameter is passed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByRefModifier {
    /// Passed by value
    None,
    /// Passed by reference (`ref`)
    Ref,
    /// Passed by reference, written by the callee (`out`)
    Out,
}

impl ByRefModifier {
    /// Source prefix for this modifier, including the trailing space
    pub fn prefix(&self) -> &'static str {
        match self {
            ByRefModifier::None => "",
            ByRefModifier::Ref => "ref ",
            ByRefModifier::Out => "out ",
        }
    }
}

/// Parameter of a constructor, method or indexed property
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDescriptor {
    /// Parameter name
    pub name: String,
    /// Declared type (by-reference types are wrapped in [`TypeRef::ByRef`])
    #[serde(rename = "type")]
    pub ty: TypeRef,
    /// Zero-based position
    pub position: usize,
    /// Whether the callee writes the parameter (`[out]`)
    #[serde(default)]
    pub is_out: bool,
    /// Whether the parameter has a default value
    #[serde(default)]
    pub is_optional: bool,
    /// Whether the parameter describes the return value slot
    #[serde(default)]
    pub is_retval: bool,
}

impl ParameterDescriptor {
    /// Create a new by-value parameter
    pub fn new(name: impl Into<String>, ty: TypeRef, position: usize) -> Self {
        Self {
            name: name.into(),
            ty,
            position,
            is_out: false,
            is_optional: false,
            is_retval: false,
        }
    }

    /// Mark as written by the callee
    pub fn out(mut self) -> Self {
        self.is_out = true;
        self
    }

    /// Mark as optional
    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    /// Mark as the return value slot
    pub fn retval(mut self) -> Self {
        self.is_retval = true;
        self
    }

    /// Derive the by-reference modifier from the type and the out flag
    pub fn by_ref(&self) -> ByRefModifier {
        match (self.ty.is_by_ref(), self.is_out) {
            (false, _) => ByRefModifier::None,
            (true, true) => ByRefModifier::Out,
            (true, false) => ByRefModifier::Ref,
        }
    }
}

/// Kind-specific member payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MemberKind {
    /// Instance or static constructor
    Constructor,

    /// Ordinary method, accessor or operator overload
    Method {
        #[serde(rename = "returnType")]
        return_type: TypeRef,
        /// Carries the extension-method attribute
        #[serde(default)]
        extension: bool,
    },

    /// Property
    Property {
        #[serde(rename = "type")]
        ty: TypeRef,
        #[serde(default, rename = "canRead")]
        can_read: bool,
        #[serde(default, rename = "canWrite")]
        can_write: bool,
        #[serde(default, rename = "indexParameters")]
        index_parameters: Vec<ParameterDescriptor>,
    },

    /// Field, including enum constants
    Field {
        #[serde(rename = "type")]
        ty: TypeRef,
        /// Literal value of a constant field
        #[serde(default)]
        constant: Option<i64>,
    },

    /// Event
    Event {
        #[serde(rename = "handlerType")]
        handler: TypeRef,
    },
}

/// Coarse member category, in the order members are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MemberCategory {
    Constructor,
    Method,
    Property,
    Field,
    Event,
}

/// Metadata for a single declared member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDescriptor {
    /// Member name (metadata spelling, e.g. "op_Addition" or ".ctor")
    pub name: String,
    /// Accessibility
    #[serde(default)]
    pub visibility: Visibility,
    /// Static member
    #[serde(default)]
    pub is_static: bool,
    /// Overrides a base definition (for properties and events: via the getter/adder)
    #[serde(default)]
    pub is_override: bool,
    /// Compiler-synthesized name (accessor, operator, event hook)
    #[serde(default)]
    pub special_name: bool,
    /// Parameters (constructors and methods)
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
    /// Kind-specific payload
    #[serde(flatten)]
    pub kind: MemberKind,
}

impl MemberDescriptor {
    fn with_kind(name: impl Into<String>, kind: MemberKind) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            is_static: false,
            is_override: false,
            special_name: false,
            parameters: Vec::new(),
            kind,
        }
    }

    /// Create a public instance constructor
    pub fn constructor() -> Self {
        Self::with_kind(".ctor", MemberKind::Constructor)
    }

    /// Create a public instance method
    pub fn method(name: impl Into<String>, return_type: TypeRef) -> Self {
        Self::with_kind(
            name,
            MemberKind::Method {
                return_type,
                extension: false,
            },
        )
    }

    /// Create a public read-only instance property
    pub fn property(name: impl Into<String>, ty: TypeRef) -> Self {
        Self::with_kind(
            name,
            MemberKind::Property {
                ty,
                can_read: true,
                can_write: false,
                index_parameters: Vec::new(),
            },
        )
    }

    /// Create a public instance field
    pub fn field(name: impl Into<String>, ty: TypeRef) -> Self {
        Self::with_kind(name, MemberKind::Field { ty, constant: None })
    }

    /// Create a public static literal field (enum constant)
    pub fn constant(name: impl Into<String>, ty: TypeRef, value: i64) -> Self {
        Self::with_kind(
            name,
            MemberKind::Field {
                ty,
                constant: Some(value),
            },
        )
        .static_member()
    }

    /// Create a public instance event
    pub fn event(name: impl Into<String>, handler: TypeRef) -> Self {
        Self::with_kind(name, MemberKind::Event { handler })
    }

    /// Set accessibility
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Mark as static
    pub fn static_member(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Mark as overriding a base definition
    pub fn overriding(mut self) -> Self {
        self.is_override = true;
        self
    }

    /// Mark as compiler-synthesized
    pub fn special(mut self) -> Self {
        self.special_name = true;
        self
    }

    /// Add a parameter (position assigned from the current count)
    pub fn param(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        let position = self.parameters.len();
        self.parameters
            .push(ParameterDescriptor::new(name, ty, position));
        self
    }

    /// Add a fully described parameter
    pub fn with_param(mut self, param: ParameterDescriptor) -> Self {
        self.parameters.push(param);
        self
    }

    /// Mark a method as an extension method
    pub fn extension(mut self) -> Self {
        if let MemberKind::Method { extension, .. } = &mut self.kind {
            *extension = true;
        }
        self
    }

    /// Make a property writable
    pub fn writable(mut self) -> Self {
        if let MemberKind::Property { can_write, .. } = &mut self.kind {
            *can_write = true;
        }
        self
    }

    /// Add an index parameter to a property
    pub fn indexed_by(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        if let MemberKind::Property {
            index_parameters, ..
        } = &mut self.kind
        {
            let position = index_parameters.len();
            index_parameters.push(ParameterDescriptor::new(name, ty, position));
        }
        self
    }

    /// Check if this member is publicly visible
    pub fn is_public(&self) -> bool {
        self.visibility.is_public()
    }

    /// Emission category of this member
    pub fn category(&self) -> MemberCategory {
        match self.kind {
            MemberKind::Constructor => MemberCategory::Constructor,
            MemberKind::Method { .. } => MemberCategory::Method,
            MemberKind::Property { .. } => MemberCategory::Property,
            MemberKind::Field { .. } => MemberCategory::Field,
            MemberKind::Event { .. } => MemberCategory::Event,
        }
    }

    /// Whether the first parameter is an extension receiver
    pub fn is_extension(&self) -> bool {
        matches!(self.kind, MemberKind::Method { extension: true, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_ref_modifier() {
        let int = TypeRef::system("Int32");

        let by_value = ParameterDescriptor::new("value", int.clone(), 0);
        assert_eq!(by_value.by_ref(), ByRefModifier::None);

        let by_ref = ParameterDescriptor::new("value", TypeRef::by_ref(int.clone()), 0);
        assert_eq!(by_ref.by_ref(), ByRefModifier::Ref);
        assert_eq!(by_ref.out().by_ref(), ByRefModifier::Out);

        // An out flag without a by-ref type is still passed by value
        let odd = ParameterDescriptor::new("value", int, 0).out();
        assert_eq!(odd.by_ref(), ByRefModifier::None);
    }

    #[test]
    fn test_member_builders() {
        let method = MemberDescriptor::method("Clamp", TypeRef::system("Int32"))
            .static_member()
            .extension()
            .param("value", TypeRef::system("Int32"))
            .param("max", TypeRef::system("Int32"));

        assert_eq!(method.category(), MemberCategory::Method);
        assert!(method.is_extension());
        assert_eq!(method.parameters[1].position, 1);

        let item = MemberDescriptor::property("Item", TypeRef::system("Int32"))
            .indexed_by("index", TypeRef::system("Int32"));
        match item.kind {
            MemberKind::Property {
                index_parameters, ..
            } => assert_eq!(index_parameters.len(), 1),
            _ => panic!("expected property"),
        }
    }

    #[test]
    fn test_member_json_shape() {
        let json = r#"{
            "name": "Close",
            "kind": "method",
            "returnType": { "form": "void" },
            "parameters": []
        }"#;
        let member: MemberDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(member.name, "Close");
        assert!(member.is_public());
        assert!(!member.is_extension());
    }
}
