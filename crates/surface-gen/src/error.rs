//! Error types for surface generation
//!
//! Every structural problem found while projecting metadata onto source text
//! is fatal for the module being generated. Each variant names the offending
//! type (and member, where there is one) so the run driver can report exactly
//! what has to be fixed upstream.

use thiserror::Error;

/// Result type for surface generation
pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Why a type cannot be projected onto the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeShapeProblem {
    /// The type declares a public nested type
    NestedPublicType,
    /// Delegates and anything else that is not an enum, struct, interface or class
    UnknownKind,
    /// Public classes are expected to be sealed
    NotSealed,
    /// A member signature uses a raw pointer type
    PointerType,
}

impl std::fmt::Display for TypeShapeProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeShapeProblem::NestedPublicType => write!(f, "nested public types are not supported"),
            TypeShapeProblem::UnknownKind => write!(f, "unknown type shape"),
            TypeShapeProblem::NotSealed => {
                write!(f, "unexpected design: public classes must be sealed")
            }
            TypeShapeProblem::PointerType => write!(f, "pointer types are not supported"),
        }
    }
}

/// Why a parameter (or parameter-like construct) cannot be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterProblem {
    /// Parameter marked as the return value slot
    ReturnValue,
    /// Optional parameter; the surface format has no notation for defaults
    Optional,
    /// Property declared with index parameters
    IndexedProperty,
}

impl std::fmt::Display for ParameterProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterProblem::ReturnValue => write!(f, "return-value parameters are not supported"),
            ParameterProblem::Optional => write!(f, "optional parameters are not supported"),
            ParameterProblem::IndexedProperty => write!(f, "indexed properties are not supported"),
        }
    }
}

/// Fatal conditions raised while generating a module surface
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// Type shape outside the supported projection
    #[error("unsupported type shape in {type_name}: {problem}")]
    UnsupportedTypeShape {
        type_name: String,
        problem: TypeShapeProblem,
    },

    /// Parameter shape outside the supported projection
    #[error("unsupported parameter shape in {site}: {problem}")]
    UnsupportedParameter {
        site: String,
        problem: ParameterProblem,
    },

    /// Compiler-synthesized method with an unrecognized name
    #[error("unrecognized special method '{method}' in {type_name}")]
    UnknownSpecialMethod { type_name: String, method: String },

    /// Enum backed by something other than a 32-bit integer
    #[error("enum {type_name} has unsupported underlying type {underlying}")]
    UnmappedEnumUnderlying {
        type_name: String,
        underlying: String,
    },

    /// Static constructors have no place in a declaration-only surface
    #[error("static constructors are not supported ({type_name})")]
    StaticConstructor { type_name: String },

    /// Declared arity disagrees with the arity marker in the type's name
    #[error("generic type {type_name} declares {declared} parameter(s) but its name encodes {encoded}")]
    GenericArityMismatch {
        type_name: String,
        declared: usize,
        encoded: usize,
    },

    /// Generic foreign type without a documentation URL mapping
    #[error("no documentation URL for generic type {type_name}; add a mapping")]
    UnmappedGenericDocUrl { type_name: String },
}

impl SurfaceError {
    /// Create a type shape error
    pub fn shape(type_name: impl Into<String>, problem: TypeShapeProblem) -> Self {
        SurfaceError::UnsupportedTypeShape {
            type_name: type_name.into(),
            problem,
        }
    }

    /// Create a parameter shape error
    pub fn parameter(site: impl Into<String>, problem: ParameterProblem) -> Self {
        SurfaceError::UnsupportedParameter {
            site: site.into(),
            problem,
        }
    }

    /// Create an unrecognized special method error
    pub fn special_method(type_name: impl Into<String>, method: impl Into<String>) -> Self {
        SurfaceError::UnknownSpecialMethod {
            type_name: type_name.into(),
            method: method.into(),
        }
    }
}
