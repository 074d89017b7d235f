//! Surface-Gen: API surface projection for compiled module metadata
//!
//! This crate turns the public type metadata of a compiled module into
//! declaration-only C# source. Every type, member and signature is kept;
//! every body is replaced by a stub. Types referenced from other modules are
//! satisfied with one-line placeholder declarations, so the generated file
//! compiles on its own.
//!
//! # Architecture
//!
//! - `ir`: Descriptors for types, members and type references, plus the
//!   metadata source they come from
//! - `codegen`: Signature formatting, surface generation and placeholders
//! - `validate`: Non-fatal checks on a module's public types
//! - `context`: State carried across the modules of one run
//!
//! # Usage
//!
//! ```rust,ignore
//! use surface_gen::{JsonMetadataSource, RunContext, SurfaceGenerator};
//!
//! let source = JsonMetadataSource::from_json(&json)?;
//! let mut context = RunContext::new();
//!
//! let surface = SurfaceGenerator::new(&source, context.registry()).generate()?;
//! std::fs::write(format!("{}.cs", surface.module), &surface.source)?;
//! context.commit(&surface);
//! ```

pub mod codegen;
pub mod context;
pub mod error;
pub mod ir;
pub mod validate;

// Re-export commonly used types
pub use codegen::{CodeWriter, ModuleSurface, SignatureFormatter, SurfaceGenerator};
pub use context::RunContext;
pub use error::{ParameterProblem, SurfaceError, SurfaceResult, TypeShapeProblem};
pub use ir::{
    JsonMetadataSource, MemberDescriptor, MemberKind, MetadataSource, ModuleMetadata, NamedType,
    PlaceholderRegistry, SeenTypeSet, TypeDescriptor, TypeIdentity, TypeKind, TypeRef, TypeShape,
};
pub use validate::{validate_public_types, ValidationWarning};
