//! Intermediate Representation (IR) of module metadata
//!
//! This module provides the descriptors a metadata source produces
//! (types, members, parameters, type references) and the registries that
//! track type references during generation.

pub mod module;
pub mod registry;
pub mod source;
pub mod symbol;
pub mod types;

pub use module::*;
pub use registry::*;
pub use source::*;
pub use symbol::*;
pub use types::*;
