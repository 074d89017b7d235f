//! Source generation for module surfaces
//!
//! This module provides:
//! - The buffered output sink (writer)
//! - Signature formatting rules (format)
//! - Placeholder declarations for foreign types (placeholder)
//! - The per-module surface generator (surface)

pub mod format;
pub mod placeholder;
pub mod surface;
pub mod writer;

pub use format::{declared_name, operator_spelling, OperatorSpelling, SignatureFormatter, Site};
pub use placeholder::{placeholder_declaration, RUNTIME_BRIDGE_MODULE};
pub use surface::{document_member, ModuleSurface, SurfaceGenerator, DEFAULT_HEADER};
pub use writer::CodeWriter;
