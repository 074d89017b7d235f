//! surface-docs: Extraction runs and cross-reference documentation
//!
//! This crate drives surface extraction over a set of module documents:
//! - Loading module metadata documents (JSON) and the run configuration (TOML)
//! - Generating each module's surface with surface-gen
//! - Writing `<Module>.cs` and `<Module>.placeholders.xml`
//! - Writing the run-scoped `PlaceholderNamespaces.xml`
//! - Collecting warnings and errors for the end-of-run summary
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌──────────────────┐
//! │ module.json     │    │ surface.toml     │
//! │ (metadata)      │    │ (ExtractConfig)  │
//! └────────┬────────┘    └────────┬─────────┘
//!          │                      │
//!          └──────────┬───────────┘
//!                     ▼
//!              ┌──────────────┐
//!              │  Extractor   │
//!              └──────┬───────┘
//!                     │
//!          ┌──────────┴──────────┐
//!          ▼                     ▼
//!    ┌──────────┐       ┌──────────────────┐
//!    │ Module.cs│       │ placeholders.xml │
//!    └──────────┘       └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use surface_docs::{ExtractConfig, Extractor};
//!
//! let mut extractor = Extractor::new(ExtractConfig::new("generated"));
//! let output = extractor
//!     .run(&["metadata".into()])
//!     .expect("Failed to extract surfaces");
//! println!("{} modules", output.modules.len());
//! ```

pub mod config;
pub mod crossref;
pub mod diagnostics;
pub mod extractor;
pub mod xml;

// Re-exports for convenience
pub use config::ExtractConfig;
pub use crossref::{
    placeholder_namespace_docs, placeholder_type_docs, DocUrlResolver, DEFAULT_DOC_URL_BASE,
    PLACEHOLDER_NAMESPACES_FILE,
};
pub use diagnostics::{Diagnostic, DiagnosticSeverity, DiagnosticsCollector, ExtractError, ExtractResult};
pub use extractor::{discover_inputs, ExtractOutput, Extractor, ModuleArtifacts};
pub use xml::{XmlDocument, XmlElement};
