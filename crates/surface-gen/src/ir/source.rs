//! Metadata sources
//!
//! The generator never loads binaries itself. A [`MetadataSource`] hands it
//! the public types of one module and answers whether a referenced type is
//! foreign, i.e. defined by one of the module's reference modules.
//!
//! [`JsonMetadataSource`] reads the [`ModuleMetadata`] documents an upstream
//! metadata dumper writes.

use crate::ir::{ModuleMetadata, TypeDescriptor, TypeIdentity};
use indexmap::IndexSet;

/// Supplier of module metadata
pub trait MetadataSource {
    /// Name of the module being described
    fn module_name(&self) -> &str;

    /// Types the module declares with public visibility, in declaration order
    fn public_types(&self) -> Vec<&TypeDescriptor>;

    /// Whether a referenced type originates from a reference module
    fn is_foreign(&self, identity: &TypeIdentity) -> bool;
}

/// Metadata source backed by a deserialized module document
#[derive(Debug, Clone)]
pub struct JsonMetadataSource {
    metadata: ModuleMetadata,
    foreign_modules: IndexSet<String>,
}

impl JsonMetadataSource {
    /// Create a source from an already parsed document
    pub fn new(metadata: ModuleMetadata) -> Self {
        let foreign_modules = metadata.references.iter().cloned().collect();
        Self {
            metadata,
            foreign_modules,
        }
    }

    /// Parse a module document
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        ModuleMetadata::from_json(json).map(Self::new)
    }

    /// Treat additional modules as reference modules
    pub fn with_references<I, S>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.foreign_modules
            .extend(modules.into_iter().map(Into::into));
        self
    }

    /// Underlying document
    pub fn metadata(&self) -> &ModuleMetadata {
        &self.metadata
    }
}

impl MetadataSource for JsonMetadataSource {
    fn module_name(&self) -> &str {
        &self.metadata.name
    }

    fn public_types(&self) -> Vec<&TypeDescriptor> {
        self.metadata
            .types
            .iter()
            .filter(|ty| ty.is_public())
            .collect()
    }

    fn is_foreign(&self, identity: &TypeIdentity) -> bool {
        identity.module != self.metadata.name && self.foreign_modules.contains(&identity.module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{NamedType, TypeKind, Visibility};

    #[test]
    fn test_public_types_filtered() {
        let module = ModuleMetadata::new("Demo")
            .type_def(TypeDescriptor::sealed_class("Demo", "Shown"))
            .type_def(
                TypeDescriptor::sealed_class("Demo", "Hidden").with_visibility(Visibility::Internal),
            );

        let source = JsonMetadataSource::new(module);
        let names: Vec<_> = source.public_types().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Shown"]);
        assert_eq!(source.module_name(), "Demo");
    }

    #[test]
    fn test_foreign_classification() {
        let source = JsonMetadataSource::new(ModuleMetadata::new("Demo").reference("Windows.Foundation"))
            .with_references(["Windows.UI"]);

        let foundation = NamedType::new("Windows.Foundation", "Size", "Windows.Foundation", TypeKind::Struct);
        let ui = NamedType::new("Windows.UI", "Color", "Windows.UI", TypeKind::Struct);
        let own = NamedType::new("Demo", "Widget", "Demo", TypeKind::Class);
        let core = NamedType::new("System", "Int32", "mscorlib", TypeKind::Struct);

        assert!(source.is_foreign(&foundation.identity()));
        assert!(source.is_foreign(&ui.identity()));
        assert!(!source.is_foreign(&own.identity()));
        assert!(!source.is_foreign(&core.identity()));
    }
}
