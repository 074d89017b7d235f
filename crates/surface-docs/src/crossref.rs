//! Cross-reference documents for placeholder types
//!
//! Placeholder declarations carry no documentation of their own. For every
//! module, `<Module>.placeholders.xml` links each placeholder type to its
//! external reference page; once per run, `PlaceholderNamespaces.xml` does
//! the same for every namespace that received a placeholder.

use crate::xml::{XmlDocument, XmlElement};
use indexmap::IndexMap;
use surface_gen::ir::ARITY_MARKER;
use surface_gen::{SurfaceError, SurfaceResult, TypeIdentity};

/// Base URL of the external reference pages
pub const DEFAULT_DOC_URL_BASE: &str = "http://msdn.microsoft.com/library/windows/apps/";

/// Generic definitions whose reference pages do not follow the naming scheme
pub const BUILTIN_GENERIC_DOC_URLS: &[(&str, &str)] = &[
    ("Windows.Foundation.TypedEventHandler`2", "br225997"),
    ("Windows.Foundation.IAsyncOperation`1", "br206598"),
];

/// File name of the run-scoped namespace document
pub const PLACEHOLDER_NAMESPACES_FILE: &str = "PlaceholderNamespaces.xml";

/// Summary linking a placeholder type to its reference page
pub const TYPE_SUMMARY: &str = "This type is documented on MSDN.";

/// Summary linking a placeholder namespace to its reference page
pub const NAMESPACE_SUMMARY: &str = "This namespace is documented on MSDN.";

/// File name of a module's placeholder document
pub fn placeholders_file_name(module: &str) -> String {
    format!("{}.placeholders.xml", module)
}

/// Maps type and namespace names to reference page URLs
#[derive(Debug, Clone)]
pub struct DocUrlResolver {
    base: String,
    generic: IndexMap<String, String>,
}

impl Default for DocUrlResolver {
    fn default() -> Self {
        Self::new(DEFAULT_DOC_URL_BASE)
    }
}

impl DocUrlResolver {
    /// Create a resolver with the built-in generic mappings
    pub fn new(base: impl Into<String>) -> Self {
        let generic = BUILTIN_GENERIC_DOC_URLS
            .iter()
            .map(|(name, page)| (name.to_string(), page.to_string()))
            .collect();

        Self {
            base: base.into(),
            generic,
        }
    }

    /// Map a generic definition (e.g. "Windows.Foundation.IReference`1") to a page
    pub fn with_generic(mut self, full_name: impl Into<String>, page: impl Into<String>) -> Self {
        self.generic.insert(full_name.into(), page.into());
        self
    }

    /// Add several generic mappings, overriding existing ones
    pub fn with_generics<I, K, V>(mut self, mappings: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.generic
            .extend(mappings.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Resolve a fully qualified type or namespace name.
    ///
    /// Generic names need an explicit mapping.
    pub fn resolve(&self, full_name: &str) -> SurfaceResult<String> {
        if !full_name.contains(ARITY_MARKER) {
            return Ok(format!("{}{}", self.base, full_name));
        }

        self.generic
            .get(full_name)
            .map(|page| format!("{}{}", self.base, page))
            .ok_or_else(|| SurfaceError::UnmappedGenericDocUrl {
                type_name: full_name.to_string(),
            })
    }
}

/// Build `<Module>.placeholders.xml` for the placeholders a module declared
pub fn placeholder_type_docs(
    module: &str,
    placeholders: &[TypeIdentity],
    resolver: &DocUrlResolver,
) -> SurfaceResult<XmlDocument> {
    let members = placeholders
        .iter()
        .map(|identity| {
            let full_name = identity.full_name();
            let url = resolver.resolve(&full_name)?;
            Ok(XmlElement::new("member")
                .attr("name", format!("T:{}", full_name))
                .child(XmlElement::new("tocexclude"))
                .child(
                    XmlElement::new("summary").child(
                        XmlElement::new("b")
                            .child(XmlElement::new("a").attr("href", url).text(TYPE_SUMMARY)),
                    ),
                ))
        })
        .collect::<SurfaceResult<Vec<_>>>()?;

    Ok(XmlDocument::new(
        XmlElement::new("doc")
            .child(XmlElement::new("assembly").child(XmlElement::new("name").text(module)))
            .child(XmlElement::new("members").children(members)),
    ))
}

/// Build `PlaceholderNamespaces.xml` for every namespace that received a placeholder
pub fn placeholder_namespace_docs(
    namespaces: &[&str],
    resolver: &DocUrlResolver,
) -> SurfaceResult<XmlDocument> {
    let members = namespaces
        .iter()
        .map(|namespace| {
            let url = resolver.resolve(namespace)?;
            Ok(XmlElement::new("member")
                .attr("name", format!("N:{}", namespace))
                .child(
                    XmlElement::new("summary")
                        .child(XmlElement::new("a").attr("href", url).text(NAMESPACE_SUMMARY)),
                ))
        })
        .collect::<SurfaceResult<Vec<_>>>()?;

    Ok(XmlDocument::new(
        XmlElement::new("doc").child(XmlElement::new("members").children(members)),
    ))
}
