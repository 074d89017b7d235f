//! Extraction configuration
//!
//! [`ExtractConfig`] is read from a TOML file and adjusted by the command
//! line. Every key is optional:
//!
//! ```toml
//! output_dir = "generated"
//! source_extension = "cs"
//! header = "// generated by extract-surface"
//! doc_url_base = "http://msdn.microsoft.com/library/windows/apps/"
//! reference_modules = ["Windows.Foundation.UniversalApiContract"]
//!
//! [generic_doc_urls]
//! "Windows.Foundation.IReference`1" = "br225871"
//! ```

use crate::crossref::{DocUrlResolver, DEFAULT_DOC_URL_BASE};
use crate::diagnostics::{ExtractError, ExtractResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use surface_gen::codegen::DEFAULT_HEADER;

/// Configuration for an extraction run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Directory receiving every generated file
    pub output_dir: PathBuf,
    /// Extension of generated source files
    pub source_extension: String,
    /// First line of every generated source file
    pub header: String,
    /// Base URL of external reference pages
    pub doc_url_base: String,
    /// Extra generic definition to page mappings
    pub generic_doc_urls: IndexMap<String, String>,
    /// Modules treated as foreign on top of each module's own references
    pub reference_modules: Vec<String>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("generated"),
            source_extension: "cs".to_string(),
            header: DEFAULT_HEADER.to_string(),
            doc_url_base: DEFAULT_DOC_URL_BASE.to_string(),
            generic_doc_urls: IndexMap::new(),
            reference_modules: Vec::new(),
        }
    }
}

impl ExtractConfig {
    /// Create a default config writing to `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    /// Parse a config from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load a config file
    pub fn load(path: impl AsRef<Path>) -> ExtractResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ExtractError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&text).map_err(|source| ExtractError::ConfigParse {
            file: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Set the header line
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Set the reference page base URL
    pub fn with_doc_url_base(mut self, base: impl Into<String>) -> Self {
        self.doc_url_base = base.into();
        self
    }

    /// Map a generic definition to a reference page
    pub fn with_generic_doc_url(mut self, full_name: impl Into<String>, page: impl Into<String>) -> Self {
        self.generic_doc_urls.insert(full_name.into(), page.into());
        self
    }

    /// Treat another module as foreign
    pub fn with_reference_module(mut self, module: impl Into<String>) -> Self {
        self.reference_modules.push(module.into());
        self
    }

    /// Check the values the run depends on
    pub fn validate(&self) -> ExtractResult<()> {
        if self.source_extension.is_empty() {
            return Err(ExtractError::config("source_extension must not be empty"));
        }
        if self.doc_url_base.is_empty() {
            return Err(ExtractError::config("doc_url_base must not be empty"));
        }
        Ok(())
    }

    /// File name of a module's generated source
    pub fn source_file_name(&self, module: &str) -> String {
        format!("{}.{}", module, self.source_extension)
    }

    /// URL resolver with the built-in and configured generic mappings
    pub fn doc_url_resolver(&self) -> DocUrlResolver {
        DocUrlResolver::new(self.doc_url_base.clone()).with_generics(
            self.generic_doc_urls
                .iter()
                .map(|(name, page)| (name.clone(), page.clone())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ExtractConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("generated"));
        assert_eq!(config.source_file_name("Demo"), "Demo.cs");
        assert_eq!(config.header, "// generated by extract-surface");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config = ExtractConfig::from_toml_str(
            r#"
            output_dir = "out/api"
            reference_modules = ["Windows.Foundation.UniversalApiContract"]

            [generic_doc_urls]
            "Windows.Foundation.IReference`1" = "br225871"
            "#,
        )
        .unwrap();

        assert_eq!(config.output_dir, PathBuf::from("out/api"));
        assert_eq!(config.source_extension, "cs");
        assert_eq!(config.reference_modules.len(), 1);

        let resolver = config.doc_url_resolver();
        assert_eq!(
            resolver.resolve("Windows.Foundation.IReference`1").unwrap(),
            "http://msdn.microsoft.com/library/windows/apps/br225871"
        );
        assert!(resolver.resolve("Windows.Foundation.TypedEventHandler`2").is_ok());
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "header = \"// api surface\"").unwrap();
        writeln!(file, "source_extension = \"txt\"").unwrap();

        let config = ExtractConfig::load(file.path()).unwrap();
        assert_eq!(config.header, "// api surface");
        assert_eq!(config.source_file_name("Demo"), "Demo.txt");
    }

    #[test]
    fn test_load_rejects_bad_files() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "output_dir = [").unwrap();
        assert!(matches!(
            ExtractConfig::load(file.path()),
            Err(ExtractError::ConfigParse { .. })
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "source_extension = \"\"").unwrap();
        assert!(matches!(
            ExtractConfig::load(file.path()),
            Err(ExtractError::Config(_))
        ));

        assert!(matches!(
            ExtractConfig::load("/nonexistent/surface.toml"),
            Err(ExtractError::Read { .. })
        ));
    }

    #[test]
    fn test_builders() {
        let config = ExtractConfig::new("out")
            .with_header("// h")
            .with_doc_url_base("https://docs.example.com/")
            .with_generic_doc_url("A.B`1", "ab")
            .with_reference_module("Windows.UI");

        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.doc_url_resolver().resolve("A.B`1").unwrap(), "https://docs.example.com/ab");
        assert_eq!(config.reference_modules, vec!["Windows.UI"]);
    }
}
