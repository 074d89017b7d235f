//! Extraction run driver
//!
//! [`Extractor`] coordinates a whole run:
//! 1. Discover module documents
//! 2. Generate each module's surface against the run's placeholder registry
//! 3. Build the module's placeholder cross-reference document
//! 4. Write both files and commit the module to the run context
//! 5. Write the placeholder namespace document once every module succeeded
//!
//! A fatal error in any module aborts the run. Files of the failing module
//! are never written and the namespace document is not produced.

use crate::config::ExtractConfig;
use crate::crossref::{
    placeholder_namespace_docs, placeholder_type_docs, placeholders_file_name, DocUrlResolver,
    PLACEHOLDER_NAMESPACES_FILE,
};
use crate::diagnostics::{
    Diagnostic, DiagnosticsCollector, ExtractError, ExtractResult, CODE_DUPLICATE_MODULE,
    CODE_SPECIAL_INTERFACE,
};
use std::path::{Path, PathBuf};
use surface_gen::{JsonMetadataSource, MetadataSource, RunContext, SurfaceGenerator};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Files written for one module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleArtifacts {
    /// Module name
    pub module: String,
    /// Generated source file
    pub source_file: PathBuf,
    /// Placeholder cross-reference document
    pub placeholders_file: PathBuf,
    /// Public types emitted
    pub type_count: usize,
    /// Placeholders declared
    pub placeholder_count: usize,
}

/// Result of a completed run
#[derive(Debug, Clone, Default)]
pub struct ExtractOutput {
    /// Output directory
    pub output_dir: PathBuf,
    /// Modules generated, in run order
    pub modules: Vec<ModuleArtifacts>,
    /// Modules skipped because they were already generated
    pub skipped_modules: Vec<String>,
    /// Placeholder namespace document
    pub namespaces_file: PathBuf,
}

impl ExtractOutput {
    /// Total public types emitted
    pub fn type_count(&self) -> usize {
        self.modules.iter().map(|m| m.type_count).sum()
    }

    /// Total placeholders declared
    pub fn placeholder_count(&self) -> usize {
        self.modules.iter().map(|m| m.placeholder_count).sum()
    }
}

/// Expand input paths into module documents.
///
/// Files are taken as given; directories are searched recursively for
/// `*.json` files in file name order.
pub fn discover_inputs(paths: &[PathBuf]) -> ExtractResult<Vec<PathBuf>> {
    let mut inputs = Vec::new();

    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry = entry.map_err(|err| ExtractError::Read {
                    path: path.clone(),
                    source: err.into(),
                })?;
                let is_json = entry
                    .path()
                    .extension()
                    .is_some_and(|ext| ext == "json");
                if entry.file_type().is_file() && is_json {
                    inputs.push(entry.into_path());
                }
            }
        } else if path.is_file() {
            inputs.push(path.clone());
        } else {
            return Err(ExtractError::InputNotFound(path.clone()));
        }
    }

    Ok(inputs)
}

/// Drives surface extraction over a set of modules
pub struct Extractor {
    config: ExtractConfig,
    context: RunContext,
    resolver: DocUrlResolver,
    diagnostics: DiagnosticsCollector,
}

impl Extractor {
    /// Create an extractor for a new run
    pub fn new(config: ExtractConfig) -> Self {
        let resolver = config.doc_url_resolver();
        Self {
            config,
            context: RunContext::new(),
            resolver,
            diagnostics: DiagnosticsCollector::new(),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Get the run context
    pub fn context(&self) -> &RunContext {
        &self.context
    }

    /// Get the diagnostics collector
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    /// Load a module document, adding the configured reference modules
    pub fn load_module(&self, path: &Path) -> ExtractResult<JsonMetadataSource> {
        let text = std::fs::read_to_string(path).map_err(|source| ExtractError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let source =
            JsonMetadataSource::from_json(&text).map_err(|source| ExtractError::ModuleDocument {
                file: path.to_path_buf(),
                source,
            })?;

        Ok(source.with_references(self.config.reference_modules.iter().cloned()))
    }

    /// Generate one module and write its files.
    ///
    /// Returns `None` when the module was already generated in this run.
    pub fn extract_module<S>(&mut self, source: &S) -> ExtractResult<Option<ModuleArtifacts>>
    where
        S: MetadataSource + ?Sized,
    {
        let module = source.module_name().to_string();

        if self.context.is_generated(&module) {
            warn!(module = %module, "extract.duplicate_module");
            self.diagnostics.add(
                Diagnostic::warning("module already generated in this run; skipped")
                    .in_module(&module)
                    .with_code(CODE_DUPLICATE_MODULE),
            );
            return Ok(None);
        }

        let surface = SurfaceGenerator::new(source, self.context.registry())
            .with_header(self.config.header.clone())
            .generate()
            .map_err(|err| ExtractError::surface(&module, err))?;

        for warning in &surface.warnings {
            self.diagnostics.add(
                Diagnostic::warning(warning.to_string())
                    .in_module(&module)
                    .with_code(CODE_SPECIAL_INTERFACE),
            );
        }

        let placeholders_xml = placeholder_type_docs(&module, &surface.placeholders, &self.resolver)
            .map_err(|err| ExtractError::surface(&module, err))?
            .to_xml_string();

        // Everything for this module exists in memory; only now touch the disk
        std::fs::create_dir_all(&self.config.output_dir)?;
        let source_file = self
            .config
            .output_dir
            .join(self.config.source_file_name(&module));
        let placeholders_file = self.config.output_dir.join(placeholders_file_name(&module));

        std::fs::write(&source_file, &surface.source)?;
        std::fs::write(&placeholders_file, placeholders_xml)?;
        debug!(module = %module, file = %source_file.display(), "extract.write");

        self.context.commit(&surface);
        self.diagnostics.info(format!(
            "{}: {} types, {} placeholders",
            module,
            surface.type_count,
            surface.placeholders.len()
        ));

        Ok(Some(ModuleArtifacts {
            module,
            source_file,
            placeholders_file,
            type_count: surface.type_count,
            placeholder_count: surface.placeholders.len(),
        }))
    }

    /// Load and generate one module document
    pub fn extract_file(&mut self, path: &Path) -> ExtractResult<Option<ModuleArtifacts>> {
        let source = self.load_module(path)?;
        self.extract_module(&source)
    }

    /// Write the run-scoped placeholder namespace document
    pub fn finish(&mut self) -> ExtractResult<PathBuf> {
        let namespaces = self.context.registry().namespaces();
        let xml = placeholder_namespace_docs(&namespaces, &self.resolver)
            .map_err(|err| ExtractError::surface(PLACEHOLDER_NAMESPACES_FILE, err))?
            .to_xml_string();

        std::fs::create_dir_all(&self.config.output_dir)?;
        let path = self.config.output_dir.join(PLACEHOLDER_NAMESPACES_FILE);
        std::fs::write(&path, xml)?;

        info!(namespaces = namespaces.len(), file = %path.display(), "extract.namespaces");
        Ok(path)
    }

    /// Run over every module document found under `inputs`
    pub fn run(&mut self, inputs: &[PathBuf]) -> ExtractResult<ExtractOutput> {
        let files = discover_inputs(inputs)?;
        info!(inputs = files.len(), output = %self.config.output_dir.display(), "extract.start");

        let mut output = ExtractOutput {
            output_dir: self.config.output_dir.clone(),
            ..Default::default()
        };

        for file in &files {
            match self.extract_file(file) {
                Ok(Some(artifacts)) => output.modules.push(artifacts),
                Ok(None) => output.skipped_modules.push(file.display().to_string()),
                Err(err) => {
                    self.diagnostics
                        .add(Diagnostic::error(err.to_string()).in_file(file));
                    return Err(err);
                }
            }
        }

        output.namespaces_file = self.finish()?;

        info!(
            modules = output.modules.len(),
            types = output.type_count(),
            placeholders = output.placeholder_count(),
            "extract.done"
        );
        Ok(output)
    }
}
