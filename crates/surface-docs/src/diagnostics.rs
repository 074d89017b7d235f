//! Error types and diagnostics
//!
//! This module provides error handling and diagnostic reporting
//! for surface extraction runs.

use std::io::IsTerminal;
use std::path::PathBuf;
use surface_gen::SurfaceError;
use thiserror::Error;

/// Result type for extraction runs
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Main error type for extraction runs
#[derive(Debug, Error)]
pub enum ExtractError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Reading an input failed
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input path does not exist
    #[error("Input not found: {0}")]
    InputNotFound(PathBuf),

    /// Module document could not be parsed
    #[error("Invalid module document {file}: {source}")]
    ModuleDocument {
        file: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file could not be parsed
    #[error("Invalid configuration file {file}: {source}")]
    ConfigParse {
        file: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Fatal generation error in a module
    #[error("Module {module}: {source}")]
    Surface {
        module: String,
        #[source]
        source: SurfaceError,
    },
}

impl ExtractError {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        ExtractError::Config(message.into())
    }

    /// Attach a module name to a generation error
    pub fn surface(module: impl Into<String>, source: SurfaceError) -> Self {
        ExtractError::Surface {
            module: module.into(),
            source,
        }
    }
}

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticSeverity {
    /// Error - aborts the run
    Error,
    /// Warning - the run continues
    Warning,
    /// Info - informational message
    Info,
}

impl DiagnosticSeverity {
    /// Get display string
    pub fn display(&self) -> &'static str {
        match self {
            DiagnosticSeverity::Error => "error",
            DiagnosticSeverity::Warning => "warning",
            DiagnosticSeverity::Info => "info",
        }
    }

    /// Get ANSI color code
    pub fn color(&self) -> &'static str {
        match self {
            DiagnosticSeverity::Error => "\x1b[31m",   // Red
            DiagnosticSeverity::Warning => "\x1b[33m", // Yellow
            DiagnosticSeverity::Info => "\x1b[34m",    // Blue
        }
    }
}

/// Diagnostic code for a leaked factory or statics interface
pub const CODE_SPECIAL_INTERFACE: &str = "W001";

/// Diagnostic code for a module that appeared twice in one run
pub const CODE_DUPLICATE_MODULE: &str = "W002";

/// A diagnostic message
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level
    pub severity: DiagnosticSeverity,
    /// Message
    pub message: String,
    /// Module the message is about
    pub module: Option<String>,
    /// Input file
    pub file: Option<PathBuf>,
    /// Diagnostic code (for categorization)
    pub code: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(severity: DiagnosticSeverity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            module: None,
            file: None,
            code: None,
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(DiagnosticSeverity::Error, message)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(DiagnosticSeverity::Warning, message)
    }

    /// Create an info diagnostic
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(DiagnosticSeverity::Info, message)
    }

    /// Set the module
    pub fn in_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    /// Set the input file
    pub fn in_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Format the diagnostic for display
    pub fn format(&self) -> String {
        let mut result = String::new();

        if let Some(ref file) = self.file {
            result.push_str(&file.display().to_string());
            result.push_str(": ");
        }

        result.push_str(self.severity.display());

        if let Some(ref code) = self.code {
            result.push('[');
            result.push_str(code);
            result.push(']');
        }

        result.push_str(": ");
        if let Some(ref module) = self.module {
            result.push_str(module);
            result.push_str(": ");
        }
        result.push_str(&self.message);

        result
    }

    /// Format with ANSI colors
    pub fn format_colored(&self) -> String {
        let mut result = String::new();
        let reset = "\x1b[0m";

        // Location prefix (dim)
        if let Some(ref file) = self.file {
            result.push_str("\x1b[2m");
            result.push_str(&file.display().to_string());
            result.push_str(reset);
            result.push_str(": ");
        }

        // Severity (colored)
        result.push_str(self.severity.color());
        result.push_str(self.severity.display());
        result.push_str(reset);

        if let Some(ref code) = self.code {
            result.push_str("\x1b[2m[");
            result.push_str(code);
            result.push_str("]\x1b[0m");
        }

        result.push_str(": ");
        if let Some(ref module) = self.module {
            result.push_str(module);
            result.push_str(": ");
        }
        result.push_str(&self.message);

        result
    }
}

/// Collector for diagnostics during a run
#[derive(Debug, Default)]
pub struct DiagnosticsCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticsCollector {
    /// Create a new collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Add an info message
    pub fn info(&mut self, message: impl Into<String>) {
        self.add(Diagnostic::info(message));
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == DiagnosticSeverity::Error)
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Get error count
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == DiagnosticSeverity::Error)
            .count()
    }

    /// Get warning count
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == DiagnosticSeverity::Warning)
            .count()
    }

    /// Render warnings and errors, one per line
    pub fn render(&self, colored: bool) -> String {
        let mut out = String::new();
        for diagnostic in &self.diagnostics {
            if diagnostic.severity == DiagnosticSeverity::Info {
                continue;
            }
            if colored {
                out.push_str(&diagnostic.format_colored());
            } else {
                out.push_str(&diagnostic.format());
            }
            out.push('\n');
        }
        out
    }

    /// Print all warnings and errors to stderr, colored on a terminal
    pub fn print(&self) {
        let stderr = std::io::stderr();
        eprint!("{}", self.render(stderr.is_terminal()));
    }

    /// Print summary
    pub fn print_summary(&self) {
        let errors = self.error_count();
        let warnings = self.warning_count();

        if errors > 0 || warnings > 0 {
            eprintln!("\n{} error(s), {} warning(s)", errors, warnings);
        }
    }
}
