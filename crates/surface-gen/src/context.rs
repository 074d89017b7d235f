//! Run-scoped generation state
//!
//! A run generates surfaces for several modules in sequence. [`RunContext`]
//! carries what has to survive between modules: the placeholder registry and
//! the names of modules already generated. It is owned by the run driver and
//! only changes when a module is committed, so a module that fails leaves no
//! trace in it.

use crate::codegen::ModuleSurface;
use crate::ir::PlaceholderRegistry;
use indexmap::IndexSet;

/// State shared by every module of one run
#[derive(Debug, Default)]
pub struct RunContext {
    registry: PlaceholderRegistry,
    generated_modules: IndexSet<String>,
}

impl RunContext {
    /// Start a new run
    pub fn new() -> Self {
        Self::default()
    }

    /// Placeholders declared by committed modules
    pub fn registry(&self) -> &PlaceholderRegistry {
        &self.registry
    }

    /// Check if a module was already committed in this run
    pub fn is_generated(&self, module: &str) -> bool {
        self.generated_modules.contains(module)
    }

    /// Record a finished module and the placeholders it declared
    pub fn commit(&mut self, surface: &ModuleSurface) {
        self.registry
            .register_all(surface.placeholders.iter().cloned());
        self.generated_modules.insert(surface.module.clone());
    }

    /// Modules committed so far, in commit order
    pub fn generated_modules(&self) -> impl Iterator<Item = &str> {
        self.generated_modules.iter().map(String::as_str)
    }
}
