//! Type bookkeeping across a generation run
//!
//! [`SeenTypeSet`] records every type identity the signature formatter
//! touches while one module is rendered. [`PlaceholderRegistry`] remembers,
//! for the whole run, which foreign identities already received a
//! placeholder declaration so no type is stubbed twice.

use crate::ir::TypeIdentity;
use indexmap::IndexSet;

/// Identities touched while rendering one module, in first-seen order
#[derive(Debug, Default, Clone)]
pub struct SeenTypeSet {
    seen: IndexSet<TypeIdentity>,
}

impl SeenTypeSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an identity; returns true if it was not seen before
    pub fn record(&mut self, identity: TypeIdentity) -> bool {
        self.seen.insert(identity)
    }

    /// Check if an identity was seen
    pub fn contains(&self, identity: &TypeIdentity) -> bool {
        self.seen.contains(identity)
    }

    /// Iterate in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &TypeIdentity> {
        self.seen.iter()
    }

    /// Number of distinct identities seen
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Check if nothing was seen
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Run-scoped record of identities that already have a placeholder
#[derive(Debug, Default, Clone)]
pub struct PlaceholderRegistry {
    written: IndexSet<TypeIdentity>,
}

impl PlaceholderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an identity already has a placeholder
    pub fn contains(&self, identity: &TypeIdentity) -> bool {
        self.written.contains(identity)
    }

    /// Register an identity; returns true if it was not registered before
    pub fn register(&mut self, identity: TypeIdentity) -> bool {
        self.written.insert(identity)
    }

    /// Register every identity of a finished module
    pub fn register_all<I>(&mut self, identities: I)
    where
        I: IntoIterator<Item = TypeIdentity>,
    {
        self.written.extend(identities);
    }

    /// Iterate in registration order
    pub fn iter(&self) -> impl Iterator<Item = &TypeIdentity> {
        self.written.iter()
    }

    /// Distinct namespaces that received a placeholder, sorted
    pub fn namespaces(&self) -> Vec<&str> {
        let mut namespaces: Vec<&str> = self
            .written
            .iter()
            .map(|identity| identity.namespace.as_str())
            .collect();
        namespaces.sort_unstable();
        namespaces.dedup();
        namespaces
    }

    /// Number of registered placeholders
    pub fn len(&self) -> usize {
        self.written.len()
    }

    /// Check if no placeholder was registered
    pub fn is_empty(&self) -> bool {
        self.written.is_empty()
    }
}
