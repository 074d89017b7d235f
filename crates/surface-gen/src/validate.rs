//! Surface validation
//!
//! Checks that only produce warnings. A runtime class usually comes with
//! activation-factory and statics interfaces (`IWidgetFactory`,
//! `IWidgetStatics`); when those are left publicly visible they leak into
//! the surface, and they should have been marked exclusive to their class.

use crate::ir::{TypeDescriptor, TypeShape};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use tracing::warn;

lazy_static! {
    static ref SPECIAL_INTERFACE: Regex =
        Regex::new(r"^I(?P<class>\w+?)(?:Factory|Statics)$").unwrap();
}

/// A non-fatal problem found in a module's public types
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// Name of the leaked interface
    pub interface: String,
    /// Class the interface belongs to
    pub class: String,
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "special interface {} should be marked exclusiveto",
            self.interface
        )
    }
}

/// Warn about factory and statics interfaces that are publicly visible
pub fn validate_public_types(types: &[&TypeDescriptor]) -> Vec<ValidationWarning> {
    let classes: HashSet<&str> = types
        .iter()
        .filter(|ty| matches!(ty.shape, TypeShape::Class { .. }))
        .map(|ty| ty.name.as_str())
        .collect();

    let mut warnings = Vec::new();
    for ty in types {
        let Some(captures) = SPECIAL_INTERFACE.captures(&ty.name) else {
            continue;
        };
        let class = &captures["class"];
        if !classes.contains(class) {
            continue;
        }

        let warning = ValidationWarning {
            interface: ty.name.clone(),
            class: class.to_string(),
        };
        warn!(interface = %warning.interface, class = %warning.class, "{}", warning);
        warnings.push(warning);
    }

    warnings
}
