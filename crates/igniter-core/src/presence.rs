//! Runtime type-presence checks.

use std::collections::HashSet;
use std::fmt::Debug;

/// Capability test for optional types on the module search path.
///
/// Implementations are expected to be cheap lookups over a table built at
/// startup (a static registry or feature-flag table); presence is never
/// probed through runtime introspection.
pub trait TypePresenceOracle: Debug + Send + Sync {
    /// Returns true if a type with the given name is available.
    fn contains(&self, type_name: &str) -> bool;
}

/// Oracle backed by a fixed name table.
#[derive(Debug, Clone, Default)]
pub struct StaticTypeRegistry {
    names: HashSet<String>,
}

impl StaticTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one available type name.
    pub fn register(&mut self, type_name: impl Into<String>) {
        self.names.insert(type_name.into());
    }
}

impl TypePresenceOracle for StaticTypeRegistry {
    fn contains(&self, type_name: &str) -> bool {
        self.names.contains(type_name)
    }
}

impl<S: Into<String>> FromIterator<S> for StaticTypeRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
