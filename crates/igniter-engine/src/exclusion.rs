//! Exclusion resolution and the master enable switch.

use std::sync::Arc;

use igniter_config::Environment;
use igniter_core::{ExclusionSet, TypePresenceOracle, UnitId};

use crate::error::{EngineError, Result};

/// Boolean property disabling resolution entirely when `false`.
pub const ENABLED_PROPERTY: &str = "igniter.enabled";

/// List property of additional unit identifiers to exclude.
pub const EXCLUDE_PROPERTY: &str = "igniter.exclude";

/// Computes the final exclude set from declared exclusions and the
/// environment.
#[derive(Debug)]
pub struct ExclusionResolver {
    environment: Arc<Environment>,
    types: Arc<dyn TypePresenceOracle>,
}

impl ExclusionResolver {
    pub fn new(environment: Arc<Environment>, types: Arc<dyn TypePresenceOracle>) -> Self {
        Self { environment, types }
    }

    /// Reads the master switch; defaults to enabled. A malformed value is
    /// fatal.
    pub fn is_enabled(&self) -> Result<bool> {
        Ok(self.environment.get_bool(ENABLED_PROPERTY, true)?)
    }

    /// Merges declared exclude names, declared exclude types, and the
    /// environment's exclude list.
    ///
    /// # Errors
    ///
    /// A declared exclude type unknown to the oracle is a fatal resolution
    /// failure.
    pub fn resolve(
        &self,
        declared_names: &[UnitId],
        declared_types: &[String],
    ) -> Result<ExclusionSet> {
        let mut excludes: ExclusionSet = declared_names.iter().cloned().collect();
        for type_name in declared_types {
            if !self.types.contains(type_name) {
                return Err(EngineError::UnknownExcludeType(type_name.clone()));
            }
            excludes.insert(UnitId::new(type_name.clone()));
        }
        excludes.extend(
            self.environment
                .get_list(EXCLUDE_PROPERTY)
                .into_iter()
                .map(UnitId::new),
        );
        Ok(excludes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use igniter_config::PropertySource;
    use igniter_core::StaticTypeRegistry;

    fn resolver(environment: Environment, types: StaticTypeRegistry) -> ExclusionResolver {
        ExclusionResolver::new(Arc::new(environment), Arc::new(types))
    }

    #[test]
    fn enabled_by_default() {
        let r = resolver(Environment::new(), StaticTypeRegistry::new());
        assert!(r.is_enabled().unwrap());
    }

    #[test]
    fn disabled_by_property() {
        let env = Environment::new().with_source(PropertySource::from_pairs(
            "test",
            [(ENABLED_PROPERTY, "false")],
        ));
        let r = resolver(env, StaticTypeRegistry::new());
        assert!(!r.is_enabled().unwrap());
    }

    #[test]
    fn malformed_switch_is_fatal() {
        let env = Environment::new().with_source(PropertySource::from_pairs(
            "test",
            [(ENABLED_PROPERTY, "maybe")],
        ));
        let r = resolver(env, StaticTypeRegistry::new());
        assert!(r.is_enabled().is_err());
    }

    #[test]
    fn merges_names_types_and_environment() {
        let env = Environment::new().with_source(PropertySource::from_pairs(
            "test",
            [(EXCLUDE_PROPERTY, "from-env")],
        ));
        let types: StaticTypeRegistry = ["typed-unit"].into_iter().collect();
        let r = resolver(env, types);

        let excludes = r
            .resolve(&[UnitId::from("by-name")], &["typed-unit".to_owned()])
            .unwrap();

        assert_eq!(excludes.len(), 3);
        assert!(excludes.contains(&UnitId::from("by-name")));
        assert!(excludes.contains(&UnitId::from("typed-unit")));
        assert!(excludes.contains(&UnitId::from("from-env")));
    }

    #[test]
    fn unknown_exclude_type_is_fatal() {
        let r = resolver(Environment::new(), StaticTypeRegistry::new());
        let err = r.resolve(&[], &["no-such-type".to_owned()]).unwrap_err();
        assert!(matches!(err, EngineError::UnknownExcludeType(name) if name == "no-such-type"));
    }
}
