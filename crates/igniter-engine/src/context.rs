//! Runtime context handed into condition evaluation.

use std::fmt::Debug;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use igniter_config::Environment;
use igniter_core::{RuntimeVersion, TypePresenceOracle};

/// Existence probe for resource locations.
pub trait ResourceLoader: Debug + Send + Sync {
    /// Returns true if the resource at the given location exists.
    fn exists(&self, location: &str) -> bool;
}

/// Filesystem-backed resource loader.
///
/// Relative locations resolve against the configured root, absolute
/// locations are probed as-is.
#[derive(Debug, Clone, Default)]
pub struct FsResourceLoader {
    root: Option<PathBuf>,
}

impl FsResourceLoader {
    /// Loader resolving relative locations against the working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader resolving relative locations against `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }
}

impl ResourceLoader for FsResourceLoader {
    fn exists(&self, location: &str) -> bool {
        let path = Path::new(location);
        match (&self.root, path.is_absolute()) {
            (Some(root), false) => root.join(path).exists(),
            _ => path.exists(),
        }
    }
}

/// Collaborators available to condition evaluation.
///
/// Built once per bootstrap and shared by reference; all lookups are
/// synchronous on the bootstrap thread.
#[derive(Debug, Clone)]
pub struct ResolutionContext {
    environment: Arc<Environment>,
    types: Arc<dyn TypePresenceOracle>,
    resources: Arc<dyn ResourceLoader>,
    runtime_version: RuntimeVersion,
}

impl ResolutionContext {
    pub fn new(
        environment: Arc<Environment>,
        types: Arc<dyn TypePresenceOracle>,
        resources: Arc<dyn ResourceLoader>,
        runtime_version: RuntimeVersion,
    ) -> Self {
        Self {
            environment,
            types,
            resources,
            runtime_version,
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn types(&self) -> &dyn TypePresenceOracle {
        self.types.as_ref()
    }

    pub fn resources(&self) -> &dyn ResourceLoader {
        self.resources.as_ref()
    }

    pub fn runtime_version(&self) -> RuntimeVersion {
        self.runtime_version
    }
}
