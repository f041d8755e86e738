//! Error types for the resolution engine.
//!
//! Every variant is fatal to bootstrap: resolution has no degraded mode, so
//! the host is expected to propagate these and abort.

use std::path::PathBuf;

use thiserror::Error;

use igniter_config::ConfigError;

/// Main error type for resolution operations
#[derive(Debug, Error)]
pub enum EngineError {
    /// A provider source could not be parsed.
    #[error("malformed provider source '{src}' at line {line}: {reason}")]
    MalformedProvider {
        src: String,
        line: usize,
        reason: String,
    },

    /// The metadata sidecar could not be parsed.
    #[error("malformed metadata source at line {line}: {reason}")]
    MalformedMetadata { line: usize, reason: String },

    /// A sidecar or provider file could not be read.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A declared exclude type could not be resolved.
    #[error("cannot resolve excluded type '{0}'")]
    UnknownExcludeType(String),

    /// A registered listener name has no matching factory.
    #[error("no factory registered for import listener '{0}'")]
    UnknownListener(String),

    /// Failure reported by an import listener; logged, not propagated.
    #[error("import listener error: {0}")]
    Listener(String),

    /// A fast filter broke the batch contract.
    #[error("filter {filter} returned {got} results for {expected} candidates")]
    FilterContract {
        filter: String,
        expected: usize,
        got: usize,
    },

    /// Error from the configuration environment.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type alias for resolution operations
pub type Result<T> = std::result::Result<T, EngineError>;
