//! Import event notification.
//!
//! Once the filtering stage completes, registered listeners are told which
//! candidates survived and which units were excluded. Listener names come
//! from the provider registry under a dedicated trigger key and are
//! instantiated through a factory table; because listeners are constructed
//! generically, the publisher re-injects the orchestrator's collaborators
//! through the trait's setter hooks before notifying.

use std::fmt::Debug;
use std::sync::Arc;

use igniter_config::Environment;
use igniter_core::{CandidateSet, ExclusionSet, TypePresenceOracle};

use crate::error::{EngineError, Result};
use crate::registry::ProviderRegistry;

/// Trigger key under which listener names are registered.
pub const LISTENERS_TRIGGER: &str = "igniter.import-listeners";

/// Snapshot of one completed filtering stage.
#[derive(Debug, Clone)]
pub struct ImportEvent {
    candidates: CandidateSet,
    excludes: ExclusionSet,
}

impl ImportEvent {
    pub fn new(candidates: CandidateSet, excludes: ExclusionSet) -> Self {
        Self {
            candidates,
            excludes,
        }
    }

    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    pub fn excludes(&self) -> &ExclusionSet {
        &self.excludes
    }
}

/// Listener notified after the filtering stage.
///
/// The setter hooks have no-op defaults; implement the ones whose
/// collaborator the listener needs and the publisher will call them before
/// `on_import`.
pub trait ImportListener: Debug {
    /// Receives the configuration environment, when wanted.
    fn set_environment(&mut self, _environment: Arc<Environment>) {}

    /// Receives the type-presence oracle, when wanted.
    fn set_type_oracle(&mut self, _types: Arc<dyn TypePresenceOracle>) {}

    /// Called once per resolution pass with the final filtered state.
    fn on_import(&self, event: &ImportEvent) -> Result<()>;
}

/// Constructor for a listener registered under a name.
pub type ListenerFactory = fn() -> Box<dyn ImportListener>;

/// Notifies import listeners discovered through the provider registry.
#[derive(Debug)]
pub struct ImportEventPublisher {
    factories: Vec<(String, ListenerFactory)>,
    environment: Arc<Environment>,
    types: Arc<dyn TypePresenceOracle>,
}

impl ImportEventPublisher {
    pub fn new(environment: Arc<Environment>, types: Arc<dyn TypePresenceOracle>) -> Self {
        Self {
            factories: Vec::new(),
            environment,
            types,
        }
    }

    /// Registers a factory for a listener name.
    pub fn register(&mut self, name: impl Into<String>, factory: ListenerFactory) {
        self.factories.push((name.into(), factory));
    }

    /// Instantiates and notifies every listener named under
    /// [`LISTENERS_TRIGGER`], in registry discovery order.
    ///
    /// A listener returning an error is logged and does not prevent later
    /// listeners from running. An unknown listener name is fatal.
    pub fn publish(
        &self,
        registry: &ProviderRegistry,
        candidates: &CandidateSet,
        excludes: &ExclusionSet,
    ) -> Result<()> {
        let names = registry.load_candidates(LISTENERS_TRIGGER);
        if names.is_empty() {
            return Ok(());
        }
        let event = ImportEvent::new(candidates.clone(), excludes.clone());
        for name in names {
            let factory = self
                .factories
                .iter()
                .find(|(registered, _)| registered.as_str() == name.as_str())
                .map(|(_, factory)| *factory)
                .ok_or_else(|| EngineError::UnknownListener(name.to_string()))?;
            let mut listener = factory();
            listener.set_environment(Arc::clone(&self.environment));
            listener.set_type_oracle(Arc::clone(&self.types));
            if let Err(error) = listener.on_import(&event) {
                tracing::warn!(listener = %name, %error, "import listener failed");
            }
        }
        Ok(())
    }
}

/// Listener that logs the final candidate and exclude counts.
#[derive(Debug, Default)]
pub struct LoggingImportListener;

impl LoggingImportListener {
    pub fn new() -> Self {
        Self
    }
}

impl ImportListener for LoggingImportListener {
    fn on_import(&self, event: &ImportEvent) -> Result<()> {
        tracing::info!(
            candidates = event.candidates().len(),
            excludes = event.excludes().len(),
            "auto-configuration import resolved"
        );
        Ok(())
    }
}
