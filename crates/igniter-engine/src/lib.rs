//! Igniter Resolution Engine
//!
//! This crate decides which configuration units activate at bootstrap:
//! - Provider registry aggregation and deduplication
//! - Exclusion resolution and the master enable switch
//! - Batch fast filters over the metadata sidecar
//! - Condition evaluation with diagnostic reporting
//! - Declared-order sorting of the surviving candidates
//! - Import event notification

pub mod condition;
pub mod context;
pub mod error;
pub mod event;
pub mod exclusion;
pub mod filter;
pub mod metadata;
pub mod ordering;
pub mod orchestrator;
pub mod registry;

pub use condition::ConditionEvaluator;
pub use context::{FsResourceLoader, ResolutionContext, ResourceLoader};
pub use error::{EngineError, Result};
pub use event::{ImportEvent, ImportEventPublisher, ImportListener, LoggingImportListener};
pub use exclusion::ExclusionResolver;
pub use filter::{FastFilter, FastFilterChain, MetadataSource, TypePresenceFilter};
pub use metadata::MetadataStore;
pub use ordering::OrderingEngine;
pub use orchestrator::{ImportDeclaration, Orchestrator, ResolutionResult};
pub use registry::{ProviderRegistry, ProviderTable};
