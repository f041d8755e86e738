//! End-to-end resolution pipeline.

use igniter_core::{CandidateSet, ExclusionSet, UnitId};

use crate::error::Result;
use crate::event::ImportEventPublisher;
use crate::exclusion::ExclusionResolver;
use crate::filter::FastFilterChain;
use crate::registry::ProviderRegistry;

/// Trigger key under which candidate units are registered.
pub const UNITS_TRIGGER: &str = "igniter.units";

/// Per-bootstrap declared exclusions, as produced by the out-of-scope
/// declaration front-end.
#[derive(Debug, Clone, Default)]
pub struct ImportDeclaration {
    pub exclude_names: Vec<UnitId>,
    pub exclude_types: Vec<String>,
}

impl ImportDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exclude_names(mut self, names: impl IntoIterator<Item = UnitId>) -> Self {
        self.exclude_names.extend(names);
        self
    }

    pub fn with_exclude_types(
        mut self,
        types: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.exclude_types.extend(types.into_iter().map(Into::into));
        self
    }
}

/// The outcome of one resolution pass; immutable, created fresh per
/// bootstrap. Candidates and excludes are always disjoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolutionResult {
    candidates: CandidateSet,
    excludes: ExclusionSet,
}

impl ResolutionResult {
    /// The result of a disabled resolution pass.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    pub fn excludes(&self) -> &ExclusionSet {
        &self.excludes
    }

    pub fn into_parts(self) -> (CandidateSet, ExclusionSet) {
        (self.candidates, self.excludes)
    }
}

/// Composes the resolution pipeline and exposes its single entry point.
///
/// Ordering is deliberately not part of [`resolve`](Self::resolve): the
/// caller runs [`OrderingEngine::sort`](crate::OrderingEngine::sort) on the
/// returned candidates before materializing units.
#[derive(Debug)]
pub struct Orchestrator {
    registry: ProviderRegistry,
    filter_chain: FastFilterChain,
    exclusions: ExclusionResolver,
    publisher: ImportEventPublisher,
}

impl Orchestrator {
    pub fn new(
        registry: ProviderRegistry,
        filter_chain: FastFilterChain,
        exclusions: ExclusionResolver,
        publisher: ImportEventPublisher,
    ) -> Self {
        Self {
            registry,
            filter_chain,
            exclusions,
            publisher,
        }
    }

    /// Runs one resolution pass: master switch, candidate loading, dedup,
    /// exclusion, fast filtering, and the import event.
    pub fn resolve(&self, declaration: &ImportDeclaration) -> Result<ResolutionResult> {
        if !self.exclusions.is_enabled()? {
            tracing::debug!("auto-configuration disabled by master switch");
            return Ok(ResolutionResult::empty());
        }

        let raw = self.registry.load_candidates(UNITS_TRIGGER);
        let candidates = CandidateSet::dedupe(raw);

        let excludes = self
            .exclusions
            .resolve(&declaration.exclude_names, &declaration.exclude_types)?;
        let candidates = candidates.without(&excludes);

        let candidates = self.filter_chain.filter(candidates)?;

        self.publisher
            .publish(&self.registry, &candidates, &excludes)?;

        Ok(ResolutionResult {
            candidates,
            excludes,
        })
    }
}
