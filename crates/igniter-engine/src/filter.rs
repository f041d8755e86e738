//! Batch fast filters over the metadata sidecar.
//!
//! Fast filters eliminate obviously-inapplicable candidates before any
//! expensive per-unit evaluation runs. Each filter is invoked once per pass
//! with the entire candidate slot array, which amortizes metadata lookups
//! across the whole pool when it holds hundreds of units.

use std::cell::OnceCell;
use std::fmt::Debug;
use std::path::PathBuf;
use std::sync::Arc;

use igniter_core::{CandidateSet, TypePresenceOracle, UnitId};

use crate::error::{EngineError, Result};
use crate::metadata::MetadataStore;

/// A batch pre-filter over the candidate pool.
///
/// `matches` receives the whole current slot array (a `None` slot was
/// eliminated by an earlier filter and is simply passed through) and must
/// return one boolean per slot, indexed by original position. Rejecting an
/// already-`None` slot has no effect. Unknown metadata must be treated
/// conservatively: do not reject what you cannot see.
pub trait FastFilter: Debug {
    fn matches(&self, candidates: &[Option<UnitId>], metadata: &MetadataStore) -> Vec<bool>;
}

/// Where the filter chain loads its metadata sidecar from.
#[derive(Debug, Clone)]
pub enum MetadataSource {
    /// No sidecar; every lookup is unknown.
    Empty,
    /// Sidecar text held in memory.
    Text(String),
    /// Sidecar file read on first use.
    File(PathBuf),
}

impl MetadataSource {
    fn load(&self) -> Result<MetadataStore> {
        match self {
            Self::Empty => Ok(MetadataStore::empty()),
            Self::Text(text) => MetadataStore::parse(text),
            Self::File(path) => MetadataStore::from_file(path),
        }
    }
}

/// Runs registered fast filters over a candidate set.
///
/// The metadata store is loaded lazily on first use and cached for the
/// lifetime of the chain. One chain instance belongs to one bootstrap
/// thread; it is not meant to be shared across concurrently bootstrapping
/// containers.
#[derive(Debug)]
pub struct FastFilterChain {
    filters: Vec<Box<dyn FastFilter>>,
    source: MetadataSource,
    metadata: OnceCell<MetadataStore>,
}

impl FastFilterChain {
    pub fn new(source: MetadataSource) -> Self {
        Self {
            filters: Vec::new(),
            source,
            metadata: OnceCell::new(),
        }
    }

    /// Appends a filter; filters run strictly in registration order.
    pub fn with_filter(mut self, filter: Box<dyn FastFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn add_filter(&mut self, filter: Box<dyn FastFilter>) {
        self.filters.push(filter);
    }

    fn metadata(&self) -> Result<&MetadataStore> {
        if let Some(metadata) = self.metadata.get() {
            return Ok(metadata);
        }
        let loaded = self.source.load()?;
        Ok(self.metadata.get_or_init(|| loaded))
    }

    /// Applies every filter and compacts the surviving candidates,
    /// preserving relative order.
    pub fn filter(&self, candidates: CandidateSet) -> Result<CandidateSet> {
        if self.filters.is_empty() {
            return Ok(candidates);
        }
        let metadata = self.metadata()?;
        let mut slots: Vec<Option<UnitId>> =
            candidates.into_vec().into_iter().map(Some).collect();
        for filter in &self.filters {
            let matches = filter.matches(&slots, metadata);
            if matches.len() != slots.len() {
                return Err(EngineError::FilterContract {
                    filter: format!("{filter:?}"),
                    expected: slots.len(),
                    got: matches.len(),
                });
            }
            for (slot, matched) in slots.iter_mut().zip(matches) {
                if !matched {
                    if let Some(id) = slot.take() {
                        tracing::debug!(unit = %id, ?filter, "candidate rejected by fast filter");
                    }
                }
            }
        }
        Ok(slots.into_iter().flatten().collect())
    }
}

/// Polarity of a [`TypePresenceFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Presence {
    Required,
    Forbidden,
}

/// Filter driven by type names listed in the metadata sidecar.
///
/// With `requires` polarity a slot survives only when every listed type is
/// present in the oracle; with `conflicts` polarity any present type rejects
/// the slot. A unit without a metadata entry always survives.
#[derive(Debug)]
pub struct TypePresenceFilter {
    key: &'static str,
    polarity: Presence,
    types: Arc<dyn TypePresenceOracle>,
}

impl TypePresenceFilter {
    /// Metadata key naming types a unit needs.
    pub const REQUIRES_KEY: &'static str = "requires";
    /// Metadata key naming types a unit cannot coexist with.
    pub const CONFLICTS_KEY: &'static str = "conflicts";

    pub fn requires(types: Arc<dyn TypePresenceOracle>) -> Self {
        Self {
            key: Self::REQUIRES_KEY,
            polarity: Presence::Required,
            types,
        }
    }

    pub fn conflicts(types: Arc<dyn TypePresenceOracle>) -> Self {
        Self {
            key: Self::CONFLICTS_KEY,
            polarity: Presence::Forbidden,
            types,
        }
    }
}

impl FastFilter for TypePresenceFilter {
    fn matches(&self, candidates: &[Option<UnitId>], metadata: &MetadataStore) -> Vec<bool> {
        candidates
            .iter()
            .map(|slot| match slot {
                // Already-eliminated slots are passed through.
                None => true,
                Some(id) => match metadata.get_set(id, self.key) {
                    // Unknown metadata never rejects.
                    None => true,
                    Some(names) => match self.polarity {
                        Presence::Required => {
                            names.iter().all(|name| self.types.contains(name))
                        }
                        Presence::Forbidden => {
                            !names.iter().any(|name| self.types.contains(name))
                        }
                    },
                },
            })
            .collect()
    }
}
