//! Provider registry: aggregation of unit lists from independent sources.
//!
//! Each provider source is an append-only text resource mapping trigger keys
//! to unit identifier lists. Sources contributing to the same key are
//! concatenated in discovery order; no merge conflict detection is performed
//! and no deduplication happens here (the orchestrator dedupes).

use std::path::Path;

use igniter_core::UnitId;

use crate::error::{EngineError, Result};

/// One parsed provider source.
///
/// Line format: `triggerKey = id1, id2, ...`. Blank lines and `#` comments
/// are skipped. A repeated key within one source concatenates in file order.
/// A malformed line is a fatal startup failure.
#[derive(Debug, Clone)]
pub struct ProviderTable {
    name: String,
    entries: Vec<(String, Vec<UnitId>)>,
}

impl ProviderTable {
    /// Parses one source; `name` is used in error context only.
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self> {
        let name = name.into();
        let mut entries = Vec::new();
        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let line_number = index + 1;
            let (key, values) = line.split_once('=').ok_or_else(|| {
                EngineError::MalformedProvider {
                    src: name.clone(),
                    line: line_number,
                    reason: "expected 'triggerKey = unit, unit, ...'".to_owned(),
                }
            })?;
            let key = key.trim();
            if key.is_empty() {
                return Err(EngineError::MalformedProvider {
                    src: name,
                    line: line_number,
                    reason: "empty trigger key".to_owned(),
                });
            }
            let ids: Vec<UnitId> = values
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(UnitId::from)
                .collect();
            if ids.is_empty() {
                return Err(EngineError::MalformedProvider {
                    src: name,
                    line: line_number,
                    reason: format!("no unit identifiers for trigger key '{key}'"),
                });
            }
            entries.push((key.to_owned(), ids));
        }
        Ok(Self { name, entries })
    }

    /// Reads and parses a provider file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| EngineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path.display().to_string(), &text)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All identifiers registered under a trigger key, in file order.
    pub fn ids_for<'a>(&'a self, trigger: &'a str) -> impl Iterator<Item = &'a UnitId> {
        self.entries
            .iter()
            .filter(move |(key, _)| key == trigger)
            .flat_map(|(_, ids)| ids.iter())
    }
}

/// Ordered aggregation of provider sources.
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    sources: Vec<ProviderTable>,
}

impl ProviderRegistry {
    /// Builds a registry over sources in discovery order.
    pub fn new(sources: Vec<ProviderTable>) -> Self {
        Self { sources }
    }

    pub fn add_source(&mut self, source: ProviderTable) {
        self.sources.push(source);
    }

    /// Concatenates every source's list for the trigger key, file order then
    /// provider order. Duplicates are preserved.
    pub fn load_candidates(&self, trigger: &str) -> Vec<UnitId> {
        self.sources
            .iter()
            .flat_map(|source| source.ids_for(trigger))
            .cloned()
            .collect()
    }
}
