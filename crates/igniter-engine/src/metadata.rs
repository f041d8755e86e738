//! Metadata sidecar: cheap declarative facts about units.
//!
//! The sidecar is a flat key/value text resource with composite keys of the
//! form `<unitId>.<propertyKey>`. A lookup miss means "unknown", and fast
//! filters must treat unknown conservatively (do not reject).

use std::collections::HashMap;
use std::path::Path;

use igniter_core::UnitId;

use crate::error::{EngineError, Result};

/// Read-only lookup of per-unit declarative facts.
#[derive(Debug, Clone, Default)]
pub struct MetadataStore {
    entries: HashMap<String, String>,
}

impl MetadataStore {
    /// A store with no entries; every lookup is "unknown".
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses the sidecar text. Lines are `unitId.propertyKey = value`;
    /// blank lines and `#` comments are skipped; malformed lines are fatal.
    pub fn parse(text: &str) -> Result<Self> {
        let mut entries = HashMap::new();
        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (key, value) = line.split_once('=').ok_or_else(|| {
                EngineError::MalformedMetadata {
                    line: index + 1,
                    reason: "expected 'unitId.propertyKey = value'".to_owned(),
                }
            })?;
            let key = key.trim();
            if !key.contains('.') {
                return Err(EngineError::MalformedMetadata {
                    line: index + 1,
                    reason: format!("key '{key}' is not a '<unitId>.<propertyKey>' composite"),
                });
            }
            entries.insert(key.to_owned(), value.trim().to_owned());
        }
        Ok(Self { entries })
    }

    /// Reads and parses a sidecar file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| EngineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Raw value for a unit's property; `None` means unknown.
    pub fn get(&self, unit: &UnitId, key: &str) -> Option<&str> {
        self.entries
            .get(&format!("{unit}.{key}"))
            .map(String::as_str)
    }

    /// Comma-delimited value parsed into an ordered list; `None` means
    /// unknown (distinct from an explicitly empty value).
    pub fn get_set(&self, unit: &UnitId, key: &str) -> Option<Vec<String>> {
        self.get(unit, key).map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_owned)
                .collect()
        })
    }
}
