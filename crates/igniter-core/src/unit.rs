//! Unit identifiers and the candidate/exclusion collections built from them.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;

/// Opaque, globally-unique name of a configuration unit.
///
/// The resolution engine never parses the identifier; it is only compared,
/// hashed, and echoed back in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitId(String);

impl UnitId {
    /// Creates a unit identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UnitId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for UnitId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for UnitId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Ordered sequence of unit identifiers with no duplicates.
///
/// Insertion order is preserved from the first occurrence of each identifier;
/// later duplicates are silently dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    ids: Vec<UnitId>,
}

impl CandidateSet {
    /// Creates an empty candidate set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deduplicates a raw identifier sequence, keeping first occurrences in
    /// their original relative order.
    pub fn dedupe(ids: impl IntoIterator<Item = UnitId>) -> Self {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for id in ids {
            if seen.insert(id.clone()) {
                out.push(id);
            }
        }
        Self { ids: out }
    }

    pub fn contains(&self, id: &UnitId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UnitId> {
        self.ids.iter()
    }

    pub fn as_slice(&self) -> &[UnitId] {
        &self.ids
    }

    /// Returns a copy with every excluded identifier removed, preserving the
    /// relative order of the survivors.
    pub fn without(&self, excludes: &ExclusionSet) -> Self {
        Self {
            ids: self
                .ids
                .iter()
                .filter(|id| !excludes.contains(id))
                .cloned()
                .collect(),
        }
    }

    pub fn into_vec(self) -> Vec<UnitId> {
        self.ids
    }
}

impl FromIterator<UnitId> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = UnitId>>(iter: I) -> Self {
        Self::dedupe(iter)
    }
}

impl IntoIterator for CandidateSet {
    type Item = UnitId;
    type IntoIter = std::vec::IntoIter<UnitId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.into_iter()
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a UnitId;
    type IntoIter = std::slice::Iter<'a, UnitId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

/// Unit identifiers that must never appear in the final candidate list,
/// regardless of how they were discovered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    ids: HashSet<UnitId>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: UnitId) {
        self.ids.insert(id);
    }

    pub fn contains(&self, id: &UnitId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UnitId> {
        self.ids.iter()
    }
}

impl FromIterator<UnitId> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = UnitId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl Extend<UnitId> for ExclusionSet {
    fn extend<I: IntoIterator<Item = UnitId>>(&mut self, iter: I) {
        self.ids.extend(iter);
    }
}
