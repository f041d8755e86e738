//! Declarative per-unit attributes.
//!
//! Attributes are produced by an out-of-scope front-end parser and consumed
//! here as plain immutable structs; the engine never inspects how they were
//! built.

use std::collections::HashMap;

use crate::condition::Condition;
use crate::unit::UnitId;

/// Declared facts about one configuration unit.
#[derive(Debug, Clone, Default)]
pub struct UnitAttributes {
    /// Units that must activate before this one ("activate-after" targets).
    pub activate_after: Vec<UnitId>,
    /// Units this one should precede. Declared surface only; the shipped
    /// ordering pass does not consult it.
    pub activate_before: Vec<UnitId>,
    /// Conditions that must all match for the unit to be registered.
    pub conditions: Vec<Condition>,
}

impl UnitAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_activate_after(mut self, targets: impl IntoIterator<Item = UnitId>) -> Self {
        self.activate_after.extend(targets);
        self
    }

    pub fn with_activate_before(mut self, targets: impl IntoIterator<Item = UnitId>) -> Self {
        self.activate_before.extend(targets);
        self
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }
}

/// Lookup of declared attributes by unit identifier.
#[derive(Debug, Clone, Default)]
pub struct AttributeCatalog {
    entries: HashMap<UnitId, UnitAttributes>,
}

impl AttributeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: UnitId, attributes: UnitAttributes) {
        self.entries.insert(id, attributes);
    }

    pub fn get(&self, id: &UnitId) -> Option<&UnitAttributes> {
        self.entries.get(id)
    }

    /// The declared "activate-after" targets for a unit; empty when the unit
    /// has no attributes.
    pub fn activate_after(&self, id: &UnitId) -> &[UnitId] {
        self.entries
            .get(id)
            .map(|attrs| attrs.activate_after.as_slice())
            .unwrap_or_default()
    }

    /// The declared conditions for a unit; empty when the unit has none.
    pub fn conditions(&self, id: &UnitId) -> &[Condition] {
        self.entries
            .get(id)
            .map(|attrs| attrs.conditions.as_slice())
            .unwrap_or_default()
    }
}

impl FromIterator<(UnitId, UnitAttributes)> for AttributeCatalog {
    fn from_iter<I: IntoIterator<Item = (UnitId, UnitAttributes)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
