//! Igniter Core - Core types for activation resolution
//!
//! This crate provides the fundamental abstractions shared by the
//! resolution engine:
//! - Unit identifiers and candidate/exclusion collections
//! - Declarative per-unit attributes (ordering hints, conditions)
//! - Condition outcomes, messages, and the evaluation report
//! - Runtime version values used by version conditions
//! - The type-presence oracle used for cheap capability checks

pub mod attributes;
pub mod condition;
pub mod outcome;
pub mod presence;
pub mod report;
pub mod unit;
pub mod version;

#[cfg(test)]
mod unit_tests;
#[cfg(test)]
mod version_tests;

pub use attributes::{AttributeCatalog, UnitAttributes};
pub use condition::{Condition, ConditionKind, WebApplicationType};
pub use outcome::{ConditionMessage, ConditionOutcome};
pub use presence::{StaticTypeRegistry, TypePresenceOracle};
pub use report::EvaluationReport;
pub use unit::{CandidateSet, ExclusionSet, UnitId};
pub use version::{RuntimeVersion, VersionComparator, VersionParseError};
