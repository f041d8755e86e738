//! Declarative activation conditions.
//!
//! A [`Condition`] is pure data attached to a unit's attributes; evaluation
//! against the runtime context lives in the engine crate. The tagged-variant
//! representation keeps the set of supported condition kinds closed and
//! exhaustively matched.

use std::fmt;

use crate::version::{RuntimeVersion, VersionComparator};

/// Discriminant naming a condition variant, used in diagnostics and the
/// evaluation report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConditionKind {
    RuntimeVersion,
    ResourcePresence,
    WebApplicationType,
    PropertyValue,
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RuntimeVersion => "RuntimeVersion",
            Self::ResourcePresence => "ResourcePresence",
            Self::WebApplicationType => "WebApplicationType",
            Self::PropertyValue => "PropertyValue",
        };
        f.write_str(name)
    }
}

/// The flavor of web runtime a unit may require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WebApplicationType {
    /// Blocking, servlet-style request handling.
    Servlet,
    /// Event-loop, reactive-style request handling.
    Reactive,
}

impl WebApplicationType {
    /// The marker type whose presence identifies this flavor at runtime.
    pub fn marker_type(self) -> &'static str {
        match self {
            Self::Servlet => "web::servlet::Server",
            Self::Reactive => "web::reactive::Server",
        }
    }
}

impl fmt::Display for WebApplicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Servlet => f.write_str("servlet"),
            Self::Reactive => f.write_str("reactive"),
        }
    }
}

/// A declared boolean predicate over the runtime context.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Compares the running platform version against a declared one.
    RuntimeVersion {
        comparator: VersionComparator,
        version: RuntimeVersion,
    },
    /// Requires every listed resource location to exist. Locations may
    /// contain `${...}` placeholders resolved against the environment.
    ResourcePresence { locations: Vec<String> },
    /// Requires a particular web runtime flavor; `None` matches any.
    WebApplicationType { required: Option<WebApplicationType> },
    /// Compares a configuration property against expected values. An empty
    /// expectation list only requires the property to be present.
    PropertyValue {
        name: String,
        expected: Vec<String>,
        match_if_missing: bool,
    },
}

impl Condition {
    pub fn kind(&self) -> ConditionKind {
        match self {
            Self::RuntimeVersion { .. } => ConditionKind::RuntimeVersion,
            Self::ResourcePresence { .. } => ConditionKind::ResourcePresence,
            Self::WebApplicationType { .. } => ConditionKind::WebApplicationType,
            Self::PropertyValue { .. } => ConditionKind::PropertyValue,
        }
    }
}
