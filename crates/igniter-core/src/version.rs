//! Runtime version values used by version conditions.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error parsing a runtime version string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionParseError {
    #[error("empty version string")]
    Empty,

    #[error("invalid version component '{0}'")]
    InvalidComponent(String),

    #[error("too many version components in '{0}' (at most major.minor.patch)")]
    TooManyComponents(String),
}

/// A platform version in `major.minor.patch` form.
///
/// Missing components default to zero, so `"2"`, `"2.0"` and `"2.0.0"` are
/// the same version. Ordering is lexicographic over the three components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuntimeVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl RuntimeVersion {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for RuntimeVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(VersionParseError::Empty);
        }
        let mut components = [0u32; 3];
        let mut count = 0;
        for part in s.split('.') {
            if count == 3 {
                return Err(VersionParseError::TooManyComponents(s.to_owned()));
            }
            components[count] = part
                .parse()
                .map_err(|_| VersionParseError::InvalidComponent(part.to_owned()))?;
            count += 1;
        }
        Ok(Self::new(components[0], components[1], components[2]))
    }
}

/// Comparator declared alongside a required version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VersionComparator {
    /// Matches when the running version is equal to or newer than required.
    EqualOrNewer,
    /// Matches when the running version is strictly older than required.
    OlderThan,
}

impl VersionComparator {
    /// Applies the comparator to a running version against a required one.
    pub fn matches(self, running: RuntimeVersion, required: RuntimeVersion) -> bool {
        match self {
            Self::EqualOrNewer => running >= required,
            Self::OlderThan => running < required,
        }
    }
}

impl fmt::Display for VersionComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EqualOrNewer => f.write_str(">="),
            Self::OlderThan => f.write_str("<"),
        }
    }
}
