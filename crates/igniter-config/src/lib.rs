//! Configuration environment for Igniter.
//!
//! Load configuration properties from TOML or YAML files into an ordered
//! list of property sources, with earlier sources overriding later ones.
//!
//! # Examples
//!
//! Load an environment from a TOML string:
//!
//! ```
//! use igniter_config::Environment;
//!
//! let env = Environment::from_toml_str(r#"
//!     [igniter]
//!     enabled = true
//!     exclude = ["unit-a", "unit-b"]
//!
//!     [datastore]
//!     url = "postgres://localhost/app"
//! "#).unwrap();
//!
//! assert_eq!(env.get_bool("igniter.enabled", false).unwrap(), true);
//! assert_eq!(env.get_list("igniter.exclude"), vec!["unit-a", "unit-b"]);
//! assert_eq!(env.get("datastore.url"), Some("postgres://localhost/app"));
//! ```
//!
//! Resolve `${...}` placeholders against the environment:
//!
//! ```
//! use igniter_config::{Environment, PropertySource};
//!
//! let env = Environment::new()
//!     .with_source(PropertySource::from_pairs("defaults", [("app.home", "/opt/app")]));
//! assert_eq!(env.resolve_placeholders("${app.home}/conf").unwrap(), "/opt/app/conf");
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("could not resolve placeholder '${{{0}}}'")]
    UnresolvablePlaceholder(String),

    #[error("invalid boolean value '{value}' for property '{key}'")]
    InvalidBool { key: String, value: String },
}

/// One named set of flat string properties.
///
/// Nested TOML/YAML tables flatten to dotted keys; scalar arrays flatten to
/// comma-joined strings, the engine's list convention.
#[derive(Debug, Clone)]
pub struct PropertySource {
    name: String,
    values: BTreeMap<String, String>,
}

impl PropertySource {
    /// Builds a source from key/value pairs.
    pub fn from_pairs<K, V>(name: impl Into<String>, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Parses a source from a TOML string.
    pub fn from_toml_str(name: impl Into<String>, s: &str) -> Result<Self, ConfigError> {
        let value: toml::Value = toml::from_str(s)?;
        let mut values = BTreeMap::new();
        flatten_toml("", &value, &mut values);
        Ok(Self {
            name: name.into(),
            values,
        })
    }

    /// Parses a source from a YAML string.
    pub fn from_yaml_str(name: impl Into<String>, s: &str) -> Result<Self, ConfigError> {
        let value: serde_yaml::Value = serde_yaml::from_str(s)?;
        let mut values = BTreeMap::new();
        flatten_yaml("", &value, &mut values);
        Ok(Self {
            name: name.into(),
            values,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

fn flatten_toml(prefix: &str, value: &toml::Value, out: &mut BTreeMap<String, String>) {
    match value {
        toml::Value::Table(table) => {
            for (key, child) in table {
                let full = join_key(prefix, key);
                flatten_toml(&full, child, out);
            }
        }
        toml::Value::Array(items) => {
            let joined = items
                .iter()
                .map(toml_scalar_to_string)
                .collect::<Vec<_>>()
                .join(",");
            out.insert(prefix.to_owned(), joined);
        }
        other => {
            out.insert(prefix.to_owned(), toml_scalar_to_string(other));
        }
    }
}

fn toml_scalar_to_string(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn flatten_yaml(prefix: &str, value: &serde_yaml::Value, out: &mut BTreeMap<String, String>) {
    match value {
        serde_yaml::Value::Mapping(mapping) => {
            for (key, child) in mapping {
                if let serde_yaml::Value::String(key) = key {
                    let full = join_key(prefix, key);
                    flatten_yaml(&full, child, out);
                }
            }
        }
        serde_yaml::Value::Sequence(items) => {
            let joined = items
                .iter()
                .map(yaml_scalar_to_string)
                .collect::<Vec<_>>()
                .join(",");
            out.insert(prefix.to_owned(), joined);
        }
        serde_yaml::Value::Null => {}
        other => {
            out.insert(prefix.to_owned(), yaml_scalar_to_string(other));
        }
    }
}

fn yaml_scalar_to_string(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::String(s) => s.clone(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        other => serde_yaml::to_string(other).unwrap_or_default().trim().to_owned(),
    }
}

fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_owned()
    } else {
        format!("{prefix}.{key}")
    }
}

/// Ordered collection of property sources.
///
/// Lookup walks the sources in order; the first source defining a key wins.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    sources: Vec<PropertySource>,
}

impl Environment {
    /// Creates an environment with no sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a source with lower precedence than the existing ones.
    pub fn with_source(mut self, source: PropertySource) -> Self {
        self.sources.push(source);
        self
    }

    /// Single-source environment from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(Self::new().with_source(PropertySource::from_toml_str("toml", s)?))
    }

    /// Single-source environment from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Single-source environment from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(Self::new().with_source(PropertySource::from_yaml_str("yaml", s)?))
    }

    /// Single-source environment from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Looks a property up across all sources.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.sources.iter().find_map(|source| source.get(key))
    }

    /// Reads a boolean property, falling back to `default` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error when the property is present but is not `true` or
    /// `false` (case-insensitive).
    pub fn get_bool(&self, key: &str, default: bool) -> Result<bool, ConfigError> {
        match self.get(key) {
            None => Ok(default),
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(ConfigError::InvalidBool {
                    key: key.to_owned(),
                    value: value.to_owned(),
                }),
            },
        }
    }

    /// Reads a comma-delimited list property; an absent key yields an empty
    /// list.
    pub fn get_list(&self, key: &str) -> Vec<String> {
        self.get(key)
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Substitutes every `${key}` occurrence in `text` with the property's
    /// value.
    ///
    /// # Errors
    ///
    /// Returns an error for an unterminated or unresolvable placeholder;
    /// replaced text is not re-scanned.
    pub fn resolve_placeholders(&self, text: &str) -> Result<String, ConfigError> {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        while let Some(start) = rest.find("${") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let end = after
                .find('}')
                .ok_or_else(|| ConfigError::UnresolvablePlaceholder(after.to_owned()))?;
            let key = &after[..end];
            let value = self
                .get(key)
                .ok_or_else(|| ConfigError::UnresolvablePlaceholder(key.to_owned()))?;
            out.push_str(value);
            rest = &after[end + 1..];
        }
        out.push_str(rest);
        Ok(out)
    }
}

#[cfg(test)]
mod tests;
