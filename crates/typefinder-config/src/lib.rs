//! Configuration system for TypeFinder.
//!
//! Describe discovery queries in TOML or YAML files so the set of discovered
//! types can change without code changes.
//!
//! # Examples
//!
//! Load named queries from a TOML string:
//!
//! ```
//! use typefinder_config::FinderConfig;
//!
//! let config = FinderConfig::from_toml_str(r#"
//!     [queries.handlers]
//!     name_pattern = "Handler$"
//!     parameterless_constructor = true
//!
//!     [queries.models]
//!     namespace = "app::models"
//! "#).unwrap();
//!
//! assert_eq!(config.queries.len(), 2);
//! assert!(config.query("handlers").unwrap().parameterless_constructor);
//! ```
//!
//! Apply a query onto a builder:
//!
//! ```
//! use typefinder_config::QueryConfig;
//! use typefinder_core::{ModuleInfo, TypeDescriptor, TypeFinder, TypeInfo};
//!
//! struct LoginHandler;
//! struct Session;
//!
//! let module = ModuleInfo::new("app")
//!     .with_type(TypeInfo::of::<LoginHandler>())
//!     .with_type(TypeInfo::of::<Session>());
//!
//! let config = QueryConfig::new().with_name_pattern("Handler$");
//! let finder = config.apply(TypeFinder::new([&module])).unwrap();
//! let names: Vec<_> = finder.into_iter().map(|t| t.name()).collect();
//! assert_eq!(names, vec!["LoginHandler"]);
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use typefinder_core::{FinderError, GenericDef, Module, TypeDescriptor, TypeFinder, TypeKey};

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error(transparent)]
    Finder(#[from] FinderError),
}

/// A set of named discovery queries.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FinderConfig {
    /// Queries by name.
    #[serde(default)]
    pub queries: BTreeMap<String, QueryConfig>,
}

impl FinderConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        from_toml_file(path)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        from_yaml_file(path)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Adds a named query.
    pub fn with_query(mut self, name: impl Into<String>, query: QueryConfig) -> Self {
        self.queries.insert(name.into(), query);
        self
    }

    /// Returns the query called `name`.
    pub fn query(&self, name: &str) -> Option<&QueryConfig> {
        self.queries.get(name)
    }

    /// Applies the query called `name` onto `finder`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if no such query exists, or the
    /// errors of [`QueryConfig::apply`].
    pub fn apply<'a, M: Module>(
        &self,
        name: &str,
        finder: TypeFinder<'a, M>,
    ) -> Result<TypeFinder<'a, M>, ConfigError> {
        let query = self
            .query(name)
            .ok_or_else(|| ConfigError::Invalid(format!("unknown query `{}`", name)))?;
        query.apply(finder)
    }
}

/// One discovery query. Every field is optional; unset fields add no rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct QueryConfig {
    /// Full names of types to exclude.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Full name of a type or trait that results must extend or implement.
    #[serde(default)]
    pub inherits: Option<String>,

    /// Path of a generic definition among the ancestors of results.
    #[serde(default)]
    pub inherits_generic: Option<String>,

    /// Pattern the simple name must match.
    #[serde(default)]
    pub name_pattern: Option<String>,

    /// Pattern the full name must match.
    #[serde(default)]
    pub full_name_pattern: Option<String>,

    /// Exact namespace of results.
    #[serde(default)]
    pub namespace: Option<String>,

    /// Whether results need a public zero-argument constructor.
    #[serde(default)]
    pub parameterless_constructor: bool,
}

impl QueryConfig {
    /// Creates an empty query that accepts every type.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a single query from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        from_toml_file(path)
    }

    /// Parses a single query from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads a single query from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        from_yaml_file(path)
    }

    /// Parses a single query from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Adds a type to exclude.
    pub fn with_exclude(mut self, full_name: impl Into<String>) -> Self {
        self.exclude.push(full_name.into());
        self
    }

    /// Sets the required base type.
    pub fn with_inherits(mut self, full_name: impl Into<String>) -> Self {
        self.inherits = Some(full_name.into());
        self
    }

    /// Sets the required generic definition.
    pub fn with_inherits_generic(mut self, path: impl Into<String>) -> Self {
        self.inherits_generic = Some(path.into());
        self
    }

    /// Sets the name pattern.
    pub fn with_name_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.name_pattern = Some(pattern.into());
        self
    }

    /// Sets the full name pattern.
    pub fn with_full_name_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.full_name_pattern = Some(pattern.into());
        self
    }

    /// Sets the namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Requires a public zero-argument constructor.
    pub fn with_parameterless_constructor(mut self) -> Self {
        self.parameterless_constructor = true;
        self
    }

    /// Appends the configured rules onto `finder`.
    ///
    /// Rules are appended in field order: exclude, inherits, inherits_generic,
    /// name_pattern, full_name_pattern, namespace, parameterless_constructor.
    /// Type names are resolved against the finder's own modules.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::InvalidArgument`] for a type name no module
    /// declares or an empty generic path, and [`FinderError::InvalidPattern`]
    /// for a pattern that does not compile.
    pub fn apply<'a, M: Module>(
        &self,
        finder: TypeFinder<'a, M>,
    ) -> Result<TypeFinder<'a, M>, ConfigError> {
        let mut finder = finder;

        if !self.exclude.is_empty() {
            let keys = self
                .exclude
                .iter()
                .map(|name| resolve(&finder, name))
                .collect::<Result<Vec<_>, _>>()?;
            finder = finder.excluding(keys);
        }
        if let Some(name) = &self.inherits {
            let base = resolve(&finder, name)?;
            finder = finder.that_inherit(base);
        }
        if let Some(path) = &self.inherits_generic {
            if path.is_empty() {
                return Err(FinderError::InvalidArgument(
                    "empty generic definition path".to_string(),
                )
                .into());
            }
            finder = finder.that_inherit_generic_type(GenericDef::new(path.clone()));
        }
        if let Some(pattern) = &self.name_pattern {
            finder = finder.whose_name_matches(pattern)?;
        }
        if let Some(pattern) = &self.full_name_pattern {
            finder = finder.whose_full_name_matches(pattern)?;
        }
        if let Some(namespace) = &self.namespace {
            finder = finder.in_namespace(namespace.clone());
        }
        if self.parameterless_constructor {
            finder = finder.with_parameterless_constructor();
        }

        debug!(event = "config_applied", rules = finder.rule_count());
        Ok(finder)
    }
}

// Looks a full name up in the finder's modules, in visiting order.
fn resolve<M: Module>(finder: &TypeFinder<'_, M>, full_name: &str) -> Result<TypeKey, FinderError> {
    finder
        .modules()
        .iter()
        .find_map(|m| m.find_by_full_name(full_name))
        .map(|t| t.key())
        .ok_or_else(|| {
            FinderError::InvalidArgument(format!("no module declares type `{}`", full_name))
        })
}

fn from_toml_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

fn from_yaml_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&contents)?)
}
