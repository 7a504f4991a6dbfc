//! Built-in rules.

use regex::Regex;
use tracing::debug;

use super::traits::Rule;
use crate::descriptor::{GenericDef, TypeDescriptor, TypeKey};
use crate::error::{FinderError, Result};

/// Rejects an explicit list of types.
#[derive(Debug, Clone, Default)]
pub struct ExcludeTypesRule {
    excluded: Vec<TypeKey>,
}

impl ExcludeTypesRule {
    /// Creates a rule rejecting every type in `excluded`.
    pub fn new(excluded: impl IntoIterator<Item = TypeKey>) -> Self {
        ExcludeTypesRule {
            excluded: excluded.into_iter().collect(),
        }
    }

    /// Returns the excluded keys.
    pub fn excluded(&self) -> &[TypeKey] {
        &self.excluded
    }
}

impl Rule for ExcludeTypesRule {
    fn complies(&self, ty: &dyn TypeDescriptor) -> bool {
        !self.excluded.contains(&ty.key())
    }

    fn describe(&self) -> String {
        format!("excluding({})", self.excluded.len())
    }
}

/// Accepts strict subtypes and implementors of a base type.
///
/// The base type itself does not comply.
#[derive(Debug, Clone, Copy)]
pub struct InheritanceRule {
    base: TypeKey,
}

impl InheritanceRule {
    pub fn new(base: TypeKey) -> Self {
        InheritanceRule { base }
    }
}

impl Rule for InheritanceRule {
    fn complies(&self, ty: &dyn TypeDescriptor) -> bool {
        ty.key() != self.base && ty.is_assignable_to(self.base)
    }

    fn describe(&self) -> String {
        format!("inherits({})", self.base)
    }
}

/// Accepts types with an ancestor or interface that is a form of a generic
/// definition, open or closed.
#[derive(Debug, Clone)]
pub struct GenericInheritanceRule {
    definition: GenericDef,
}

impl GenericInheritanceRule {
    pub fn new(definition: GenericDef) -> Self {
        GenericInheritanceRule { definition }
    }
}

impl Rule for GenericInheritanceRule {
    fn complies(&self, ty: &dyn TypeDescriptor) -> bool {
        ty.generic_base_types().contains(&self.definition)
    }

    fn describe(&self) -> String {
        format!("inherits_generic({})", self.definition)
    }
}

/// Which name a [`NameRegexRule`] matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameTarget {
    /// The simple name.
    Name,
    /// The qualified name.
    FullName,
}

/// Accepts types whose name matches a regular expression.
#[derive(Debug, Clone)]
pub struct NameRegexRule {
    regex: Regex,
    target: NameTarget,
}

impl NameRegexRule {
    /// Compiles `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::InvalidPattern`] if the pattern does not compile.
    pub fn new(pattern: &str, target: NameTarget) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| FinderError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(NameRegexRule { regex, target })
    }

    /// Returns the source pattern.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl Rule for NameRegexRule {
    fn complies(&self, ty: &dyn TypeDescriptor) -> bool {
        match self.target {
            NameTarget::Name => self.regex.is_match(ty.name()),
            NameTarget::FullName => match ty.full_name() {
                Some(full_name) => self.regex.is_match(full_name),
                None => {
                    debug!(event = "undefined_full_name", type_name = ty.name());
                    false
                }
            },
        }
    }

    fn describe(&self) -> String {
        match self.target {
            NameTarget::Name => format!("name =~ /{}/", self.regex),
            NameTarget::FullName => format!("full_name =~ /{}/", self.regex),
        }
    }
}

/// Accepts types declared exactly in a namespace.
///
/// No prefix matching: `app::models` does not accept `app::models::sub`.
/// The empty namespace also accepts types in the global namespace, whose
/// namespace is `None`, so `in_namespace("")` selects top-level types.
#[derive(Debug, Clone)]
pub struct InNamespaceRule {
    namespace: String,
}

impl InNamespaceRule {
    pub fn new(namespace: impl Into<String>) -> Self {
        InNamespaceRule {
            namespace: namespace.into(),
        }
    }
}

impl Rule for InNamespaceRule {
    fn complies(&self, ty: &dyn TypeDescriptor) -> bool {
        match ty.namespace() {
            Some(ns) => ns == self.namespace,
            None => self.namespace.is_empty(),
        }
    }

    fn describe(&self) -> String {
        format!("in_namespace({})", self.namespace)
    }
}

/// Accepts instantiable types with a public zero-argument constructor.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParameterlessConstructorRule;

impl Rule for ParameterlessConstructorRule {
    fn complies(&self, ty: &dyn TypeDescriptor) -> bool {
        !ty.is_abstract() && ty.has_parameterless_constructor()
    }

    fn describe(&self) -> String {
        "parameterless_constructor".to_string()
    }
}
