//! Fluent query builder.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use super::{Matches, TypeQuery};
use crate::descriptor::{GenericDef, Module, TypeDescriptor, TypeKey};
use crate::error::Result;
use crate::rule::{
    ExcludeTypesRule, FnRule, GenericInheritanceRule, InNamespaceRule, InheritanceRule,
    NameRegexRule, NameTarget, ParameterlessConstructorRule, Rule, RuleChain,
};

/// Builder for a type query over a fixed list of modules.
///
/// Every method appends one rule; all rules must pass for a type to be
/// returned. Rules of the same kind are not merged, so two different
/// namespaces simply never match.
///
/// # Example
///
/// ```
/// use typefinder_core::{ModuleInfo, TypeDescriptor, TypeFinder, TypeInfo};
///
/// trait Command {}
/// struct Start;
/// struct Stop;
/// struct Config;
///
/// let command = TypeInfo::of::<dyn Command>().interface();
/// let module = ModuleInfo::new("cli")
///     .with_type(command.clone())
///     .with_type(TypeInfo::of::<Start>().implements(&command).constructible())
///     .with_type(TypeInfo::of::<Stop>().implements(&command))
///     .with_type(TypeInfo::of::<Config>().constructible());
///
/// let query = TypeFinder::new([&module])
///     .that_inherit_type::<dyn Command>()
///     .with_parameterless_constructor()
///     .build();
///
/// let names: Vec<_> = query.iter().map(|t| t.name()).collect();
/// assert_eq!(names, vec!["Start"]);
/// ```
///
/// A built query has no configuration methods:
///
/// ```compile_fail
/// use typefinder_core::{ModuleInfo, TypeFinder};
///
/// let module = ModuleInfo::new("empty");
/// let query = TypeFinder::new([&module]).build();
/// let query = query.in_namespace("app");
/// ```
pub struct TypeFinder<'a, M: Module> {
    modules: Vec<&'a M>,
    chain: Option<Arc<RuleChain>>,
}

impl<'a, M: Module> TypeFinder<'a, M> {
    /// Creates a builder over `modules`, visited in the given order.
    ///
    /// An empty list is valid and yields no types.
    pub fn new(modules: impl IntoIterator<Item = &'a M>) -> Self {
        TypeFinder {
            modules: modules.into_iter().collect(),
            chain: None,
        }
    }

    /// Appends an arbitrary rule.
    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        let chain = RuleChain::combine(self.chain.take(), Box::new(rule));
        debug!(
            event = "rule_added",
            rule = %chain.rule().describe(),
            depth = chain.len(),
        );
        self.chain = Some(chain);
        self
    }

    /// Appends a rule implemented by a closure.
    pub fn filter<F>(self, f: F) -> Self
    where
        F: Fn(&dyn TypeDescriptor) -> bool + Send + Sync + 'static,
    {
        self.with_rule(FnRule::new(f))
    }

    /// Excludes specific types from the result.
    pub fn excluding(self, types: impl IntoIterator<Item = TypeKey>) -> Self {
        self.with_rule(ExcludeTypesRule::new(types))
    }

    /// Excludes the Rust type `T` from the result.
    pub fn excluding_type<T: ?Sized + 'static>(self) -> Self {
        self.excluding([TypeKey::of::<T>()])
    }

    /// Keeps types that extend or implement `base`, excluding `base` itself.
    pub fn that_inherit(self, base: TypeKey) -> Self {
        self.with_rule(InheritanceRule::new(base))
    }

    /// Keeps types that extend or implement the Rust type `T`, such as `dyn Plugin`.
    pub fn that_inherit_type<T: ?Sized + 'static>(self) -> Self {
        self.that_inherit(TypeKey::of::<T>())
    }

    /// Keeps types descending from a form of the generic definition.
    pub fn that_inherit_generic_type(self, definition: GenericDef) -> Self {
        self.with_rule(GenericInheritanceRule::new(definition))
    }

    /// Keeps types whose simple name matches `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::InvalidPattern`](crate::FinderError::InvalidPattern)
    /// if the pattern does not compile.
    pub fn whose_name_matches(self, pattern: &str) -> Result<Self> {
        Ok(self.with_rule(NameRegexRule::new(pattern, NameTarget::Name)?))
    }

    /// Keeps types whose full name matches `pattern`. Types without a full
    /// name never match.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::InvalidPattern`](crate::FinderError::InvalidPattern)
    /// if the pattern does not compile.
    pub fn whose_full_name_matches(self, pattern: &str) -> Result<Self> {
        Ok(self.with_rule(NameRegexRule::new(pattern, NameTarget::FullName)?))
    }

    /// Keeps types declared exactly in `namespace`.
    pub fn in_namespace(self, namespace: impl Into<String>) -> Self {
        self.with_rule(InNamespaceRule::new(namespace))
    }

    /// Keeps instantiable types with a public zero-argument constructor.
    pub fn with_parameterless_constructor(self) -> Self {
        self.with_rule(ParameterlessConstructorRule)
    }

    /// Returns the modules the query will visit.
    pub fn modules(&self) -> &[&'a M] {
        &self.modules
    }

    /// Returns the number of rules appended so far.
    pub fn rule_count(&self) -> usize {
        self.chain.as_ref().map_or(0, |c| c.len())
    }

    /// Freezes the builder into a query.
    pub fn build(self) -> TypeQuery<'a, M> {
        info!(
            event = "query_frozen",
            modules = self.modules.len(),
            rules = self.rule_count(),
        );
        TypeQuery::new(self.modules.into(), self.chain)
    }
}

impl<'a, M: Module> IntoIterator for TypeFinder<'a, M> {
    type Item = &'a M::Type;
    type IntoIter = Matches<'a, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.build().into_iter()
    }
}

impl<M: Module> fmt::Debug for TypeFinder<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeFinder")
            .field("modules", &self.modules.len())
            .field("chain", &self.chain)
            .finish()
    }
}
