//! Frozen, restartable query.

use std::fmt;
use std::sync::Arc;

use super::Matches;
use crate::descriptor::Module;
use crate::rule::RuleChain;

/// An immutable query: a rule chain bound to a list of modules.
///
/// Iterating never alters the query, and every pass yields the same types in
/// the same order as long as the modules are unchanged.
pub struct TypeQuery<'a, M: Module> {
    modules: Arc<[&'a M]>,
    chain: Option<Arc<RuleChain>>,
}

impl<'a, M: Module> TypeQuery<'a, M> {
    pub(super) fn new(modules: Arc<[&'a M]>, chain: Option<Arc<RuleChain>>) -> Self {
        TypeQuery { modules, chain }
    }

    /// Starts a new enumeration pass.
    pub fn iter(&self) -> Matches<'a, M> {
        Matches::new(self.modules.clone(), self.chain.clone())
    }

    /// Returns the first matching type.
    pub fn first(&self) -> Option<&'a M::Type> {
        self.iter().next()
    }

    /// Runs a full pass and counts the matching types.
    pub fn count_matches(&self) -> usize {
        self.iter().count()
    }

    /// Returns the modules, in visiting order.
    pub fn modules(&self) -> &[&'a M] {
        &self.modules
    }

    /// Returns the frozen rule chain, `None` when every type is accepted.
    pub fn chain(&self) -> Option<&Arc<RuleChain>> {
        self.chain.as_ref()
    }

    /// Returns the number of rules in the chain.
    pub fn rule_count(&self) -> usize {
        self.chain.as_ref().map_or(0, |c| c.len())
    }
}

impl<M: Module> Clone for TypeQuery<'_, M> {
    fn clone(&self) -> Self {
        Self {
            modules: self.modules.clone(),
            chain: self.chain.clone(),
        }
    }
}

impl<'a, M: Module> IntoIterator for TypeQuery<'a, M> {
    type Item = &'a M::Type;
    type IntoIter = Matches<'a, M>;

    fn into_iter(self) -> Self::IntoIter {
        Matches::new(self.modules, self.chain)
    }
}

impl<'a, M: Module> IntoIterator for &TypeQuery<'a, M> {
    type Item = &'a M::Type;
    type IntoIter = Matches<'a, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<M: Module> fmt::Debug for TypeQuery<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeQuery")
            .field("modules", &self.modules.len())
            .field("rules", &self.rule_count())
            .finish()
    }
}
