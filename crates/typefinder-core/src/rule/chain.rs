//! AND composition of rules.

use std::fmt;
use std::sync::Arc;

use super::traits::Rule;
use crate::descriptor::TypeDescriptor;

/// A right-growing conjunction of rules.
///
/// Each node owns its rule and holds a shared link to the chain it extends.
/// Evaluation runs the previous chain first, so rules apply in the order they
/// were appended, and stops at the first rule that fails.
///
/// # Example
///
/// ```
/// use typefinder_core::rule::{FnRule, RuleChain};
/// use typefinder_core::{Rule, TypeDescriptor, TypeInfo};
///
/// struct Order;
///
/// let first = RuleChain::combine(None, Box::new(FnRule::new(|t| t.name().len() > 2)));
/// let second = RuleChain::combine(
///     Some(first.clone()),
///     Box::new(FnRule::new(|t| t.name().starts_with('O'))),
/// );
///
/// assert_eq!(first.len(), 1);
/// assert_eq!(second.len(), 2);
/// assert!(second.complies(&TypeInfo::of::<Order>()));
/// ```
pub struct RuleChain {
    previous: Option<Arc<RuleChain>>,
    rule: Box<dyn Rule>,
    len: usize,
}

impl RuleChain {
    /// Returns a new chain testing `previous` and then `rule`.
    pub fn combine(previous: Option<Arc<RuleChain>>, rule: Box<dyn Rule>) -> Arc<Self> {
        let len = previous.as_ref().map_or(0, |p| p.len) + 1;
        Arc::new(RuleChain {
            previous,
            rule,
            len,
        })
    }

    /// Returns the chain this node extends.
    pub fn previous(&self) -> Option<&Arc<RuleChain>> {
        self.previous.as_ref()
    }

    /// Returns the rule appended by this node.
    pub fn rule(&self) -> &dyn Rule {
        self.rule.as_ref()
    }

    /// Returns the number of rules in the chain.
    pub fn len(&self) -> usize {
        self.len
    }

    /// A chain always holds at least one rule.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the rules in the order they were appended.
    pub fn rules(&self) -> Vec<&dyn Rule> {
        let mut rules = Vec::with_capacity(self.len);
        let mut node = Some(self);
        while let Some(current) = node {
            rules.push(current.rule.as_ref());
            node = current.previous.as_deref();
        }
        rules.reverse();
        rules
    }
}

impl Rule for RuleChain {
    fn complies(&self, ty: &dyn TypeDescriptor) -> bool {
        self.previous.as_ref().map_or(true, |p| p.complies(ty)) && self.rule.complies(ty)
    }

    fn describe(&self) -> String {
        self.rules()
            .iter()
            .map(|r| r.describe())
            .collect::<Vec<_>>()
            .join(" && ")
    }
}

impl fmt::Debug for RuleChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleChain")
            .field("len", &self.len)
            .field("rules", &self.describe())
            .finish()
    }
}
