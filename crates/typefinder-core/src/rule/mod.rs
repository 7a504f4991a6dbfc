//! Rules: boolean tests over one type descriptor.
//!
//! Rules are appended to a persistent [`RuleChain`]; a chain node owns its
//! rule and shares its predecessor, so appending never alters an existing
//! chain.

mod chain;
mod rules;
mod traits;
mod wrappers;

#[cfg(test)]
mod tests;

pub use chain::RuleChain;
pub use rules::{
    ExcludeTypesRule, GenericInheritanceRule, InNamespaceRule, InheritanceRule, NameRegexRule,
    NameTarget, ParameterlessConstructorRule,
};
pub use traits::Rule;
pub use wrappers::FnRule;
