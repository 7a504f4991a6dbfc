//! Rule wrapper for closures.

use std::fmt;

use super::traits::Rule;
use crate::descriptor::TypeDescriptor;

/// A rule wrapping a closure.
///
/// # Example
///
/// ```
/// use typefinder_core::rule::FnRule;
/// use typefinder_core::{Rule, TypeDescriptor, TypeInfo};
///
/// struct OrderHandler;
/// struct Order;
///
/// let rule = FnRule::new(|t| t.name().ends_with("Handler"));
/// assert!(rule.complies(&TypeInfo::of::<OrderHandler>()));
/// assert!(!rule.complies(&TypeInfo::of::<Order>()));
/// ```
pub struct FnRule<F> {
    f: F,
}

impl<F> FnRule<F>
where
    F: Fn(&dyn TypeDescriptor) -> bool + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Rule for FnRule<F>
where
    F: Fn(&dyn TypeDescriptor) -> bool + Send + Sync,
{
    #[inline]
    fn complies(&self, ty: &dyn TypeDescriptor) -> bool {
        (self.f)(ty)
    }

    fn describe(&self) -> String {
        "custom".to_string()
    }
}

impl<F> fmt::Debug for FnRule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRule").finish()
    }
}
