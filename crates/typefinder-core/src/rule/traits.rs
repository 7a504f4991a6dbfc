//! The rule trait.

use crate::descriptor::TypeDescriptor;

/// A boolean test over a single type descriptor.
///
/// # Example
///
/// ```
/// use typefinder_core::{Rule, TypeDescriptor, TypeInfo};
///
/// struct PublicApi;
///
/// impl Rule for PublicApi {
///     fn complies(&self, ty: &dyn TypeDescriptor) -> bool {
///         !ty.name().starts_with('_')
///     }
/// }
///
/// struct Visible;
/// assert!(PublicApi.complies(&TypeInfo::of::<Visible>()));
/// ```
pub trait Rule: Send + Sync {
    /// Returns true if the type passes the rule.
    fn complies(&self, ty: &dyn TypeDescriptor) -> bool;

    /// Short human-readable description, used in log events.
    fn describe(&self) -> String {
        let path = std::any::type_name::<Self>();
        path.rsplit("::").next().unwrap_or(path).to_string()
    }
}
