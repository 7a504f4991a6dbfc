//! Modules: ordered groups of declared types.

use std::borrow::Cow;
use std::fmt;

use super::{Discoverable, TypeDescriptor, TypeInfo, TypeKey};

/// A unit of code that declares types, supplied by the host.
pub trait Module {
    /// Descriptor type handed out by this module.
    type Type: TypeDescriptor;

    /// Name of the module.
    fn name(&self) -> &str;

    /// Declared types, in declaration order.
    fn declared_types(&self) -> &[Self::Type];

    /// Finds a declared type by its full name.
    fn find_by_full_name(&self, full_name: &str) -> Option<&Self::Type> {
        self.declared_types()
            .iter()
            .find(|t| t.full_name() == Some(full_name))
    }

    /// Finds a declared type by key.
    fn find_by_key(&self, key: TypeKey) -> Option<&Self::Type> {
        self.declared_types().iter().find(|t| t.key() == key)
    }
}

/// A statically populated module.
///
/// # Example
///
/// ```
/// use typefinder_core::{Module, ModuleInfo, TypeInfo};
///
/// struct Invoice;
/// struct Customer;
///
/// let module = ModuleInfo::new("billing")
///     .with_type(TypeInfo::of::<Invoice>())
///     .with_type(TypeInfo::of::<Customer>());
///
/// assert_eq!(module.name(), "billing");
/// assert_eq!(module.declared_types().len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct ModuleInfo {
    name: Cow<'static, str>,
    types: Vec<TypeInfo>,
}

impl ModuleInfo {
    /// Creates an empty module.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        ModuleInfo {
            name: name.into(),
            types: Vec::new(),
        }
    }

    /// Appends a type descriptor.
    pub fn with_type(mut self, info: TypeInfo) -> Self {
        self.types.push(info);
        self
    }

    /// Appends the descriptor of a [`Discoverable`] type.
    pub fn with<T: Discoverable>(self) -> Self {
        self.with_type(T::type_info())
    }

    /// Returns the number of declared types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if the module declares no types.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Module for ModuleInfo {
    type Type = TypeInfo;

    fn name(&self) -> &str {
        &self.name
    }

    fn declared_types(&self) -> &[TypeInfo] {
        &self.types
    }
}

impl fmt::Debug for ModuleInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleInfo")
            .field("name", &self.name)
            .field("types", &self.types.len())
            .finish()
    }
}
