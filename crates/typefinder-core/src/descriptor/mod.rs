//! Type descriptors and modules.
//!
//! A [`TypeDescriptor`] is the read-only view the rules evaluate. Modules
//! hand descriptors out in declared order; [`TypeInfo`] and [`ModuleInfo`]
//! are the owned implementations used by the derive macro and by hand-built
//! registries.

mod module;
mod type_info;


use std::any::TypeId;
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

pub use module::{Module, ModuleInfo};
pub use type_info::{Discoverable, TypeInfo};

/// Identity of a declared type.
///
/// Equality and hashing use the [`TypeId`] only; the path is kept for
/// display and is not guaranteed stable across compiler versions.
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    path: &'static str,
}

impl TypeKey {
    /// Returns the key of `T`. Trait objects (`dyn Trait`) are valid keys.
    pub fn of<T: ?Sized + 'static>() -> Self {
        TypeKey {
            id: TypeId::of::<T>(),
            path: std::any::type_name::<T>(),
        }
    }

    /// Returns the underlying [`TypeId`].
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// Returns the Rust type path this key was created from.
    pub fn path(&self) -> &'static str {
        self.path
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeKey({})", self.path)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)
    }
}

/// Identity of an unbound generic type definition, such as `app::Repository`.
///
/// Unbound generics have no [`TypeId`], so the definition path is the identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GenericDef {
    path: Cow<'static, str>,
}

impl GenericDef {
    /// Creates a definition from its path.
    pub fn new(path: impl Into<Cow<'static, str>>) -> Self {
        GenericDef { path: path.into() }
    }

    /// Returns the definition of any closed form of it.
    ///
    /// ```
    /// use typefinder_core::GenericDef;
    ///
    /// struct Repository<T>(T);
    ///
    /// let a = GenericDef::of::<Repository<u8>>();
    /// let b = GenericDef::of::<Repository<String>>();
    /// assert_eq!(a, b);
    /// assert!(a.path().ends_with("Repository"));
    /// ```
    pub fn of<T: ?Sized>() -> Self {
        GenericDef::new(type_info::strip_generic_args(std::any::type_name::<T>()))
    }

    /// Returns the definition path.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for GenericDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Shape of a declared type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// An instantiable struct or enum.
    #[default]
    Concrete,
    /// A type that cannot be instantiated directly.
    Abstract,
    /// A trait, referenced through `dyn Trait`.
    Interface,
    /// An unbound generic definition.
    GenericDefinition,
    /// A generic type parameter; it has no full name.
    GenericParameter,
}

/// Read-only view onto one declared type.
///
/// Implementations are supplied by the host; rules never mutate them.
pub trait TypeDescriptor {
    /// Identity of the type.
    fn key(&self) -> TypeKey;

    /// Simple name, without module path or generic arguments.
    fn name(&self) -> &str;

    /// Qualified name. `None` for types that have no qualified form,
    /// such as generic parameters.
    fn full_name(&self) -> Option<&str>;

    /// Module path the type is declared in. `None` for the global namespace.
    fn namespace(&self) -> Option<&str>;

    /// Shape of the type.
    fn kind(&self) -> TypeKind;

    /// Every ancestor and implemented interface, transitively, excluding self.
    fn supertypes(&self) -> &[TypeKey];

    /// Generic definitions of every ancestor and implemented interface,
    /// excluding self.
    fn generic_base_types(&self) -> &[GenericDef];

    /// Whether the type exposes a public zero-argument constructor.
    fn has_parameterless_constructor(&self) -> bool;

    /// Returns true if a value of this type can be used where `base` is expected.
    fn is_assignable_to(&self, base: TypeKey) -> bool {
        self.key() == base || self.supertypes().contains(&base)
    }

    /// Returns true for abstract types and interfaces.
    fn is_abstract(&self) -> bool {
        matches!(self.kind(), TypeKind::Abstract | TypeKind::Interface)
    }
}
