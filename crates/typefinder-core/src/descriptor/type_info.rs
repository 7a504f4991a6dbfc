//! Owned type descriptor.

use std::borrow::Cow;
use std::fmt;

use super::{GenericDef, TypeDescriptor, TypeKey, TypeKind};

/// Types that can describe themselves, usually via `#[derive(Discoverable)]`.
pub trait Discoverable {
    /// Returns the descriptor of `Self`.
    fn type_info() -> TypeInfo;
}

/// Describes one declared type at runtime.
///
/// Ancestry is flattened at construction: [`extends`](Self::extends) copies the
/// parent's own supertypes and generic bases, so lookups never need to walk
/// other descriptors.
#[derive(Clone, PartialEq, Eq)]
pub struct TypeInfo {
    key: TypeKey,
    name: Cow<'static, str>,
    full_name: Option<Cow<'static, str>>,
    namespace: Option<Cow<'static, str>>,
    kind: TypeKind,
    supertypes: Vec<TypeKey>,
    generic_bases: Vec<GenericDef>,
    generic_definition: Option<GenericDef>,
    parameterless_ctor: bool,
}

impl TypeInfo {
    /// Creates a descriptor in the global namespace.
    pub fn new(key: TypeKey, name: impl Into<Cow<'static, str>>) -> Self {
        let name = name.into();
        TypeInfo {
            key,
            full_name: Some(name.clone()),
            name,
            namespace: None,
            kind: TypeKind::Concrete,
            supertypes: Vec::new(),
            generic_bases: Vec::new(),
            generic_definition: None,
            parameterless_ctor: false,
        }
    }

    /// Moves the type into `namespace`; the full name becomes `namespace::name`
    /// followed by any generic arguments the full name already carried.
    pub fn with_namespace(mut self, namespace: impl Into<Cow<'static, str>>) -> Self {
        let namespace = namespace.into();
        if let Some(full) = &self.full_name {
            let args = full.find('<').map_or("", |i| &full[i..]);
            self.full_name = Some(if namespace.is_empty() && args.is_empty() {
                self.name.clone()
            } else if namespace.is_empty() {
                Cow::Owned(format!("{}{}", self.name, args))
            } else {
                Cow::Owned(format!("{}::{}{}", namespace, self.name, args))
            });
        }
        self.namespace = Some(namespace);
        self
    }

    /// Creates a descriptor from the Rust type path of `T`.
    ///
    /// The namespace is the module path, the name is the last segment without
    /// generic arguments, and a generic type records its definition.
    ///
    /// ```
    /// use typefinder_core::{TypeDescriptor, TypeInfo};
    ///
    /// struct Repository<T>(T);
    ///
    /// let info = TypeInfo::of::<Repository<u32>>();
    /// assert_eq!(info.name(), "Repository");
    /// assert!(info.generic_definition().is_some());
    /// ```
    pub fn of<T: ?Sized + 'static>() -> Self {
        let key = TypeKey::of::<T>();
        let full = trim_trait_object(key.path());
        let base = strip_generic_args(full);
        let (namespace, name) = match base.rsplit_once("::") {
            Some((ns, name)) => (Some(Cow::Borrowed(ns)), name),
            None => (None, base),
        };
        TypeInfo {
            key,
            name: Cow::Borrowed(name),
            full_name: Some(Cow::Borrowed(full)),
            namespace,
            kind: TypeKind::Concrete,
            supertypes: Vec::new(),
            generic_bases: Vec::new(),
            generic_definition: (base.len() != full.len()).then(|| GenericDef::new(base)),
            parameterless_ctor: false,
        }
    }

    /// Marks the type as an interface (a trait).
    pub fn interface(self) -> Self {
        self.with_kind(TypeKind::Interface)
    }

    /// Marks the type as abstract.
    pub fn abstract_type(self) -> Self {
        self.with_kind(TypeKind::Abstract)
    }

    /// Marks the type as a generic parameter, which has no full name.
    pub fn generic_parameter(mut self) -> Self {
        self.full_name = None;
        self.with_kind(TypeKind::GenericParameter)
    }

    /// Sets the kind.
    pub fn with_kind(mut self, kind: TypeKind) -> Self {
        self.kind = kind;
        self
    }

    /// Declares a public zero-argument constructor (a `Default` impl).
    pub fn constructible(mut self) -> Self {
        self.parameterless_ctor = true;
        self
    }

    /// Drops the full name.
    pub fn without_full_name(mut self) -> Self {
        self.full_name = None;
        self
    }

    /// Derives from `parent`, inheriting its whole ancestry.
    pub fn extends(mut self, parent: &TypeInfo) -> Self {
        self.push_supertype(parent.key);
        for key in &parent.supertypes {
            self.push_supertype(*key);
        }
        if let Some(def) = &parent.generic_definition {
            self.push_generic_base(def.clone());
        }
        for def in &parent.generic_bases {
            self.push_generic_base(def.clone());
        }
        self
    }

    /// Implements the interface `parent`, inheriting its super-interfaces.
    pub fn implements(self, parent: &TypeInfo) -> Self {
        self.extends(parent)
    }

    /// Implements an interface known only by key.
    pub fn implements_key(mut self, key: TypeKey) -> Self {
        self.push_supertype(key);
        self
    }

    /// Adds a generic definition among the ancestors.
    pub fn with_generic_base(mut self, def: GenericDef) -> Self {
        self.push_generic_base(def);
        self
    }

    /// Records that this type is a form of the generic definition `def`.
    pub fn with_generic_definition(mut self, def: GenericDef) -> Self {
        self.generic_definition = Some(def);
        self
    }

    /// Returns the generic definition this type is a form of, if any.
    pub fn generic_definition(&self) -> Option<&GenericDef> {
        self.generic_definition.as_ref()
    }

    fn push_supertype(&mut self, key: TypeKey) {
        if key != self.key && !self.supertypes.contains(&key) {
            self.supertypes.push(key);
        }
    }

    fn push_generic_base(&mut self, def: GenericDef) {
        if !self.generic_bases.contains(&def) {
            self.generic_bases.push(def);
        }
    }
}

impl TypeDescriptor for TypeInfo {
    fn key(&self) -> TypeKey {
        self.key
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    fn kind(&self) -> TypeKind {
        self.kind
    }

    fn supertypes(&self) -> &[TypeKey] {
        &self.supertypes
    }

    fn generic_base_types(&self) -> &[GenericDef] {
        &self.generic_bases
    }

    fn has_parameterless_constructor(&self) -> bool {
        self.parameterless_ctor
    }
}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeInfo")
            .field("name", &self.name)
            .field("namespace", &self.namespace)
            .field("kind", &self.kind)
            .field("supertypes", &self.supertypes.len())
            .finish()
    }
}

// `dyn a::Handler + core::marker::Send` -> `a::Handler`
fn trim_trait_object(path: &str) -> &str {
    let path = path.strip_prefix("dyn ").unwrap_or(path);
    let mut depth = 0usize;
    for (i, c) in path.char_indices() {
        match c {
            '<' | '(' | '[' => depth += 1,
            '>' | ')' | ']' => depth = depth.saturating_sub(1),
            '+' if depth == 0 => return path[..i].trim_end(),
            _ => {}
        }
    }
    path
}

pub(super) fn strip_generic_args(path: &str) -> &str {
    let path = trim_trait_object(path);
    match path.find('<') {
        Some(i) => &path[..i],
        None => path,
    }
}
