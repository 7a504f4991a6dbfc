//! TypeFinder - Discover declared types with composable rules
//!
//! Describe your types once with `#[derive(Discoverable)]`, group them into
//! modules, and query them at startup instead of hardcoding a registry.
//!
//! # Example
//!
//! ```rust
//! use typefinder::prelude::*;
//!
//! pub trait Plugin {}
//!
//! #[derive(Default, Discoverable)]
//! #[discover(implements(dyn Plugin), default)]
//! struct AuditPlugin;
//!
//! #[derive(Discoverable)]
//! #[discover(implements(dyn Plugin))]
//! struct MailPlugin;
//!
//! let module = ModuleInfo::new("plugins")
//!     .with::<AuditPlugin>()
//!     .with::<MailPlugin>();
//!
//! let found: Vec<_> = TypeFinder::new([&module])
//!     .that_inherit_type::<dyn Plugin>()
//!     .with_parameterless_constructor()
//!     .into_iter()
//!     .map(|t| t.name())
//!     .collect();
//!
//! assert_eq!(found, vec!["AuditPlugin"]);
//! ```
//!
//! # Derive errors
//!
//! Unknown `#[discover]` options are rejected:
//!
//! ```compile_fail
//! use typefinder::Discoverable;
//!
//! #[derive(Discoverable)]
//! #[discover(sealed)]
//! struct Session;
//! ```
//!
//! An abstract type cannot also declare a parameterless constructor:
//!
//! ```compile_fail
//! use typefinder::Discoverable;
//!
//! #[derive(Default, Discoverable)]
//! #[discover(default, abstract_type)]
//! struct Session;
//! ```
//!
//! Unions cannot be described:
//!
//! ```compile_fail
//! use typefinder::Discoverable;
//!
//! #[derive(Discoverable)]
//! union Bits {
//!     int: u32,
//!     float: f32,
//! }
//! ```

// Derive macro
pub use typefinder_macros::Discoverable;

// Descriptors and modules
pub use typefinder_core::descriptor::{
    Discoverable, GenericDef, Module, ModuleInfo, TypeDescriptor, TypeInfo, TypeKey, TypeKind,
};

// Rules
pub use typefinder_core::rule;
pub use typefinder_core::rule::{Rule, RuleChain};

// Queries
pub use typefinder_core::{FinderError, Matches, Result, TypeFinder, TypeQuery};

#[cfg(feature = "config")]
pub use typefinder_config::{ConfigError, FinderConfig, QueryConfig};

#[cfg(feature = "console")]
pub use typefinder_console as console;

/// Internal paths for macro-generated code. Do not use directly.
#[doc(hidden)]
pub mod __internal {
    pub use typefinder_core::descriptor::{Discoverable, GenericDef, TypeInfo, TypeKey};
}

pub mod prelude {
    pub use super::Discoverable;
    pub use super::{
        GenericDef, Module, ModuleInfo, Rule, TypeDescriptor, TypeFinder, TypeInfo, TypeKey,
        TypeKind, TypeQuery,
    };
}
