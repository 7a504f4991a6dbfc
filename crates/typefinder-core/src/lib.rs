//! TypeFinder Core - Discovery of declared types by composable rules
//!
//! This crate provides the fundamental abstractions for TypeFinder:
//! - Type descriptors and modules for runtime type metadata
//! - Rules (predicates) and their AND combinator
//! - The query builder and the frozen, restartable query
//!
//! # Example
//!
//! ```
//! use typefinder_core::{ModuleInfo, TypeDescriptor, TypeFinder, TypeInfo};
//!
//! trait Handler {}
//! struct Greeter;
//! struct Unrelated;
//!
//! let handler = TypeInfo::of::<dyn Handler>().interface();
//! let module = ModuleInfo::new("app")
//!     .with_type(TypeInfo::of::<Greeter>().implements(&handler).constructible())
//!     .with_type(TypeInfo::of::<Unrelated>())
//!     .with_type(handler.clone());
//!
//! let found: Vec<_> = TypeFinder::new([&module])
//!     .that_inherit(handler.key())
//!     .into_iter()
//!     .map(|t| t.name().to_string())
//!     .collect();
//!
//! assert_eq!(found, vec!["Greeter"]);
//! ```

pub mod descriptor;
pub mod error;
pub mod finder;
pub mod rule;

pub use descriptor::{
    Discoverable, GenericDef, Module, ModuleInfo, TypeDescriptor, TypeInfo, TypeKey, TypeKind,
};
pub use error::{FinderError, Result};
pub use finder::{Matches, TypeFinder, TypeQuery};
pub use rule::{Rule, RuleChain};
