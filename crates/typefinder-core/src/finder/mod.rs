//! Query building and enumeration.
//!
//! A [`TypeFinder`] accumulates rules. Building it, or iterating it directly,
//! consumes the builder into a frozen [`TypeQuery`], so no rule can be added
//! once enumeration has started. A query can be iterated any number of times;
//! each pass re-runs the same chain over the same modules.

mod builder;
mod matches;
mod query;

#[cfg(test)]
mod tests;

pub use builder::TypeFinder;
pub use matches::Matches;
pub use query::TypeQuery;
