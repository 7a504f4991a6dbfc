//! Error types for TypeFinder

use thiserror::Error;

/// Main error type for TypeFinder operations.
///
/// Every variant is raised while a query is being configured; enumeration
/// itself never fails.
#[derive(Debug, Error)]
pub enum FinderError {
    /// A name or full-name pattern failed to compile.
    #[error("Invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A required argument could not be used, e.g. an unknown type name.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for TypeFinder operations
pub type Result<T> = std::result::Result<T, FinderError>;
