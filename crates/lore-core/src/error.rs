//! Error types for lore-core.

use thiserror::Error;

/// Result type alias using [`GraphError`].
pub type Result<T> = std::result::Result<T, GraphError>;

/// Violations raised by schema-validated graph mutations.
///
/// Every mutation validates fully before producing output; on any of these
/// the input graph is left observably unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("node type already exists: {0}")]
    DuplicateType(String),

    #[error("node type does not exist: {0}")]
    UnknownType(String),

    #[error("connection type already exists: {from} -> {to}")]
    DuplicateRule { from: String, to: String },

    #[error("node id does not exist: {0}")]
    UnknownId(String),

    #[error("invalid connection type: {from} -> {to}")]
    InvalidConnectionType { from: String, to: String },

    #[error("node id already exists: {0}")]
    DuplicateId(String),
}
