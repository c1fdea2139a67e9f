//! Error types for topograph operations.
//!
//! All fallible operations return [`Result<T>`] with context-rich error messages.

use thiserror::Error;

/// Result type alias for topograph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Comprehensive error type for all graph operations.
///
/// Errors are designed to fail fast and provide clear context about what went wrong.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A node with the same name is already present
    #[error("Node already exists: {name}")]
    NodeAlreadyExists {
        /// Name of the conflicting node
        name: String,
    },

    /// Node not found in the graph
    #[error("Node not found: {name}")]
    NodeNotFound {
        /// Name of the missing node
        name: String,
    },

    /// The `(type, destination)` pair is already taken on the source node
    #[error("Relationship {rel_type} already exists between {src} and {dst}")]
    RelationshipAlreadyExists {
        /// Relationship type name
        rel_type: String,
        /// Source node name
        src: String,
        /// Destination node name
        dst: String,
    },

    /// Both endpoints exist but no such relationship connects them
    #[error("No relationship {rel_type} between {src} and {dst}")]
    RelationshipNotFound {
        /// Relationship type name
        rel_type: String,
        /// Source node name
        src: String,
        /// Destination node name
        dst: String,
    },

    /// Traversal algorithm name was not recognized
    #[error("Unknown traversal algorithm: {name}")]
    UnknownAlgorithm {
        /// The rejected algorithm name
        name: String,
    },
}
