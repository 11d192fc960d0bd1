//! Error types for pathgraph operations.
//!
//! All fallible operations return [`Result<T>`]. An unreachable destination is
//! not an error: path queries report it as `None`.

use thiserror::Error;

/// Result type alias for pathgraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error type for graph mutations, queries and exports.
///
/// A failed call never leaves the graph partially modified.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A node named by the caller is not present in the graph
    #[error("Node not found: {node}")]
    NodeNotFound {
        /// Debug rendering of the missing node
        node: String,
    },

    /// An argument is well-typed but cannot be stored or compared
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of what was wrong with the argument
        message: String,
    },

    /// Serialization error during export
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl GraphError {
    /// Create a node-not-found error from any debuggable node label.
    pub fn node_not_found<N: std::fmt::Debug + ?Sized>(node: &N) -> Self {
        Self::NodeNotFound {
            node: format!("{node:?}"),
        }
    }

    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }
}
