//! Error types for campus data loading and route queries.

use pathgraph::GraphError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for campus operations.
pub type Result<T> = std::result::Result<T, CampusError>;

/// Errors raised while loading campus data or answering route queries.
///
/// A route that does not exist is reported as [`CampusError::NoPath`] so the
/// query front door can map it to a client error.
#[derive(Error, Debug)]
pub enum CampusError {
    /// A data or configuration file could not be read
    #[error("IO error reading {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A CSV row could not be parsed
    #[error("Parse error in {origin} at line {line}: {message}")]
    Parse {
        /// File name or other description of the input
        origin: String,
        /// 1-based line number
        line: usize,
        /// What was wrong with the row
        message: String,
    },

    /// A building short name is not on the map
    #[error("Unknown building: {short_name}")]
    UnknownBuilding {
        /// The short name that was looked up
        short_name: String,
    },

    /// Both buildings exist but no walkway connects them
    #[error("No path from {start} to {end}")]
    NoPath {
        /// Start building short name
        start: String,
        /// End building short name
        end: String,
    },

    /// Configuration could not be interpreted
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the problem
        message: String,
    },

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The underlying graph rejected an operation
    #[error(transparent)]
    Graph(#[from] GraphError),
}
