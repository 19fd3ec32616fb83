//! Errors raised while loading a documentation tree.
//!
//! The controller itself never fails: unknown ids degrade to no-ops. Only reading and
//! validating the external content can go wrong.

use std::io;
use std::path::PathBuf;

/// Failure to load or validate a content store.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The content file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The content file is not a valid documentation tree.
    #[error("invalid documentation tree: {0}")]
    Json(#[from] serde_json::Error),

    /// Two nodes share an id, so it can no longer address a single panel.
    #[error("duplicate section id `{0}`")]
    DuplicateId(String),

    /// A node has an empty id and could never be reached by fragment.
    #[error("section `{title}` has an empty id")]
    EmptyId {
        /// Title of the offending node.
        title: String,
    },

    /// The tree has no leaves to display.
    #[error("documentation tree contains no sections")]
    NoSections,
}

/// Result alias for loading operations.
pub type Result<T> = std::result::Result<T, Error>;
