//! Error types for mesh queries and editing operators.

use thiserror::Error;

/// Errors that can occur during mesh queries and edits.
#[derive(Error, Debug)]
pub enum MeshError {
    /// A face or vertex index is outside the mesh pools.
    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the pool that was indexed.
        len: usize,
    },

    /// Zero-length edge or collinear corners.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),
}

/// Result type for mesh operations.
pub type Result<T> = std::result::Result<T, MeshError>;
