#![warn(missing_docs)]

//! Parametric mesh builders for the quadforge kernel.
//!
//! Each builder assembles a mesh through the public `quadforge-mesh`
//! API only, so anything a builder can do, interactive editing can
//! redo. Builders that produce a [`TriMesh`](quadforge_mesh::TriMesh)
//! finish by computing per-vertex normals.
//!
//! # Example
//!
//! ```
//! use quadforge_primitives::{make_ring, RingParams};
//!
//! let ring = make_ring(&RingParams::default()).unwrap();
//! assert_eq!(ring.vertex_count(), 200);
//! ```

mod cube;
mod revolve;
mod surfaces;

pub use cube::make_cube;
pub use revolve::{revolve, RevolveParams};
pub use surfaces::{make_pyramid, make_ring, make_spiral, RingParams, SpiralParams};

use thiserror::Error;

/// Errors from primitive construction.
#[derive(Debug, Clone, Error)]
pub enum PrimitiveError {
    /// Segment count below the minimum needed to close the shape.
    #[error("segment count {0} is too small (need at least 3)")]
    TooFewSegments(u32),

    /// A dimension that must be positive or ordered was not.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// Revolution profile needs at least two points.
    #[error("profile needs at least 2 points, got {0}")]
    ProfileTooShort(usize),

    /// Revolution step must be in (0, 360] degrees.
    #[error("invalid step: {0} degrees")]
    InvalidStep(f64),
}

/// Result type for primitive construction.
pub type Result<T> = std::result::Result<T, PrimitiveError>;
