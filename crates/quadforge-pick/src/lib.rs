#![warn(missing_docs)]

//! Ray-based face picking for the quadforge kernel.
//!
//! Casts rays (typically unprojected from screen space) against the
//! faces of a quad mesh and reports which face is hit and where.
//!
//! - [`Ray`] - ray with origin and unit direction
//! - [`intersect_ray_quad`] - plane solve plus containment for one face
//! - [`point_in_quad`] - half-plane containment test
//! - [`pick`] - best hit across all faces under a [`PickPolicy`]

use quadforge_mesh::MeshError;
use thiserror::Error;

mod contain;
mod intersect;
mod pick;
mod ray;

pub use contain::point_in_quad;
pub use intersect::{intersect_ray_quad, QuadHit};
pub use pick::{pick, pick_nearest, PickPolicy};
pub use ray::Ray;

/// Errors that can occur during picking queries.
#[derive(Error, Debug)]
pub enum PickError {
    /// The underlying mesh lookup failed.
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// The ray is parallel to the face plane.
    #[error("ray parallel to plane of face {face}")]
    DegenerateIntersection {
        /// The face whose plane the ray cannot cross.
        face: usize,
    },
}

/// Result type for picking operations.
pub type Result<T> = std::result::Result<T, PickError>;
