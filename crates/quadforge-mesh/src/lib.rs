#![warn(missing_docs)]

//! Quad mesh data model for the quadforge editing kernel.
//!
//! Meshes are index arenas: an append-only vertex pool plus a flat
//! index list. Faces reference vertices by pool index, so corners
//! shared between faces alias, and editing one face moves the shared
//! corners of its neighbors. Derived views (shading triangles,
//! wireframe edges) are recomputed on demand and never stored.
//!
//! - [`QuadMesh`] - editable quad mesh with per-face operators
//! - [`TriMesh`] - triangle mesh with accumulated vertex normals
//! - [`face`] - pure per-face geometry queries

mod error;
pub mod face;
mod ops;
mod quad;
mod tri;

pub use error::{MeshError, Result};
pub use quad::QuadMesh;
pub use tri::TriMesh;
