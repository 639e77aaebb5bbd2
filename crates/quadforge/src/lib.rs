#![warn(missing_docs)]

//! Interactive quad-mesh modeling kernel facade for quadforge.
//!
//! Re-exports the member crates and provides the rendering adapter
//! that turns meshes into flat GPU-ready buffers.
//!
//! # Example
//!
//! ```
//! use quadforge::{make_cube, pick, BufferCache, PickPolicy, Point3, Ray, Vec3};
//!
//! let mut cube = make_cube();
//! let ray = Ray::new(Point3::new(0.5, 0.5, -2.0), Vec3::new(0.0, 0.0, 1.0));
//! let hit = pick(&cube, &ray, PickPolicy::Nearest).unwrap();
//! cube.extrude_quad(hit.face).unwrap();
//!
//! let mut cache = BufferCache::new();
//! assert!(cache.sync(&cube));
//! assert!(!cache.sync(&cube));
//! ```

pub use quadforge_math;
pub use quadforge_mesh;
pub use quadforge_pick;
pub use quadforge_primitives;

pub use quadforge_math::{Mat4, Point3, Transform, Vec3};
pub use quadforge_mesh::{MeshError, QuadMesh, TriMesh};
pub use quadforge_pick::{pick, pick_nearest, PickError, PickPolicy, QuadHit, Ray};
pub use quadforge_primitives::{
    make_cube, make_pyramid, make_ring, make_spiral, revolve, PrimitiveError, RevolveParams,
    RingParams, SpiralParams,
};

mod render;

pub use render::{BufferCache, RenderBuffers, RenderSource};
