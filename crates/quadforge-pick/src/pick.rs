//! Whole-mesh picking: intersect every face and keep the best hit.

use quadforge_mesh::QuadMesh;
use tracing::debug;

use crate::intersect::{intersect_ray_quad, QuadHit};
use crate::ray::Ray;

/// How to choose between multiple faces hit by the same ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickPolicy {
    /// Keep the hit closest to the ray origin.
    #[default]
    Nearest,
    /// Keep the hit farthest from the ray origin.
    Farthest,
}

impl PickPolicy {
    fn prefers(&self, candidate: f64, best: f64) -> bool {
        match self {
            PickPolicy::Nearest => candidate < best,
            PickPolicy::Farthest => candidate > best,
        }
    }
}

/// Cast a ray against every face of the mesh.
///
/// Faces the ray misses, faces behind the origin, and faces whose
/// plane is parallel to the ray are all skipped. `None` means the ray
/// hit nothing.
pub fn pick(mesh: &QuadMesh, ray: &Ray, policy: PickPolicy) -> Option<QuadHit> {
    let mut best: Option<QuadHit> = None;
    for face in 0..mesh.quad_count() {
        let hit = match intersect_ray_quad(mesh, ray, face) {
            Ok(Some(hit)) => hit,
            Ok(None) | Err(_) => continue,
        };
        let better = match &best {
            Some(current) => policy.prefers(hit.t, current.t),
            None => true,
        };
        if better {
            best = Some(hit);
        }
    }
    if let Some(hit) = &best {
        debug!(face = hit.face, t = hit.t, "picked face");
    }
    best
}

/// Cast a ray and keep the face closest to the origin.
pub fn pick_nearest(mesh: &QuadMesh, ray: &Ray) -> Option<QuadHit> {
    pick(mesh, ray, PickPolicy::Nearest)
}
