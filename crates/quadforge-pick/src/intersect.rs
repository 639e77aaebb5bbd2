//! Ray-quad intersection: closed-form plane solve plus containment.

use quadforge_math::Point3;
use quadforge_mesh::{face, QuadMesh};

use crate::contain::point_in_quad;
use crate::ray::Ray;
use crate::{PickError, Result};

/// A ray-face intersection.
#[derive(Debug, Clone, Copy)]
pub struct QuadHit {
    /// Index of the face that was hit.
    pub face: usize,
    /// Parameter along the ray where the hit occurs.
    pub t: f64,
    /// 3D intersection point.
    pub point: Point3,
}

/// Intersect a ray with one face of a mesh.
///
/// Returns `Ok(Some(hit))` when the ray crosses the face plane at a
/// non-negative parameter inside the face boundary, `Ok(None)` when
/// the plane is hit outside the boundary or behind the ray origin,
/// and [`PickError::DegenerateIntersection`] when the ray is parallel
/// to the plane.
pub fn intersect_ray_quad(mesh: &QuadMesh, ray: &Ray, face: usize) -> Result<Option<QuadHit>> {
    let [a, b, c, d] = mesh.corners(face)?;
    let normal = face::quad_normal(&a, &b, &c, &d)?;

    let denom = ray.direction.as_ref().dot(&normal);
    // Ray is parallel to the face plane
    if denom.abs() < 1e-12 {
        return Err(PickError::DegenerateIntersection { face });
    }

    let centre = face::quad_centroid(&a, &b, &c, &d);
    let t = (centre - ray.origin).dot(&normal) / denom;

    // Intersection is behind the ray origin
    if t < 0.0 {
        return Ok(None);
    }

    let point = ray.at(t);
    if point_in_quad(&point, &a, &b, &c, &d)? {
        Ok(Some(QuadHit { face, t, point }))
    } else {
        Ok(None)
    }
}
