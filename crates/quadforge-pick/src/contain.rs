//! Point-in-quad containment testing.
//!
//! Classifies a point already known to lie in a face's plane against
//! the face boundary.

use quadforge_math::Point3;
use quadforge_mesh::face::quad_normal;

use crate::Result;

/// Test whether `p` lies inside the quad `(a, b, c, d)`.
///
/// `p` is assumed to lie in the quad's plane, as produced by the
/// ray-plane solve. Each boundary edge contributes a half-plane whose
/// in-plane normal is `face_normal x edge`; the point is inside when
/// it sits on the non-negative side of all four, so points on the
/// boundary count as inside. Only convex quads classify correctly.
pub fn point_in_quad(p: &Point3, a: &Point3, b: &Point3, c: &Point3, d: &Point3) -> Result<bool> {
    let normal = quad_normal(a, b, c, d)?;
    let corners = [*a, *b, *c, *d];
    for i in 0..4 {
        let start = corners[i];
        let edge = corners[(i + 1) % 4] - start;
        let inward = normal.cross(&edge);
        if inward.dot(&(*p - start)) < 0.0 {
            return Ok(false);
        }
    }
    Ok(true)
}
