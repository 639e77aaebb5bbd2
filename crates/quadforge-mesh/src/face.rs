//! Pure per-face geometry queries: normal, area, centroid, local frame.
//!
//! All functions take the four corners in face order (A, B, C, D) with
//! positive winding. The index-resolving wrappers live on
//! [`QuadMesh`](crate::QuadMesh).

use quadforge_math::{Point3, Tolerance, Transform, Vec3};

use crate::error::{MeshError, Result};

/// Unit normal of a quad face.
///
/// Averages the four corner normals (cross product of the two edges
/// leaving each corner) and renormalizes the average, so slightly
/// non-planar quads still get a unit result.
pub fn quad_normal(a: &Point3, b: &Point3, c: &Point3, d: &Point3) -> Result<Vec3> {
    let tol = Tolerance::DEFAULT;
    let corners = [*a, *b, *c, *d];
    let mut acc = Vec3::zeros();
    for i in 0..4 {
        let next = corners[(i + 1) % 4] - corners[i];
        let prev = corners[(i + 3) % 4] - corners[i];
        let n = next.cross(&prev);
        let len = n.norm();
        if tol.is_zero(len) {
            return Err(MeshError::DegenerateGeometry(format!(
                "zero corner normal at corner {i}"
            )));
        }
        acc += n / len;
    }
    acc /= 4.0;
    let len = acc.norm();
    if tol.is_zero(len) {
        return Err(MeshError::DegenerateGeometry(
            "corner normals cancel out".to_string(),
        ));
    }
    Ok(acc / len)
}

/// Area of a quad face, summed over the two triangles either side of
/// the B-D diagonal (the same split used for shading triangles).
pub fn quad_area(a: &Point3, b: &Point3, c: &Point3, d: &Point3) -> f64 {
    let abd = (b - a).cross(&(d - a)).norm();
    let bcd = (c - b).cross(&(d - b)).norm();
    0.5 * (abd + bcd)
}

/// Centroid (corner average) of a quad face.
pub fn quad_centroid(a: &Point3, b: &Point3, c: &Point3, d: &Point3) -> Point3 {
    Point3::new(
        (a.x + b.x + c.x + d.x) / 4.0,
        (a.y + b.y + c.y + d.y) / 4.0,
        (a.z + b.z + c.z + d.z) / 4.0,
    )
}

/// Local frame of a quad face: X along the first edge, Z along the
/// face normal, Y = X cross Z, origin at the centroid.
///
/// The frame is left-handed (Y = X × Z, not Z × X).
pub fn local_frame(a: &Point3, b: &Point3, c: &Point3, d: &Point3) -> Result<Transform> {
    let tol = Tolerance::DEFAULT;
    let first = b - a;
    let len = first.norm();
    if tol.is_zero(len) {
        return Err(MeshError::DegenerateGeometry(
            "first edge has zero length".to_string(),
        ));
    }
    let x = first / len;
    let z = quad_normal(a, b, c, d)?;
    let y = x.cross(&z);
    let origin = quad_centroid(a, b, c, d);
    Ok(Transform::from_frame(&x, &y, &z, &origin))
}
