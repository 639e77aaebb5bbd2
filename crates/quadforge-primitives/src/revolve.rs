//! Surface-of-revolution builder.

use quadforge_math::{Point3, Transform};
use quadforge_mesh::TriMesh;
use serde::{Deserialize, Serialize};

use crate::{PrimitiveError, Result};

/// Parameters for [`revolve`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevolveParams {
    /// Angular step between consecutive rings, in degrees.
    pub step_deg: f64,
}

impl Default for RevolveParams {
    fn default() -> Self {
        Self { step_deg: 1.0 }
    }
}

impl RevolveParams {
    /// Validate parameters.
    pub fn validate(&self) -> Result<()> {
        if self.step_deg <= 0.0 || self.step_deg >= 360.0 {
            return Err(PrimitiveError::InvalidStep(self.step_deg));
        }
        Ok(())
    }
}

/// Rotate a profile polyline around the Y axis and quad-stitch the
/// resulting rings into a closed surface.
///
/// One ring of vertices is laid down per `step_deg` of rotation.
/// Consecutive rings are joined by quads and the last ring is joined
/// back to the first, so a full turn shares its seam vertices instead
/// of duplicating them.
///
/// # Errors
///
/// - [`PrimitiveError::InvalidStep`] if `step_deg` is outside (0, 360)
///   or close enough to a full turn that only one ring is laid down
/// - [`PrimitiveError::ProfileTooShort`] if the profile has fewer than
///   two points
pub fn revolve(profile: &[Point3], params: &RevolveParams) -> Result<TriMesh> {
    params.validate()?;
    if profile.len() < 2 {
        return Err(PrimitiveError::ProfileTooShort(profile.len()));
    }

    let mut mesh = TriMesh::new();
    let n = profile.len() as u32;

    let mut rings = 0u32;
    let mut angle = 0.0_f64;
    while angle < 360.0 - 1e-9 {
        let spin = Transform::rotation_y(angle.to_radians());
        for p in profile {
            mesh.add_vertex(spin.apply_point(p));
        }
        rings += 1;
        angle += params.step_deg;
    }
    // the seam needs a second ring to join to
    if rings < 2 {
        return Err(PrimitiveError::InvalidStep(params.step_deg));
    }

    // stitch consecutive rings
    for j in 0..rings - 1 {
        for i in 0..n - 1 {
            let k = j * n + i;
            mesh.add_quad(k, k + 1, k + 1 + n, k + n);
        }
    }
    // join the last ring back to the first
    for i in 0..n - 1 {
        let k = (rings - 1) * n + i;
        mesh.add_quad(k, k + 1, i + 1, i);
    }

    mesh.compute_normals();
    Ok(mesh)
}
