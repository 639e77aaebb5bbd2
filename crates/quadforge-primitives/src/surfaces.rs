//! Triangle-mesh showcase surfaces: pyramid, ring, spiral.

use std::f64::consts::TAU;

use quadforge_math::Point3;
use quadforge_mesh::TriMesh;
use serde::{Deserialize, Serialize};

use crate::{PrimitiveError, Result};

/// Build a square pyramid: a 2x2 base in the XY plane and an apex two
/// units above its centre.
///
/// The base quad is wound to face downward and the four side triangles
/// to face outward, so smooth normals shade the solid correctly.
pub fn make_pyramid() -> TriMesh {
    let mut mesh = TriMesh::new();

    let a = mesh.add_vertex(Point3::new(-1.0, -1.0, 0.0));
    let b = mesh.add_vertex(Point3::new(1.0, -1.0, 0.0));
    let c = mesh.add_vertex(Point3::new(1.0, 1.0, 0.0));
    let d = mesh.add_vertex(Point3::new(-1.0, 1.0, 0.0));
    let e = mesh.add_vertex(Point3::new(0.0, 0.0, 2.0));

    // base, seen from below
    mesh.add_quad(a, d, c, b);

    // sides, seen from outside
    mesh.add_tri(a, b, e);
    mesh.add_tri(b, c, e);
    mesh.add_tri(c, d, e);
    mesh.add_tri(d, a, e);

    mesh.compute_normals();
    mesh
}

/// Parameters for [`make_ring`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingParams {
    /// Number of quads around the ring.
    pub segments: u32,
    /// Radius of the inner circle.
    pub inner_radius: f64,
    /// Radius of the outer circle.
    pub outer_radius: f64,
}

impl Default for RingParams {
    fn default() -> Self {
        Self {
            segments: 100,
            inner_radius: 1.0,
            outer_radius: 1.5,
        }
    }
}

impl RingParams {
    /// Validate parameters.
    pub fn validate(&self) -> Result<()> {
        if self.segments < 3 {
            return Err(PrimitiveError::TooFewSegments(self.segments));
        }
        if self.inner_radius <= 0.0 {
            return Err(PrimitiveError::InvalidDimension(
                "inner_radius must be positive".into(),
            ));
        }
        if self.outer_radius <= self.inner_radius {
            return Err(PrimitiveError::InvalidDimension(
                "outer_radius must exceed inner_radius".into(),
            ));
        }
        Ok(())
    }
}

/// Build a flat annulus in the XY plane: two concentric circles of
/// `segments` samples each, joined by quads, closed back on itself.
pub fn make_ring(params: &RingParams) -> Result<TriMesh> {
    params.validate()?;

    let mut mesh = TriMesh::new();
    let n = params.segments;

    for i in 0..n {
        let alpha = f64::from(i) * TAU / f64::from(n);
        let (sin, cos) = alpha.sin_cos();
        mesh.add_vertex(Point3::new(
            params.inner_radius * cos,
            params.inner_radius * sin,
            0.0,
        ));
        mesh.add_vertex(Point3::new(
            params.outer_radius * cos,
            params.outer_radius * sin,
            0.0,
        ));
    }

    for i in 0..n - 1 {
        mesh.add_quad(2 * i, 2 * i + 2, 2 * i + 3, 2 * i + 1);
    }
    // close the loop back to the first pair of samples
    mesh.add_quad(2 * n - 2, 0, 1, 2 * n - 1);

    mesh.compute_normals();
    Ok(mesh)
}

/// Parameters for [`make_spiral`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpiralParams {
    /// Number of quads per full turn.
    pub segments_per_turn: u32,
    /// Number of full turns.
    pub turns: u32,
    /// Outer radius at the start of the spiral.
    pub radius: f64,
    /// Total rise in z over the whole spiral.
    pub height: f64,
    /// Radial width of the band.
    pub band_width: f64,
    /// Ratio of the final outer radius to the starting one.
    pub taper: f64,
}

impl Default for SpiralParams {
    fn default() -> Self {
        Self {
            segments_per_turn: 100,
            turns: 10,
            radius: 2.0,
            height: 2.0,
            band_width: 0.1,
            taper: 0.1,
        }
    }
}

impl SpiralParams {
    /// Validate parameters.
    pub fn validate(&self) -> Result<()> {
        if self.segments_per_turn < 3 {
            return Err(PrimitiveError::TooFewSegments(self.segments_per_turn));
        }
        if self.turns == 0 {
            return Err(PrimitiveError::InvalidDimension(
                "turns must be at least 1".into(),
            ));
        }
        if self.radius <= 0.0 {
            return Err(PrimitiveError::InvalidDimension(
                "radius must be positive".into(),
            ));
        }
        if self.band_width <= 0.0 {
            return Err(PrimitiveError::InvalidDimension(
                "band_width must be positive".into(),
            ));
        }
        if self.taper <= 0.0 {
            return Err(PrimitiveError::InvalidDimension(
                "taper must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Build a spiral band: a two-circle strip whose z rises and whose
/// radius decays by `taper` over `turns` turns.
pub fn make_spiral(params: &SpiralParams) -> Result<TriMesh> {
    params.validate()?;

    let mut mesh = TriMesh::new();
    let n = params.segments_per_turn as usize * params.turns as usize;

    let d_alpha = TAU / f64::from(params.segments_per_turn);
    let dz = params.height / n as f64;
    let shrink = params.taper.powf(1.0 / n as f64);
    let lift = params.height / (4.0 * f64::from(params.turns));

    let mut outer = params.radius;
    let mut alpha = 0.0_f64;
    let mut z = 0.0;
    for _ in 0..n {
        let (sin, cos) = alpha.sin_cos();
        mesh.add_vertex(Point3::new(outer * cos, outer * sin, z));
        let inner = outer - params.band_width;
        mesh.add_vertex(Point3::new(inner * cos, inner * sin, z + lift));

        alpha += d_alpha;
        z += dz;
        outer *= shrink;
    }

    for i in 1..n as u32 {
        mesh.add_quad(2 * i - 2, 2 * i, 2 * i + 1, 2 * i - 1);
    }

    mesh.compute_normals();
    Ok(mesh)
}
