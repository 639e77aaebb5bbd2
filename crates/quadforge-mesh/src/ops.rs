//! In-place editing operators for quad faces.
//!
//! Every operator validates its inputs before mutating, so a failed
//! call leaves the mesh untouched. Corners shared with neighboring
//! faces move with the face being edited.

use quadforge_math::{Dir3, Transform};
use tracing::debug;

use crate::error::Result;
use crate::face;
use crate::quad::QuadMesh;

impl QuadMesh {
    /// Extrude a face along its normal by the square root of its area.
    ///
    /// Four new vertices are appended, the face is rewired to them,
    /// and four side quads close the band around the old boundary.
    /// Vertex count grows by 4, face count by 4.
    pub fn extrude_quad(&mut self, face: usize) -> Result<()> {
        let quad = self.quad(face)?;
        let [a, b, c, d] = self.corners(face)?;
        let normal = face::quad_normal(&a, &b, &c, &d)?;
        let travel = face::quad_area(&a, &b, &c, &d).sqrt();
        let offset = normal * travel;

        let na = self.add_vertex(a + offset);
        let nb = self.add_vertex(b + offset);
        let nc = self.add_vertex(c + offset);
        let nd = self.add_vertex(d + offset);

        let base = face * 4;
        self.quads[base] = na;
        self.quads[base + 1] = nb;
        self.quads[base + 2] = nc;
        self.quads[base + 3] = nd;

        let [ia, ib, ic, id] = quad;
        self.add_quad(ia, ib, nb, na);
        self.add_quad(ib, ic, nc, nb);
        self.add_quad(ic, id, nd, nc);
        self.add_quad(id, ia, na, nd);

        debug!(face, travel, "extruded face");
        Ok(())
    }

    /// Translate a face along its normal by `distance`.
    ///
    /// Corners move in place; a negative distance moves against the
    /// normal, so offsetting by `d` then `-d` restores the face.
    pub fn offset_quad(&mut self, face: usize, distance: f64) -> Result<()> {
        let quad = self.quad(face)?;
        let [a, b, c, d] = self.corners(face)?;
        let normal = face::quad_normal(&a, &b, &c, &d)?;
        let offset = normal * distance;
        for index in quad {
            self.points[index as usize] += offset;
        }
        self.revision += 1;
        debug!(face, distance, "offset face");
        Ok(())
    }

    /// Scale a face about its centroid by `factor`.
    ///
    /// A factor of 1.0 leaves the face unchanged; values below 1.0
    /// pull the corners toward the centroid, values above push out.
    pub fn shrink_quad(&mut self, face: usize, factor: f64) -> Result<()> {
        let quad = self.quad(face)?;
        let [a, b, c, d] = self.corners(face)?;
        let centre = face::quad_centroid(&a, &b, &c, &d);
        for index in quad {
            let p = self.points[index as usize];
            self.points[index as usize] = centre + (p - centre) * factor;
        }
        self.revision += 1;
        debug!(face, factor, "shrunk face");
        Ok(())
    }

    /// Spin a face about its own centroid, around the face normal, by
    /// `angle_deg` degrees.
    ///
    /// The centroid stays fixed and corner-to-centroid distances are
    /// preserved.
    pub fn rotate_quad(&mut self, face: usize, angle_deg: f64) -> Result<()> {
        let quad = self.quad(face)?;
        let frame = self.local_frame(face)?;
        let axis = Dir3::new_normalize(frame.axis_z());
        let centre = frame.origin();
        let spin = Transform::translation(centre.x, centre.y, centre.z)
            .then(&Transform::rotation_about_axis(&axis, angle_deg.to_radians()))
            .then(&Transform::translation(-centre.x, -centre.y, -centre.z));
        for index in quad {
            let p = self.points[index as usize];
            self.points[index as usize] = spin.apply_point(&p);
        }
        self.revision += 1;
        debug!(face, angle_deg, "rotated face");
        Ok(())
    }
}
