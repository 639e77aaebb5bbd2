//! Indexed quad mesh storage and its derived views.

use std::collections::HashSet;

use quadforge_math::{Point3, Transform, Vec3};
use tracing::debug;

use crate::error::{MeshError, Result};
use crate::face;

/// An editable quad mesh backed by flat index arenas.
///
/// Vertices live in an append-only pool and faces are stored as a flat
/// index list, four entries per face in winding order. Faces that
/// share a vertex reference the same pool slot, so in-place edits such
/// as [`offset_quad`](QuadMesh::offset_quad) move that corner for
/// every incident face.
#[derive(Debug, Clone, Default)]
pub struct QuadMesh {
    pub(crate) points: Vec<Point3>,
    pub(crate) quads: Vec<u32>,
    pub(crate) revision: u64,
}

impl QuadMesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex and return its index.
    pub fn add_vertex(&mut self, p: Point3) -> u32 {
        self.points.push(p);
        self.revision += 1;
        (self.points.len() - 1) as u32
    }

    /// Append a face from four vertex indices in winding order.
    ///
    /// Indices are stored as given; the caller is responsible for
    /// referencing existing vertices and winding the face positively.
    pub fn add_quad(&mut self, i1: u32, i2: u32, i3: u32, i4: u32) {
        self.quads.extend_from_slice(&[i1, i2, i3, i4]);
        self.revision += 1;
    }

    /// Remove all vertices and faces.
    pub fn clear(&mut self) {
        debug!(
            vertices = self.points.len(),
            faces = self.quad_count(),
            "clearing quad mesh"
        );
        self.points.clear();
        self.quads.clear();
        self.revision += 1;
    }

    /// Number of vertices in the pool.
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Number of quad faces.
    pub fn quad_count(&self) -> usize {
        self.quads.len() / 4
    }

    /// Vertex position by pool index.
    pub fn vertex(&self, index: usize) -> Result<Point3> {
        self.points
            .get(index)
            .copied()
            .ok_or(MeshError::IndexOutOfRange {
                index,
                len: self.points.len(),
            })
    }

    /// The four vertex indices of a face, in winding order.
    pub fn quad(&self, face: usize) -> Result<[u32; 4]> {
        if face >= self.quad_count() {
            return Err(MeshError::IndexOutOfRange {
                index: face,
                len: self.quad_count(),
            });
        }
        let base = face * 4;
        Ok([
            self.quads[base],
            self.quads[base + 1],
            self.quads[base + 2],
            self.quads[base + 3],
        ])
    }

    /// The four corner positions of a face, in winding order.
    pub fn corners(&self, face: usize) -> Result<[Point3; 4]> {
        let q = self.quad(face)?;
        Ok([
            self.vertex(q[0] as usize)?,
            self.vertex(q[1] as usize)?,
            self.vertex(q[2] as usize)?,
            self.vertex(q[3] as usize)?,
        ])
    }

    /// All vertex positions, in the order the index buffers reference.
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Flat face-index list, four entries per face.
    pub fn quad_indices(&self) -> &[u32] {
        &self.quads
    }

    /// Monotonic change counter, bumped by every mutating call.
    ///
    /// Renderers compare this against the revision of their last
    /// upload to decide when buffers must be rebuilt.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Triangle index list for shading, two triangles per face.
    ///
    /// Each face `(A, B, C, D)` is split along the B-D diagonal into
    /// `(A, B, D)` and `(B, C, D)`, preserving winding.
    pub fn derive_triangles(&self) -> Vec<u32> {
        let mut indices = Vec::with_capacity(self.quads.len() / 4 * 6);
        for quad in self.quads.chunks_exact(4) {
            indices.extend_from_slice(&[quad[0], quad[1], quad[3]]);
            indices.extend_from_slice(&[quad[1], quad[2], quad[3]]);
        }
        indices
    }

    /// Edge index list for wireframes, two entries per edge.
    ///
    /// Each undirected edge appears once even when shared between
    /// faces; the direction of first appearance is kept.
    pub fn derive_edges(&self) -> Vec<u32> {
        let mut seen: HashSet<(u32, u32)> = HashSet::new();
        let mut indices = Vec::new();
        for quad in self.quads.chunks_exact(4) {
            for k in 0..4 {
                let a = quad[k];
                let b = quad[(k + 1) % 4];
                if seen.insert((a.min(b), a.max(b))) {
                    indices.extend_from_slice(&[a, b]);
                }
            }
        }
        indices
    }

    /// Unit normal of a face (averaged corner normals).
    pub fn face_normal(&self, face: usize) -> Result<Vec3> {
        let [a, b, c, d] = self.corners(face)?;
        face::quad_normal(&a, &b, &c, &d)
    }

    /// Area of a face.
    pub fn face_area(&self, face: usize) -> Result<f64> {
        let [a, b, c, d] = self.corners(face)?;
        Ok(face::quad_area(&a, &b, &c, &d))
    }

    /// Centroid of a face.
    pub fn face_centroid(&self, face: usize) -> Result<Point3> {
        let [a, b, c, d] = self.corners(face)?;
        Ok(face::quad_centroid(&a, &b, &c, &d))
    }

    /// Local frame of a face; see [`face::local_frame`].
    pub fn local_frame(&self, face: usize) -> Result<Transform> {
        let [a, b, c, d] = self.corners(face)?;
        face::local_frame(&a, &b, &c, &d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> QuadMesh {
        let mut mesh = QuadMesh::new();
        let a = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        let b = mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
        let c = mesh.add_vertex(Point3::new(1.0, 1.0, 0.0));
        let d = mesh.add_vertex(Point3::new(0.0, 1.0, 0.0));
        mesh.add_quad(a, b, c, d);
        mesh
    }

    #[test]
    fn test_add_vertex_returns_sequential_indices() {
        let mut mesh = QuadMesh::new();
        assert_eq!(mesh.add_vertex(Point3::new(0.0, 0.0, 0.0)), 0);
        assert_eq!(mesh.add_vertex(Point3::new(1.0, 0.0, 0.0)), 1);
        assert_eq!(mesh.add_vertex(Point3::new(2.0, 0.0, 0.0)), 2);
        mesh.clear();
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.add_vertex(Point3::new(0.0, 0.0, 0.0)), 0);
    }

    #[test]
    fn test_derive_triangles_splits_on_bd_diagonal() {
        let mut mesh = unit_square();
        let e = mesh.add_vertex(Point3::new(2.0, 0.0, 0.0));
        let f = mesh.add_vertex(Point3::new(2.0, 1.0, 0.0));
        mesh.add_quad(1, e, f, 2);

        let tris = mesh.derive_triangles();
        assert_eq!(tris.len(), 12);
        assert_eq!(&tris[..6], &[0, 1, 3, 1, 2, 3]);
        assert_eq!(&tris[6..], &[1, 4, 2, 4, 5, 2]);
    }

    #[test]
    fn test_derive_edges_single_quad() {
        let mesh = unit_square();
        assert_eq!(mesh.derive_edges(), vec![0, 1, 1, 2, 2, 3, 3, 0]);
    }

    #[test]
    fn test_derive_edges_dedups_shared_edge() {
        let mut mesh = unit_square();
        let e = mesh.add_vertex(Point3::new(2.0, 0.0, 0.0));
        let f = mesh.add_vertex(Point3::new(2.0, 1.0, 0.0));
        mesh.add_quad(1, e, f, 2);

        let edges = mesh.derive_edges();
        // 4 + 4 boundary edges minus the shared (1,2) edge
        assert_eq!(edges.len(), 14);
        let pairs: Vec<(u32, u32)> = edges
            .chunks_exact(2)
            .map(|e| (e[0].min(e[1]), e[0].max(e[1])))
            .collect();
        assert_eq!(pairs.iter().filter(|&&p| p == (1, 2)).count(), 1);
    }

    #[test]
    fn test_unit_square_face_queries() {
        let mesh = unit_square();
        let n = mesh.face_normal(0).unwrap();
        assert!(n.x.abs() < 1e-12);
        assert!(n.y.abs() < 1e-12);
        assert!((n.z - 1.0).abs() < 1e-12);
        assert!((mesh.face_area(0).unwrap() - 1.0).abs() < 1e-12);
        let centre = mesh.face_centroid(0).unwrap();
        assert!((centre - Point3::new(0.5, 0.5, 0.0)).norm() < 1e-12);
        let frame = mesh.local_frame(0).unwrap();
        assert!((frame.origin() - centre).norm() < 1e-12);
    }

    #[test]
    fn test_accessors_reject_bad_indices() {
        let mesh = unit_square();
        assert!(matches!(
            mesh.quad(1),
            Err(MeshError::IndexOutOfRange { index: 1, len: 1 })
        ));
        assert!(matches!(
            mesh.vertex(99),
            Err(MeshError::IndexOutOfRange { .. })
        ));

        // a face whose indices point past the vertex pool fails at
        // corner lookup rather than panicking
        let mut dangling = QuadMesh::new();
        dangling.add_quad(0, 1, 2, 3);
        assert!(matches!(
            dangling.corners(0),
            Err(MeshError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_revision_advances_on_every_edit() {
        let mut mesh = QuadMesh::new();
        let r0 = mesh.revision();
        mesh.add_vertex(Point3::origin());
        assert!(mesh.revision() > r0);
        let r1 = mesh.revision();
        mesh.add_quad(0, 0, 0, 0);
        assert!(mesh.revision() > r1);
        let r2 = mesh.revision();
        mesh.clear();
        assert!(mesh.revision() > r2);
    }
}
