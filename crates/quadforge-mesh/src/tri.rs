//! Triangle mesh with per-vertex normals for smooth shading.

use quadforge_math::{Point3, Vec3};

/// A triangle mesh: vertex pool, normal pool, flat index list.
///
/// Builders append vertices and triangles, then call
/// [`compute_normals`](TriMesh::compute_normals) to fill the normal
/// pool. Normals are indexed in step with vertices.
#[derive(Debug, Clone, Default)]
pub struct TriMesh {
    points: Vec<Point3>,
    normals: Vec<Vec3>,
    indices: Vec<u32>,
    revision: u64,
}

impl TriMesh {
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

    /// Append a normal and return its index.
    pub fn add_normal(&mut self, n: Vec3) -> u32 {
        self.normals.push(n);
        self.revision += 1;
        (self.normals.len() - 1) as u32
    }

    /// Append a triangle from three vertex indices in winding order.
    pub fn add_tri(&mut self, i1: u32, i2: u32, i3: u32) {
        self.indices.extend_from_slice(&[i1, i2, i3]);
        self.revision += 1;
    }

    /// Append a quad as two triangles sharing the `i1`-`i3` diagonal.
    pub fn add_quad(&mut self, i1: u32, i2: u32, i3: u32, i4: u32) {
        self.add_tri(i1, i2, i3);
        self.add_tri(i1, i3, i4);
    }

    /// Remove all vertices, normals and triangles.
    pub fn clear(&mut self) {
        self.points.clear();
        self.normals.clear();
        self.indices.clear();
        self.revision += 1;
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// All vertex positions.
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Per-vertex normals; empty until filled by
    /// [`compute_normals`](Self::compute_normals) or
    /// [`add_normal`](Self::add_normal).
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Flat triangle index list, three entries per triangle.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Monotonic change counter, bumped by every mutating call.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Rebuild per-vertex normals by area-weighted accumulation.
    ///
    /// Every vertex normal is reset, each triangle adds its
    /// un-normalized cross-product normal to its three corners (larger
    /// triangles weigh more), then each sum is normalized. Vertices
    /// referenced by no triangle keep a zero normal.
    pub fn compute_normals(&mut self) {
        self.normals.clear();
        self.normals.resize(self.points.len(), Vec3::zeros());
        for tri in self.indices.chunks_exact(3) {
            let (i1, i2, i3) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            // triangles referencing vertices that were never added are skipped
            if i1 >= self.points.len() || i2 >= self.points.len() || i3 >= self.points.len() {
                continue;
            }
            let n = (self.points[i2] - self.points[i1]).cross(&(self.points[i3] - self.points[i1]));
            self.normals[i1] += n;
            self.normals[i2] += n;
            self.normals[i3] += n;
        }
        for n in &mut self.normals {
            let len = n.norm();
            if len > 1e-12 {
                *n /= len;
            }
        }
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_points() -> [Point3; 4] {
        [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_add_quad_splits_on_first_third_diagonal() {
        let mut mesh = TriMesh::new();
        for p in square_points() {
            mesh.add_vertex(p);
        }
        mesh.add_quad(0, 1, 2, 3);
        assert_eq!(mesh.indices(), &[0, 1, 2, 0, 2, 3]);
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn test_compute_normals_flat_square() {
        let mut mesh = TriMesh::new();
        for p in square_points() {
            mesh.add_vertex(p);
        }
        mesh.add_quad(0, 1, 2, 3);
        mesh.compute_normals();
        assert_eq!(mesh.normals().len(), 4);
        for n in mesh.normals() {
            assert!(n.x.abs() < 1e-12);
            assert!(n.y.abs() < 1e-12);
            assert!((n.z - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_compute_normals_weights_by_triangle_area() {
        let mut mesh = TriMesh::new();
        let shared = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        // large triangle in the XY plane, unnormalized normal (0, 0, 4)
        let b = mesh.add_vertex(Point3::new(2.0, 0.0, 0.0));
        let c = mesh.add_vertex(Point3::new(0.0, 2.0, 0.0));
        mesh.add_tri(shared, b, c);
        // small triangle in the XZ plane, unnormalized normal (0, 1, 0)
        let e = mesh.add_vertex(Point3::new(0.0, 0.0, 1.0));
        let f = mesh.add_vertex(Point3::new(1.0, 0.0, 1.0));
        mesh.add_tri(shared, e, f);

        mesh.compute_normals();
        let n = mesh.normals()[shared as usize];
        assert!((n.norm() - 1.0).abs() < 1e-12);
        // the large triangle dominates the blend
        assert!(n.z > 0.9);
        assert!(n.y > 0.0);
    }

    #[test]
    fn test_compute_normals_leaves_unreferenced_vertices_zero() {
        let mut mesh = TriMesh::new();
        mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(Point3::new(0.0, 1.0, 0.0));
        let dangling = mesh.add_vertex(Point3::new(5.0, 5.0, 5.0));
        mesh.add_tri(0, 1, 2);
        mesh.compute_normals();
        assert!(mesh.normals()[dangling as usize].norm() < 1e-12);
    }

    #[test]
    fn test_clear_resets_pools() {
        let mut mesh = TriMesh::new();
        mesh.add_vertex(Point3::origin());
        mesh.add_normal(Vec3::z());
        mesh.add_tri(0, 0, 0);
        let revision = mesh.revision();
        mesh.clear();
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert!(mesh.normals().is_empty());
        assert!(mesh.revision() > revision);
    }
}
