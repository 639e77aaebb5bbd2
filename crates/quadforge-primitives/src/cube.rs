//! The starting cube every editing session begins from.

use quadforge_math::Point3;
use quadforge_mesh::QuadMesh;

/// Build the unit cube: 8 vertices on the 0/1 lattice, 6 quads wound
/// so every face normal points out of the solid.
pub fn make_cube() -> QuadMesh {
    let mut mesh = QuadMesh::new();

    let p1 = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
    let p2 = mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
    let p3 = mesh.add_vertex(Point3::new(1.0, 1.0, 0.0));
    let p4 = mesh.add_vertex(Point3::new(0.0, 1.0, 0.0));
    let p5 = mesh.add_vertex(Point3::new(1.0, 0.0, 1.0));
    let p6 = mesh.add_vertex(Point3::new(0.0, 0.0, 1.0));
    let p7 = mesh.add_vertex(Point3::new(0.0, 1.0, 1.0));
    let p8 = mesh.add_vertex(Point3::new(1.0, 1.0, 1.0));

    mesh.add_quad(p4, p3, p2, p1); // bottom
    mesh.add_quad(p1, p2, p5, p6); // front
    mesh.add_quad(p1, p6, p7, p4); // left
    mesh.add_quad(p6, p5, p8, p7); // top
    mesh.add_quad(p2, p3, p8, p5); // right
    mesh.add_quad(p3, p4, p7, p8); // back

    mesh
}
