//! Flat GPU-ready buffers and the cache that keeps them in sync.

use quadforge_math::Mat4;
use quadforge_mesh::{QuadMesh, TriMesh};
use tracing::debug;

/// Vertex and index buffers in the flat layout GPUs upload directly.
#[derive(Debug, Clone, Default)]
pub struct RenderBuffers {
    /// Flat vertex positions: `[x0, y0, z0, x1, y1, z1, ...]` (f32).
    pub positions: Vec<f32>,
    /// Flat vertex normals, same layout; empty when the source has none.
    pub normals: Vec<f32>,
    /// Triangle indices, three per triangle.
    pub triangle_indices: Vec<u32>,
    /// Edge endpoint indices, two per edge; empty when the source has none.
    pub edge_indices: Vec<u32>,
}

impl RenderBuffers {
    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.triangle_indices.len() / 3
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_indices.len() / 2
    }
}

/// A mesh that can hand its geometry to the renderer.
pub trait RenderSource {
    /// Monotonic change counter; moves whenever the buffers would.
    fn revision(&self) -> u64;

    /// Derive fresh buffers from the current geometry.
    fn render_buffers(&self) -> RenderBuffers;
}

impl RenderSource for QuadMesh {
    fn revision(&self) -> u64 {
        QuadMesh::revision(self)
    }

    fn render_buffers(&self) -> RenderBuffers {
        let mut buffers = RenderBuffers::default();
        for p in self.points() {
            buffers
                .positions
                .extend_from_slice(&[p.x as f32, p.y as f32, p.z as f32]);
        }
        buffers.triangle_indices = self.derive_triangles();
        buffers.edge_indices = self.derive_edges();
        buffers
    }
}

impl RenderSource for TriMesh {
    fn revision(&self) -> u64 {
        TriMesh::revision(self)
    }

    fn render_buffers(&self) -> RenderBuffers {
        let mut buffers = RenderBuffers::default();
        for p in self.points() {
            buffers
                .positions
                .extend_from_slice(&[p.x as f32, p.y as f32, p.z as f32]);
        }
        for n in self.normals() {
            buffers
                .normals
                .extend_from_slice(&[n.x as f32, n.y as f32, n.z as f32]);
        }
        buffers.triangle_indices = self.indices().to_vec();
        buffers
    }
}

/// Owns the latest [`RenderBuffers`] plus the camera matrices, and
/// re-derives the buffers only when the source mesh has changed.
#[derive(Debug, Clone)]
pub struct BufferCache {
    buffers: RenderBuffers,
    last_revision: Option<u64>,
    view: Mat4,
    projection: Mat4,
}

impl BufferCache {
    /// Create an empty cache that has never synced.
    pub fn new() -> Self {
        Self {
            buffers: RenderBuffers::default(),
            last_revision: None,
            view: Mat4::identity(),
            projection: Mat4::identity(),
        }
    }

    /// Store the camera matrices. They ride along with the buffers for
    /// the renderer to pick up; the kernel itself never reads them.
    pub fn set_matrices(&mut self, view: Mat4, projection: Mat4) {
        self.view = view;
        self.projection = projection;
    }

    /// The view matrix last handed to [`set_matrices`](Self::set_matrices).
    pub fn view(&self) -> &Mat4 {
        &self.view
    }

    /// The projection matrix last handed to [`set_matrices`](Self::set_matrices).
    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }

    /// The buffers from the most recent sync.
    pub fn buffers(&self) -> &RenderBuffers {
        &self.buffers
    }

    /// Re-derive the buffers if the source changed since the last sync.
    ///
    /// Staleness is judged by the revision number alone, so a cache
    /// tracks a single source; call [`reset`](Self::reset) before
    /// handing it a different mesh.
    ///
    /// Returns whether the buffers were rebuilt and need re-uploading.
    pub fn sync(&mut self, source: &impl RenderSource) -> bool {
        let revision = source.revision();
        if self.last_revision == Some(revision) {
            return false;
        }
        self.buffers = source.render_buffers();
        self.last_revision = Some(revision);
        debug!(revision, "render buffers rebuilt");
        true
    }

    /// Forget the last synced revision, forcing the next
    /// [`sync`](Self::sync) to rebuild.
    ///
    /// Revision counters from different meshes are not comparable, so
    /// retargeting a cache to a new source starts here.
    pub fn reset(&mut self) {
        self.last_revision = None;
    }
}

impl Default for BufferCache {
    fn default() -> Self {
        Self::new()
    }
}
