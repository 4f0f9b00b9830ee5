//! Triangle access for exporters

use crate::mesh::vertex::Vertex;

/// A closed surface that exporters can walk one triangle at a time.
///
/// Each yielded vertex carries the facet normal, pointing out of the solid.
pub trait Triangulated3D {
    /// Calls `f` with every boundary triangle, counter-clockwise seen from outside.
    fn visit_triangles<F>(&self, f: F)
    where
        F: FnMut([Vertex; 3]);

    /// Number of triangles [`visit_triangles`](Self::visit_triangles) yields.
    fn triangle_count(&self) -> usize {
        let mut n = 0;
        self.visit_triangles(|_| n += 1);
        n
    }
}
