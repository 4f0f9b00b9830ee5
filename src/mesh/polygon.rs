//! Planar polygons that make up a [`Mesh`](crate::mesh::Mesh) boundary

use crate::float_types::Real;
use crate::mesh::vertex::Vertex;
use nalgebra::{Point3, Vector3};

/// A planar, convex-or-not polygon with outward-facing vertex normals.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Vertex>,
}

impl Polygon {
    /// Builds a polygon from positions, giving every vertex the Newell normal
    /// of the loop.
    pub fn from_points(points: &[Point3<Real>]) -> Self {
        let normal = newell_normal(points);
        Polygon {
            vertices: points.iter().map(|&p| Vertex::new(p, normal)).collect(),
        }
    }

    /// Unit normal from the winding of the vertices.
    pub fn normal(&self) -> Vector3<Real> {
        let points: Vec<Point3<Real>> = self.vertices.iter().map(|v| v.pos).collect();
        newell_normal(&points)
    }

    /// Reverse winding and normals.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        for v in &mut self.vertices {
            v.flip();
        }
    }

    /// Fan triangulation from the first vertex. Exact for the convex quads
    /// and triangles the loft produces.
    pub fn triangulate(&self) -> Vec<[Vertex; 3]> {
        let n = self.vertices.len();
        if n < 3 {
            return Vec::new();
        }
        (1..n - 1)
            .map(|i| [self.vertices[0], self.vertices[i], self.vertices[i + 1]])
            .collect()
    }
}

/// **Mathematical Foundation: Newell's Method**
///
/// ```text
/// n = Σᵢ (pᵢ - pᵢ₊₁) × (pᵢ + pᵢ₊₁) / 2
/// ```
/// Robust for non-convex loops and nearly collinear vertices.
fn newell_normal(points: &[Point3<Real>]) -> Vector3<Real> {
    let mut n = Vector3::zeros();
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        n.x += (a.y - b.y) * (a.z + b.z);
        n.y += (a.z - b.z) * (a.x + b.x);
        n.z += (a.x - b.x) * (a.y + b.y);
    }
    n.try_normalize(Real::EPSILON).unwrap_or_else(Vector3::zeros)
}
