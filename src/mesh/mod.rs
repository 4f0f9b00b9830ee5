//! `Mesh`: closed polygonal boundary of a rack solid

use crate::aabb::Aabb;
use crate::float_types::Real;
use crate::traits::Translate;
use nalgebra::{Point3, Vector3};
use std::sync::OnceLock;

pub mod loft;
pub mod polygon;
pub mod triangulate;
pub mod triangulated;
pub mod vertex;

pub use loft::loft;
pub use polygon::Polygon;
pub use vertex::Vertex;

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    /// Planar boundary polygons with outward normals
    pub polygons: Vec<Polygon>,

    /// Lazily calculated AABB that spans `polygons`.
    pub bounding_box: OnceLock<Aabb>,
}

impl Mesh {
    /// Returns a new empty Mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a Mesh from an existing polygon list
    pub fn from_polygons(polygons: Vec<Polygon>) -> Self {
        Mesh {
            polygons,
            bounding_box: OnceLock::new(),
        }
    }

    /// Helper to collect all vertices from the mesh.
    pub fn vertices(&self) -> Vec<Vertex> {
        self.polygons
            .iter()
            .flat_map(|p| p.vertices.iter().copied())
            .collect()
    }

    /// All boundary triangles, fan-triangulated per polygon.
    pub fn triangles(&self) -> Vec<[Vertex; 3]> {
        self.polygons.iter().flat_map(Polygon::triangulate).collect()
    }

    /// **Mathematical Foundation: Divergence Theorem**
    ///
    /// For a closed, consistently oriented triangle surface:
    /// ```text
    /// V = Σ (p₀ · (p₁ × p₂)) / 6
    /// ```
    /// Positive when normals point outward.
    pub fn volume(&self) -> Real {
        self.triangles()
            .iter()
            .map(|[a, b, c]| a.pos.coords.dot(&b.pos.coords.cross(&c.pos.coords)))
            .sum::<Real>()
            / 6.0
    }

    /// Returns an [`Aabb`] indicating the 3D bounds of all `polygons`.
    pub fn bounding_box(&self) -> Aabb {
        *self.bounding_box.get_or_init(|| {
            let positions: Vec<Point3<Real>> = self.vertices().iter().map(|v| v.pos).collect();
            Aabb::from_points(&positions)
                .unwrap_or_else(|| Aabb::new(Point3::origin(), Point3::origin()))
        })
    }

    /// Invalidates object's cached bounding box.
    pub fn invalidate_bounding_box(&mut self) {
        self.bounding_box = OnceLock::new();
    }

    /// Invert this Mesh (flip inside vs. outside)
    pub fn inverse(&self) -> Mesh {
        let mut mesh = self.clone();
        for p in &mut mesh.polygons {
            p.flip();
        }
        mesh
    }
}

impl Translate for Mesh {
    fn translate_vector(&self, vector: Vector3<Real>) -> Self {
        let mut mesh = self.clone();
        for poly in &mut mesh.polygons {
            for vert in &mut poly.vertices {
                vert.pos += vector;
            }
        }
        mesh.invalidate_bounding_box();
        mesh
    }
}
