//! Corner points of mesh polygons

use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

/// A polygon corner: position plus the outward normal of its facet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub pos: Point3<Real>,
    pub normal: Vector3<Real>,
}

impl Vertex {
    /// The normal is stored as given; lofts pass the Newell normal of the
    /// owning polygon.
    pub const fn new(pos: Point3<Real>, normal: Vector3<Real>) -> Self {
        Vertex { pos, normal }
    }

    /// Points the normal the other way, for polygons whose winding is reversed.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
    }
}
