//! Planar faces bounded by a closed wire

use crate::errors::RackError;
use crate::float_types::{Real, tolerance};
use crate::mesh::{Mesh, loft::loft_rings};
use crate::sketch::validate::ring_self_intersection;
use crate::sketch::wire::Wire;
use crate::traits::Translate;
use geo::{Area, Coord, LineString, Polygon as GeoPolygon};
use nalgebra::{Point3, Vector3};

/// A planar region bounded by a closed, non-self-intersecting wire lying in
/// a plane parallel to XY.
#[derive(Debug, Clone)]
pub struct Face {
    wire: Wire,
    ring: Vec<Point3<Real>>,
}

impl Face {
    /// Builds a face from a closed wire, discretising arcs into
    /// `arc_segments` chords.
    pub fn from_wire(wire: Wire, arc_segments: usize) -> Result<Self, RackError> {
        if !wire.is_closed() {
            let (a, b) = (wire.first_vertex(), wire.last_vertex());
            return Err(RackError::geometry(format!(
                "face boundary is open: starts at ({:.6}, {:.6}) but ends at ({:.6}, {:.6})",
                a.x, a.y, b.x, b.y
            )));
        }
        let ring = wire.ring_points(arc_segments);
        validate_ring(&ring)?;
        Ok(Face { wire, ring })
    }

    pub fn wire(&self) -> &Wire {
        &self.wire
    }

    /// Boundary vertices without the repeated closing point.
    pub fn ring(&self) -> &[Point3<Real>] {
        &self.ring
    }

    /// Signed area in the XY plane: positive when the boundary runs counter-clockwise.
    pub fn signed_area(&self) -> Real {
        self.to_geo().signed_area()
    }

    pub fn area(&self) -> Real {
        self.to_geo().unsigned_area()
    }

    pub fn to_geo(&self) -> GeoPolygon<Real> {
        let coords: Vec<Coord<Real>> = self.ring.iter().map(|p| Coord { x: p.x, y: p.y }).collect();
        GeoPolygon::new(LineString::new(coords), vec![])
    }

    /// Sweeps the face along `vector` into a closed prism.
    ///
    /// The vector must leave the face's plane; an oblique vector shears the
    /// prism but keeps its volume at `area * vector.z`.
    pub fn extrude(&self, vector: Vector3<Real>) -> Result<Mesh, RackError> {
        if vector.z.abs() <= tolerance() {
            return Err(RackError::geometry("extrusion vector does not leave the face plane"));
        }
        let top: Vec<Point3<Real>> = self.ring.iter().map(|p| *p + vector).collect();
        loft_rings(&[self.ring.clone(), top], true)
    }
}

impl Translate for Face {
    fn translate_vector(&self, vector: Vector3<Real>) -> Self {
        Face {
            wire: self.wire.translate_vector(vector),
            ring: self.ring.iter().map(|p| *p + vector).collect(),
        }
    }
}

/// Checks that a ring is a usable face boundary: at least three vertices,
/// all at one height, and no self-intersections.
pub(crate) fn validate_ring(ring: &[Point3<Real>]) -> Result<(), RackError> {
    let tol = tolerance();
    if ring.len() < 3 {
        return Err(RackError::geometry(format!(
            "face boundary has {} distinct vertices, at least 3 are needed",
            ring.len()
        )));
    }
    let z = ring[0].z;
    if ring.iter().any(|p| (p.z - z).abs() > tol) {
        return Err(RackError::geometry("face boundary is not parallel to the XY plane"));
    }
    if let Some(p) = ring_self_intersection(ring) {
        return Err(RackError::geometry(format!(
            "face boundary intersects itself at ({:.6}, {:.6})",
            p.x, p.y
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rectangle(w: Real, h: Real) -> Wire {
        let p = |x: Real, y: Real| Point3::new(x, y, 0.0);
        Wire::from_segments(&[
            [p(0.0, 0.0), p(w, 0.0)],
            [p(w, 0.0), p(w, h)],
            [p(w, h), p(0.0, h)],
            [p(0.0, h), p(0.0, 0.0)],
        ])
        .unwrap()
    }

    #[test]
    fn rectangle_area_and_prism_volume() {
        let face = Face::from_wire(rectangle(2.0, 3.0), 8).unwrap();
        assert!((face.area() - 6.0).abs() < 1e-12);
        assert!(face.signed_area() > 0.0);
        let prism = face.extrude(Vector3::new(0.0, 0.0, 4.0)).unwrap();
        assert!((prism.volume() - 24.0).abs() < 1e-9);
    }

    #[test]
    fn sheared_extrusion_keeps_volume() {
        let face = Face::from_wire(rectangle(2.0, 3.0), 8).unwrap();
        let prism = face.extrude(Vector3::new(0.0, 1.5, 4.0)).unwrap();
        assert!((prism.volume() - 24.0).abs() < 1e-9);
    }

    #[test]
    fn open_wire_is_not_a_face() {
        let open = rectangle(1.0, 1.0).without_last_edge().unwrap();
        assert!(Face::from_wire(open, 8).is_err());
    }

    #[test]
    fn flat_extrusion_is_rejected() {
        let face = Face::from_wire(rectangle(1.0, 1.0), 8).unwrap();
        assert!(face.extrude(Vector3::new(1.0, 0.0, 0.0)).is_err());
    }
}
