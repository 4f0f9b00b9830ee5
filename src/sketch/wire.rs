//! Ordered chains of connected edges

use crate::errors::RackError;
use crate::float_types::{Real, tolerance};
use crate::sketch::edge::Edge;
use crate::traits::Translate;
use nalgebra::{Point3, Vector3};

/// An ordered sequence of edges where each edge starts where the previous one ends.
#[derive(Debug, Clone, PartialEq)]
pub struct Wire {
    edges: Vec<Edge>,
}

impl Wire {
    /// Builds a wire from edges, checking that consecutive edges connect.
    pub fn from_edges(edges: Vec<Edge>) -> Result<Self, RackError> {
        if edges.is_empty() {
            return Err(RackError::geometry("a wire needs at least one edge"));
        }
        let tol = tolerance();
        for (i, pair) in edges.windows(2).enumerate() {
            let gap = (pair[1].first_vertex() - pair[0].last_vertex()).norm();
            if gap > tol {
                return Err(RackError::geometry(format!(
                    "edges {i} and {} are not connected (gap {gap:e})",
                    i + 1
                )));
            }
        }
        Ok(Wire { edges })
    }

    /// Builds a wire of straight edges from `[start, end]` segments.
    pub fn from_segments(segments: &[[Point3<Real>; 2]]) -> Result<Self, RackError> {
        Self::from_edges(
            segments
                .iter()
                .map(|&[start, end]| Edge::line(start, end))
                .collect(),
        )
    }

    /// Concatenates wires end to end.
    pub fn join<I>(wires: I) -> Result<Self, RackError>
    where
        I: IntoIterator<Item = Wire>,
    {
        Self::from_edges(wires.into_iter().flat_map(|w| w.edges).collect())
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn first_vertex(&self) -> Point3<Real> {
        self.edges[0].first_vertex()
    }

    pub fn last_vertex(&self) -> Point3<Real> {
        self.edges[self.edges.len() - 1].last_vertex()
    }

    /// A wire is closed when its last vertex coincides with its first.
    pub fn is_closed(&self) -> bool {
        (self.last_vertex() - self.first_vertex()).norm() <= tolerance()
    }

    pub fn length(&self) -> Real {
        self.edges.iter().map(Edge::length).sum()
    }

    /// Wire without its last edge, or `None` if nothing would remain.
    pub fn without_last_edge(&self) -> Option<Self> {
        if self.edges.len() < 2 {
            return None;
        }
        Some(Wire {
            edges: self.edges[..self.edges.len() - 1].to_vec(),
        })
    }

    /// Polyline through the wire, first vertex to last vertex.
    ///
    /// Shared vertices between edges appear once and zero-length steps are
    /// dropped. For a closed wire the last point repeats the first.
    pub fn to_points(&self, arc_segments: usize) -> Vec<Point3<Real>> {
        let tol = tolerance();
        let mut points: Vec<Point3<Real>> = Vec::with_capacity(self.edges.len() + 1);
        for edge in &self.edges {
            for p in edge.sample(arc_segments) {
                match points.last() {
                    Some(last) if (p - *last).norm() <= tol => {},
                    _ => points.push(p),
                }
            }
        }
        points
    }

    /// Vertices of the closed ring described by this wire, without the
    /// repeated closing point.
    pub fn ring_points(&self, arc_segments: usize) -> Vec<Point3<Real>> {
        let mut points = self.to_points(arc_segments);
        if points.len() > 1 && self.is_closed() {
            points.pop();
        }
        points
    }
}

impl Translate for Wire {
    fn translate_vector(&self, vector: Vector3<Real>) -> Self {
        Wire {
            edges: self.edges.iter().map(|e| e.translate_vector(vector)).collect(),
        }
    }
}

impl From<Edge> for Wire {
    fn from(edge: Edge) -> Self {
        Wire { edges: vec![edge] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Wire {
        let p = |x: Real, y: Real| Point3::new(x, y, 0.0);
        Wire::from_segments(&[
            [p(0.0, 0.0), p(1.0, 0.0)],
            [p(1.0, 0.0), p(1.0, 1.0)],
            [p(1.0, 1.0), p(0.0, 1.0)],
            [p(0.0, 1.0), p(0.0, 0.0)],
        ])
        .unwrap()
    }

    #[test]
    fn closed_square_ring() {
        let wire = square();
        assert!(wire.is_closed());
        assert_eq!(wire.ring_points(8).len(), 4);
        assert_eq!(wire.to_points(8).len(), 5);
        assert!((wire.length() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn disconnected_edges_are_rejected() {
        let result = Wire::from_edges(vec![
            Edge::line(Point3::origin(), Point3::new(1.0, 0.0, 0.0)),
            Edge::line(Point3::new(2.0, 0.0, 0.0), Point3::new(3.0, 0.0, 0.0)),
        ]);
        assert!(matches!(result, Err(RackError::GeometricConstraint(_))));
    }

    #[test]
    fn dropping_last_edge_opens_the_wire() {
        let open = square().without_last_edge().unwrap();
        assert_eq!(open.len(), 3);
        assert!(!open.is_closed());
    }
}
