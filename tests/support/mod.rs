//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use nalgebra::Point3;
use rackgen::{Wire, aabb::Aabb, float_types::Real};

/// Returns true if two floats are within `eps` of each other.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Asserts two floats agree within `eps`, printing both on failure.
#[track_caller]
pub fn assert_close(actual: Real, expected: Real, eps: Real) {
    assert!(
        approx_eq(actual, expected, eps),
        "expected {expected}, got {actual} (eps {eps})"
    );
}

/// Start vertices of every edge of a wire.
pub fn edge_starts(wire: &Wire) -> Vec<Point3<Real>> {
    wire.edges().iter().map(|e| e.first_vertex()).collect()
}

/// Bounding box of a wire's vertices, arcs sampled finely.
pub fn wire_bounds(wire: &Wire) -> Aabb {
    let points = wire.to_points(32);
    Aabb::from_points(&points).expect("wire has vertices")
}
