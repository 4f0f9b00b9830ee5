//! Straight and circular edges, the building blocks of a [`Wire`](crate::sketch::wire::Wire)

use crate::float_types::Real;
use crate::traits::Translate;
use nalgebra::{Point3, Vector3};

/// A single edge of a wire.
///
/// Arcs lie in a plane parallel to XY (at `center.z`) and are described by a
/// start angle and a signed sweep: positive sweeps run counter-clockwise when
/// looking down the +Z axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edge {
    Line {
        start: Point3<Real>,
        end: Point3<Real>,
    },
    Arc {
        center: Point3<Real>,
        radius: Real,
        start_angle: Real,
        sweep: Real,
    },
}

impl Edge {
    /// Straight edge between two points.
    #[inline]
    pub const fn line(start: Point3<Real>, end: Point3<Real>) -> Self {
        Edge::Line { start, end }
    }

    #[inline]
    pub const fn is_arc(&self) -> bool {
        matches!(self, Edge::Arc { .. })
    }

    /// Point where the edge begins.
    pub fn first_vertex(&self) -> Point3<Real> {
        match *self {
            Edge::Line { start, .. } => start,
            Edge::Arc {
                center,
                radius,
                start_angle,
                ..
            } => arc_point(center, radius, start_angle),
        }
    }

    /// Point where the edge ends.
    pub fn last_vertex(&self) -> Point3<Real> {
        match *self {
            Edge::Line { end, .. } => end,
            Edge::Arc {
                center,
                radius,
                start_angle,
                sweep,
            } => arc_point(center, radius, start_angle + sweep),
        }
    }

    pub fn length(&self) -> Real {
        match *self {
            Edge::Line { start, end } => (end - start).norm(),
            Edge::Arc { radius, sweep, .. } => radius * sweep.abs(),
        }
    }

    /// Samples the edge from its first to its last vertex (both included).
    ///
    /// Lines yield their two endpoints; arcs are split into `arc_segments`
    /// chords of equal angle.
    pub fn sample(&self, arc_segments: usize) -> Vec<Point3<Real>> {
        match *self {
            Edge::Line { start, end } => vec![start, end],
            Edge::Arc {
                center,
                radius,
                start_angle,
                sweep,
            } => {
                let n = arc_segments.max(1);
                (0..=n)
                    .map(|i| {
                        let t = i as Real / n as Real;
                        arc_point(center, radius, start_angle + t * sweep)
                    })
                    .collect()
            },
        }
    }
}

#[inline]
fn arc_point(center: Point3<Real>, radius: Real, angle: Real) -> Point3<Real> {
    center + Vector3::new(radius * angle.cos(), radius * angle.sin(), 0.0)
}

impl Translate for Edge {
    fn translate_vector(&self, vector: Vector3<Real>) -> Self {
        match *self {
            Edge::Line { start, end } => Edge::Line {
                start: start + vector,
                end: end + vector,
            },
            Edge::Arc {
                center,
                radius,
                start_angle,
                sweep,
            } => Edge::Arc {
                center: center + vector,
                radius,
                start_angle,
                sweep,
            },
        }
    }
}
